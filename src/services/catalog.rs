//! Event catalog
//!
//! This service holds the working set of events and computes filtered views
//! for display. Without a real backend it serves a fixed seed list and
//! resolves after a configurable artificial delay that models network
//! asynchrony. Listing preserves insertion order; no implicit sort.

use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::CatalogConfig;
use crate::models::event::{
    CreateEventRequest, Event, EventCategory, EventFilter, UpdateEventRequest,
};
use crate::utils::errors::{AppError, Result};
use crate::utils::helpers;

/// In-memory event catalog
#[derive(Debug, Clone)]
pub struct EventCatalog {
    events: Arc<RwLock<Vec<Event>>>,
    latency: Duration,
}

impl EventCatalog {
    /// Create a new EventCatalog instance
    pub fn new(config: &CatalogConfig) -> Self {
        let events = if config.seed_demo_events {
            seed_events()
        } else {
            Vec::new()
        };

        Self {
            events: Arc::new(RwLock::new(events)),
            latency: Duration::from_millis(config.simulated_latency_ms),
        }
    }

    /// List events matching every supplied filter option, in insertion order
    pub async fn list(&self, filter: Option<&EventFilter>) -> Vec<Event> {
        self.simulate_latency().await;

        let events = self.events.read().await;
        let mut matched: Vec<Event> = events
            .iter()
            .filter(|event| matches_filter(event, filter))
            .cloned()
            .collect();

        if let Some(limit) = filter.and_then(|f| f.limit) {
            matched.truncate(limit);
        }

        debug!(total = events.len(), matched = matched.len(), "Listed events");
        matched
    }

    /// Find an event by id
    pub async fn get_by_id(&self, id: &str) -> Result<Event> {
        self.simulate_latency().await;

        let events = self.events.read().await;
        events
            .iter()
            .find(|event| event.id == id)
            .cloned()
            .ok_or_else(|| AppError::EventNotFound {
                event_id: id.to_string(),
            })
    }

    /// Validate the draft, assign a fresh id and append it to the store
    pub async fn create(&self, request: CreateEventRequest) -> Result<Event> {
        self.simulate_latency().await;

        let category: EventCategory = request.category.parse()?;
        let title = helpers::normalize_whitespace(&request.title);
        if title.is_empty() {
            return Err(AppError::InvalidInput(
                "event title cannot be empty".to_string(),
            ));
        }
        if request.participant_count < 0 {
            return Err(AppError::InvalidInput(
                "participant count cannot be negative".to_string(),
            ));
        }

        let event = Event {
            id: Uuid::new_v4().to_string(),
            title,
            description: request.description,
            date: request.date,
            location: request.location,
            category,
            participant_count: request.participant_count,
            image_url: request.image_url,
        };

        let mut events = self.events.write().await;
        events.push(event.clone());
        info!(event_id = %event.id, category = %event.category, "Event created");
        Ok(event)
    }

    /// Merge the supplied fields into the stored event. Changed fields are
    /// re-validated under the same rules as `create`; the record is swapped
    /// in one step under the write lock.
    pub async fn update(&self, id: &str, changes: UpdateEventRequest) -> Result<Event> {
        self.simulate_latency().await;

        let mut events = self.events.write().await;
        let slot = events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or_else(|| AppError::EventNotFound {
                event_id: id.to_string(),
            })?;

        let mut updated = slot.clone();
        if let Some(title) = changes.title {
            let title = helpers::normalize_whitespace(&title);
            if title.is_empty() {
                return Err(AppError::InvalidInput(
                    "event title cannot be empty".to_string(),
                ));
            }
            updated.title = title;
        }
        if let Some(description) = changes.description {
            updated.description = description;
        }
        if let Some(date) = changes.date {
            updated.date = date;
        }
        if let Some(location) = changes.location {
            updated.location = location;
        }
        if let Some(category) = changes.category {
            updated.category = category.parse()?;
        }
        if let Some(count) = changes.participant_count {
            if count < 0 {
                return Err(AppError::InvalidInput(
                    "participant count cannot be negative".to_string(),
                ));
            }
            updated.participant_count = count;
        }
        if let Some(image_url) = changes.image_url {
            updated.image_url = Some(image_url);
        }

        *slot = updated.clone();
        info!(event_id = id, "Event updated");
        Ok(updated)
    }

    /// Remove an event by id
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.simulate_latency().await;

        let mut events = self.events.write().await;
        let before = events.len();
        events.retain(|event| event.id != id);

        if events.len() == before {
            return Err(AppError::EventNotFound {
                event_id: id.to_string(),
            });
        }

        info!(event_id = id, "Event deleted");
        Ok(())
    }

    /// Number of events in the working set
    pub async fn count(&self) -> usize {
        self.events.read().await.len()
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

fn matches_filter(event: &Event, filter: Option<&EventFilter>) -> bool {
    let Some(filter) = filter else {
        return true;
    };

    if let Some(category) = filter.category {
        if event.category != category {
            return false;
        }
    }

    if let Some(query) = filter.text_query.as_deref() {
        let query = query.to_lowercase();
        let in_title = event.title.to_lowercase().contains(&query);
        let in_location = event.location.to_lowercase().contains(&query);
        if !in_title && !in_location {
            return false;
        }
    }

    if let Some(location) = filter.location.as_deref() {
        if !event
            .location
            .to_lowercase()
            .contains(&location.to_lowercase())
        {
            return false;
        }
    }

    if let Some(range) = filter.date_range {
        if !range.contains(event.date) {
            return false;
        }
    }

    true
}

/// Fixed demo working set served until a real backend exists
fn seed_events() -> Vec<Event> {
    vec![
        Event {
            id: "1".to_string(),
            title: "Futbol Turnuvası".to_string(),
            description: "Yaz futbol turnuvamıza katılın!".to_string(),
            date: Utc.with_ymd_and_hms(2024, 7, 15, 18, 0, 0).unwrap(),
            location: "Stadyum".to_string(),
            category: EventCategory::Spor,
            participant_count: 24,
            image_url: Some("https://example.com/football.jpg".to_string()),
        },
        Event {
            id: "2".to_string(),
            title: "Resim Sergisi".to_string(),
            description: "Genç sanatçılardan resim sergisi".to_string(),
            date: Utc.with_ymd_and_hms(2024, 8, 20, 10, 0, 0).unwrap(),
            location: "Sanat Galerisi".to_string(),
            category: EventCategory::Sanat,
            participant_count: 50,
            image_url: Some("https://example.com/art.jpg".to_string()),
        },
        Event {
            id: "3".to_string(),
            title: "Kodlama Atölyesi".to_string(),
            description: "Yeni başlayanlar için programlama atölyesi".to_string(),
            date: Utc.with_ymd_and_hms(2024, 9, 5, 14, 0, 0).unwrap(),
            location: "Teknoloji Merkezi".to_string(),
            category: EventCategory::Egitim,
            participant_count: 30,
            image_url: None,
        },
        Event {
            id: "4".to_string(),
            title: "Kahve Buluşması".to_string(),
            description: "Haftalık tanışma ve sohbet buluşması".to_string(),
            date: Utc.with_ymd_and_hms(2024, 9, 12, 19, 0, 0).unwrap(),
            location: "Kadıköy Sahil".to_string(),
            category: EventCategory::Sosyal,
            participant_count: 12,
            image_url: None,
        },
    ]
}
