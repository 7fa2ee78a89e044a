//! Event model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::errors::AppError;

/// Closed set of category labels used to classify events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    Spor,
    #[serde(rename = "Kültür")]
    Kultur,
    Sanat,
    #[serde(rename = "Eğitim")]
    Egitim,
    Sosyal,
    #[serde(rename = "Diğer")]
    Diger,
}

impl EventCategory {
    pub const ALL: [EventCategory; 6] = [
        EventCategory::Spor,
        EventCategory::Kultur,
        EventCategory::Sanat,
        EventCategory::Egitim,
        EventCategory::Sosyal,
        EventCategory::Diger,
    ];

    /// Display label, as shown in category chips
    pub fn label(&self) -> &'static str {
        match self {
            EventCategory::Spor => "Spor",
            EventCategory::Kultur => "Kültür",
            EventCategory::Sanat => "Sanat",
            EventCategory::Egitim => "Eğitim",
            EventCategory::Sosyal => "Sosyal",
            EventCategory::Diger => "Diğer",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EventCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventCategory::ALL
            .into_iter()
            .find(|category| category.label() == s)
            .ok_or_else(|| AppError::InvalidInput(format!("unknown event category: {s}")))
    }
}

/// A user-visible activity record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub category: EventCategory,
    pub participant_count: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Draft for a new event. The category arrives as free text and is parsed
/// against the closed set when the draft is validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub category: String,
    pub participant_count: i32,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Field-level changes to an existing event
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub participant_count: Option<i32>,
    pub image_url: Option<String>,
}

/// Inclusive date window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// Catalog filter. Supplied options combine with logical AND; absent
/// options impose no constraint.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub category: Option<EventCategory>,
    pub text_query: Option<String>,
    pub location: Option<String>,
    pub date_range: Option<DateRange>,
    pub limit: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_category_parses_every_label() {
        for category in EventCategory::ALL {
            let parsed: EventCategory = category.label().parse().expect("label parses");
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let err = "Konser".parse::<EventCategory>().unwrap_err();
        assert!(err.to_string().contains("unknown event category"));
    }

    #[test]
    fn test_category_serde_uses_turkish_labels() {
        let json = serde_json::to_string(&EventCategory::Kultur).expect("serializes");
        assert_eq!(json, "\"Kültür\"");
        let back: EventCategory = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, EventCategory::Kultur);
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let start = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 7, 31, 23, 59, 59).unwrap();
        let range = DateRange { start, end };
        assert!(range.contains(start));
        assert!(range.contains(end));
        assert!(!range.contains(end + chrono::Duration::seconds(1)));
    }
}
