//! Services module
//!
//! This module contains the application's business logic services

pub mod backend;
pub mod catalog;
pub mod cities;
pub mod session;

// Re-export commonly used services
pub use backend::{ApiEnvelope, BackendClient, LoginData};
pub use catalog::EventCatalog;
pub use cities::CityDirectory;
pub use session::SessionManager;

use crate::config::Settings;
use crate::state::storage::SessionStore;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub session_manager: SessionManager,
    pub catalog: EventCatalog,
    pub cities: CityDirectory,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub async fn new(settings: &Settings) -> Result<Self> {
        let store = SessionStore::new(&settings.storage).await?;
        let backend = BackendClient::new(&settings.api)?;
        let session_manager = SessionManager::new(backend, store);
        let catalog = EventCatalog::new(&settings.catalog);
        let cities = CityDirectory::new();

        Ok(Self {
            session_manager,
            catalog,
            cities,
        })
    }

    /// Snapshot of service state used by the startup status report
    pub async fn status(&self) -> ServiceStatus {
        ServiceStatus {
            authenticated: self.session_manager.is_authenticated().await,
            session_persisted: self.session_manager.has_persisted_session().await,
            catalog_events: self.catalog.count().await,
        }
    }
}

/// Service state snapshot
#[derive(Debug, Clone)]
pub struct ServiceStatus {
    pub authenticated: bool,
    pub session_persisted: bool,
    pub catalog_events: usize,
}
