//! eventmate client core
//!
//! Client-side core of a social events discovery application: session
//! management against a remote HTTP API, an event catalog with filtered
//! views, and city search. View code stays in the mobile shell; this crate
//! owns the state, validation and network plumbing underneath it.

pub mod config;
pub mod i18n;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{ApiError, AppError, Result};

// Re-export main components for easy access
pub use i18n::I18n;
pub use services::{BackendClient, CityDirectory, EventCatalog, ServiceFactory, SessionManager};
pub use state::{Session, SessionStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{NAME} v{VERSION}")
}
