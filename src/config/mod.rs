//! Configuration management

pub mod settings;
pub mod validation;

pub use settings::{ApiConfig, CatalogConfig, I18nConfig, LoggingConfig, Settings, StorageConfig};
