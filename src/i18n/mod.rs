//! Internationalization module
//!
//! This module handles multi-language support for user-facing notification
//! text. Turkish is the default language; English is shipped alongside it.

pub mod loader;
pub mod messages;

// Re-export commonly used i18n components
pub use loader::{I18n, TranslationParams};
pub use messages::error_message;
