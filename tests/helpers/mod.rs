//! Shared helpers for integration tests

use eventmate::config::{
    ApiConfig, CatalogConfig, I18nConfig, LoggingConfig, Settings, StorageConfig,
};
use tempfile::TempDir;

/// Settings pointing at a mock backend and a temp data directory
pub fn test_settings(base_url: &str, data_dir: &TempDir) -> Settings {
    Settings {
        api: ApiConfig {
            base_url: base_url.to_string(),
            timeout_seconds: 5,
        },
        storage: StorageConfig {
            data_dir: data_dir.path().to_string_lossy().into_owned(),
        },
        catalog: CatalogConfig {
            simulated_latency_ms: 0,
            seed_demo_events: true,
        },
        i18n: I18nConfig {
            default_language: "tr".to_string(),
            supported_languages: vec!["tr".to_string(), "en".to_string()],
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
            file_path: data_dir.path().to_string_lossy().into_owned(),
        },
    }
}

/// Backend-shaped user payload used across the auth tests
pub fn sample_user_json() -> serde_json::Value {
    serde_json::json!({
        "id": 1,
        "email": "ayse@example.com",
        "username": "ayse",
        "firstName": "Ayşe",
        "lastName": "Yılmaz",
        "isActive": true,
        "profilePhoto": null,
        "photos": [],
        "city": "İstanbul",
        "bio": null,
        "country": "TR",
        "createdAt": "2024-01-10T09:00:00Z",
        "updatedAt": "2024-01-10T09:00:00Z"
    })
}

/// Success envelope for a login response
pub fn login_success_body(token: &str) -> serde_json::Value {
    serde_json::json!({
        "status": "success",
        "message": "Login successful",
        "data": { "token": token, "user": sample_user_json() }
    })
}
