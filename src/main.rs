//! eventmate
//!
//! Application bootstrap: loads configuration, wires services, restores any
//! persisted session and reports startup status.

use tracing::info;

use eventmate::{
    config::Settings,
    i18n::I18n,
    services::ServiceFactory,
    utils::{helpers, logging},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", eventmate::info());

    // Load translations
    let mut i18n = I18n::new(&settings.i18n);
    i18n.load_translations().await?;

    // Initialize services
    let services = ServiceFactory::new(&settings).await?;

    // Restore any persisted session
    if services.session_manager.init().await? {
        if let Some(user) = services.session_manager.current_user().await {
            info!(user_id = user.id, username = %user.username, "Session restored");
        }
    } else {
        info!("No persisted session, starting logged out");
    }

    let status = services.status().await;
    info!(
        authenticated = status.authenticated,
        session_persisted = status.session_persisted,
        catalog_events = status.catalog_events,
        "Startup status"
    );

    // Show the catalog working set
    for event in services.catalog.list(None).await {
        info!(
            event_id = %event.id,
            category = %event.category,
            date = %helpers::format_timestamp(event.date),
            title = %helpers::truncate_text(&event.title, 40),
            "Catalog event"
        );
    }

    info!("eventmate is ready");
    Ok(())
}
