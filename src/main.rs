//! Contact Table - Main Entry Point

use contact_table::app::application::run_app;
use contact_table::domain::config::AppConfig;
use contact_table::logging;
use contact_table::utils::config_store;

fn main() {
    let (config, load_error) = match config_store::load_or_init() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    // Held until exit so the file writer flushes
    let _log_guard = logging::init(&config.log);

    if let Some(err) = load_error {
        tracing::error!(%err, "Failed to load or create config, using defaults");
    }

    tracing::info!("Starting contact table...");

    run_app(config);
}
