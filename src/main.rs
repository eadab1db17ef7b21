//! UI Challenges - Main Entry Point

use ui_challenges::app::application::run_app;
use ui_challenges::domain::config::AppConfig;
use ui_challenges::utils::config_store::{config_path, load_config, save_config};

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting UI Challenges...");

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            let path = config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            tracing::warn!(%path, "Falling back to default configuration: {err}");
            AppConfig::default()
        }
    };

    // Seed an editable config file on first run
    if let Ok(path) = config_path()
        && !path.exists()
    {
        match save_config(&config) {
            Ok(()) => tracing::info!(path = %path.display(), "Wrote default configuration"),
            Err(err) => tracing::warn!("Could not write default configuration: {err}"),
        }
    }

    tracing::info!(
        step = config.counter.step(),
        max = config.counter.max(),
        locale = config.locale.display_name(),
        "Configuration loaded"
    );

    // Run the GPUI application
    run_app(config);
}
