//! Travel planner frontend: login gate, guide content and the expense tracker UI.

pub mod app;
pub mod platform;
pub mod screens;
pub mod theme;
pub mod widgets;

use travel_core::AppConfig;

/// Load config, install the log subscriber and start the Dioxus app.
pub fn launch() {
    let (config, config_error) = match AppConfig::from_env() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    // Fails only when a subscriber is already installed.
    let _ = dioxus::logger::init(config.log_level);
    if let Some(err) = config_error {
        tracing::warn!(error = %format!("{err:#}"), "invalid configuration, using defaults");
    }
    tracing::info!(level = %config.log_level, "starting travel planner");

    dioxus::LaunchBuilder::new().with_context(config).launch(app::App);
}
