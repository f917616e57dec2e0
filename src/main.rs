mod config;
mod core;
mod gateway;
mod ui;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::gateway::EcoGateway;
use crate::ui::app::App;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ecocampus_ai=info")),
        )
        .init();

    let config = AppConfig::load();
    info!("Starting EcoCampus AI against {}", config.base_url);
    let gateway = EcoGateway::from_config(&config);

    // Launch desktop app with context
    dioxus::LaunchBuilder::new()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title("EcoCampus AI")
                    .with_inner_size(LogicalSize::new(1280.0, 820.0)),
            ),
        )
        .with_context(gateway)
        .with_context(config)
        .launch(App);
}
