//! Line Plot Demo - Main Entry Point
//!
//! Streams a synthetic tone into a time plot and its spectrum into a second
//! plot, both through the layer-tracking adapter.

use lineplot_rs::{config::PlotConfig, DemoApp};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,lineplot_rs=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Line Plot Demo");

    let config_path = match PlotConfig::default_path() {
        Ok(path) => Some(path),
        Err(e) => {
            tracing::warn!("Config will not be persisted: {}", e);
            None
        }
    };
    let config = config_path
        .as_ref()
        .map(PlotConfig::load_or_default)
        .unwrap_or_default();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Line Plot Demo"),
        ..Default::default()
    };

    eframe::run_native(
        "Line Plot Demo",
        native_options,
        Box::new(|cc| Ok(Box::new(DemoApp::new(cc, config, config_path)))),
    )
}
