//! PlotBoard - Interactive Table & Chart Dashboard
//!
//! Application entry point: logging, configuration, native window.

use eframe::egui;
use plotboard::config::AppConfig;
use plotboard::gui::PlotBoardApp;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "plotboard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting PlotBoard v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load_or_default();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 760.0])
            .with_min_inner_size([1000.0, 620.0])
            .with_title("PlotBoard"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "PlotBoard",
        options,
        Box::new(|cc| Ok(Box::new(PlotBoardApp::new(cc, config)))),
    )
}
