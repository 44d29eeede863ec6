use eframe::egui;

mod app;
mod catalog;
mod clipboard;
mod config;
mod location;
mod search;
mod selection;
mod ui;

use app::PantryApp;
use config::AppConfig;
use location::Location;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = AppConfig::default_path();
    let loaded = AppConfig::load_from(&config_path);
    let config = loaded.as_ref().cloned().unwrap_or_default();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_filter))
        .init();

    if let Err(e) = &loaded {
        log::warn!("Using default settings: {}", e);
    }

    let start = match std::env::args().nth(1) {
        Some(address) => Location::parse(&address)?,
        None => config.start_location().unwrap_or_else(|e| {
            log::warn!("{}; starting at /", e);
            Location::default()
        }),
    };
    log::info!("Starting at {}", start);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Pantry")
            .with_resizable(true)
            .with_inner_size([config.window_width, config.window_height]),
        ..Default::default()
    };

    eframe::run_native(
        "Pantry",
        options,
        Box::new(|cc| Ok(Box::new(PantryApp::new(cc, start)))),
    )?;

    Ok(())
}
