//! Entry point for the sprite library window.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use spritedrop::config::{self, AppSettings};
use spritedrop::egui_app::controller::EguiController;
use spritedrop::egui_app::state::StatusTone;
use spritedrop::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use spritedrop::logging;
use spritedrop::sprite_drop::MemoryAssetIndex;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, config_error) = match config::load_or_default() {
        Ok(settings) => (settings, None),
        Err(err) => (AppSettings::default(), Some(err)),
    };
    if let Err(err) = logging::init(&settings.logging) {
        eprintln!("Logging disabled: {err}");
    }

    let mut controller = EguiController::new(AppSettings::default(), MemoryAssetIndex::new());
    controller.apply_settings(settings);
    if let Some(err) = config_error {
        tracing::warn!("Using default settings: {err}");
        controller.set_status(format!("Failed to load config: {err}"), StatusTone::Error);
    }

    let viewport = egui::ViewportBuilder::default()
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_drag_and_drop(true);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Sprite Library",
        native_options,
        Box::new(move |_cc| Ok(Box::new(EguiApp::new(controller)))),
    )?;
    Ok(())
}
