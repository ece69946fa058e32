//! Sprite library drop targets: receiver tracking, payload classification and
//! an egui host window.
/// Application directory resolution.
pub mod app_dirs;
/// Persisted settings.
pub mod config;
/// egui host for the library window.
pub mod egui_app;
/// Tracing setup.
pub mod logging;
/// Drop receiver tracking and payload classification.
pub mod sprite_drop;
/// Library model receiving completed drops.
pub mod sprite_library;
