//! egui host for the sprite library window.

pub mod controller;
pub mod hover_router;
pub mod state;
pub mod ui;

use std::path::Path;

/// File name shown for an asset path.
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
