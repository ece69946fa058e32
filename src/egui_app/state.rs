//! UI state shared between the controller and the egui renderer.

use std::collections::HashSet;
use std::path::PathBuf;

use egui::{Pos2, Rect};

use crate::sprite_library::LibraryDropTarget;

/// Severity of the footer message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Info,
    Warning,
    Error,
}

/// Status text shown in the footer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusBarState {
    pub text: String,
    pub tone: StatusTone,
}

impl StatusBarState {
    pub fn idle() -> Self {
        Self {
            text: "Drag sprites, textures or PSD files onto the library".into(),
            tone: StatusTone::Idle,
        }
    }
}

/// Entry in the asset browser.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AssetKey {
    Sheet(PathBuf),
    Sprite { sheet: PathBuf, name: String },
}

#[derive(Clone, Debug, Default)]
pub struct AssetBrowserState {
    /// Multi-selection in click order; dragging a selected row drags all of them.
    pub selected: Vec<AssetKey>,
    pub expanded: HashSet<PathBuf>,
}

impl AssetBrowserState {
    pub fn is_selected(&self, key: &AssetKey) -> bool {
        self.selected.contains(key)
    }

    pub fn toggle_selected(&mut self, key: AssetKey) {
        if let Some(pos) = self.selected.iter().position(|k| *k == key) {
            self.selected.remove(pos);
        } else {
            self.selected.push(key);
        }
    }

    pub fn select_only(&mut self, key: AssetKey) {
        self.selected.clear();
        self.selected.push(key);
    }
}

/// Drop zone registered by the renderer during the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DropZone {
    pub id: egui::Id,
    pub rect: Rect,
    pub target: LibraryDropTarget,
}

/// Pointer and OS drag information sampled once per frame.
#[derive(Clone, Debug, Default)]
pub struct DragFrameInput {
    pub pointer: Option<Pos2>,
    /// Pointer button released this frame.
    pub released: bool,
    pub alt: bool,
    /// Escape pressed; abandons an in-app drag.
    pub cancel: bool,
    /// Files the OS is dragging over the window.
    pub os_hovered: Vec<PathBuf>,
    /// Files the OS dropped on the window this frame.
    pub os_dropped: Vec<PathBuf>,
}

/// What the renderer should reflect after drop routing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragFrameOutput {
    /// Some while a drop zone is hovered: true shows the copy cursor.
    pub accepts: Option<bool>,
    /// The gesture ended this frame.
    pub finished: bool,
}

/// Top-level UI model consumed by the renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    pub browser: AssetBrowserState,
    /// While locked, drop zones stay passive.
    pub library_locked: bool,
    /// Label shown next to the pointer while dragging.
    pub drag_label: Option<String>,
    pub drag_position: Option<Pos2>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            browser: AssetBrowserState::default(),
            library_locked: false,
            drag_label: None,
            drag_position: None,
        }
    }
}
