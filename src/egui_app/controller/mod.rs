//! Bridges the sprite drop core and the library model to the egui renderer.

mod assets;
mod drop;


use tracing::{info, warn};

use crate::config::{self, AppSettings};
use crate::egui_app::hover_router::HoverRouter;
use crate::egui_app::state::{DropZone, StatusTone, UiState};
use crate::sprite_drop::{DragSession, DropOverlay, ElementClasses, MemoryAssetIndex};
use crate::sprite_library::SpriteLibrary;

/// Drag routing state for the library window's drop zones.
struct DropRouting {
    overlay: DropOverlay<egui::Id>,
    session: DragSession,
    classes: ElementClasses<egui::Id>,
    router: HoverRouter<egui::Id>,
    zones: Vec<DropZone>,
    /// Gesture started by the OS (file drag) rather than an asset row.
    os_drag: bool,
    last_pointer: Option<egui::Pos2>,
}

impl DropRouting {
    fn new(settings: &AppSettings) -> Self {
        Self {
            overlay: DropOverlay::new(
                settings.drop.data_key.clone(),
                settings.drop.highlight_class.clone(),
                settings.drop.extensions(),
            ),
            session: DragSession::new(),
            classes: ElementClasses::new(),
            router: HoverRouter::default(),
            zones: Vec::new(),
            os_drag: false,
            last_pointer: None,
        }
    }
}

/// Maintains app state and bridges core logic to the egui UI.
pub struct EguiController {
    pub ui: UiState,
    pub library: SpriteLibrary,
    settings: AppSettings,
    index: MemoryAssetIndex,
    drop: DropRouting,
}

impl EguiController {
    pub fn new(settings: AppSettings, index: MemoryAssetIndex) -> Self {
        let drop = DropRouting::new(&settings);
        Self {
            ui: UiState::default(),
            library: SpriteLibrary::new(),
            settings,
            index,
            drop,
        }
    }

    /// Load persisted settings and the sprite manifest they point at.
    ///
    /// A missing or broken manifest leaves the asset browser empty and is
    /// reported in the status bar.
    pub fn load_configuration(&mut self) -> Result<(), config::ConfigError> {
        let settings = config::load_or_default()?;
        self.apply_settings(settings);
        Ok(())
    }

    pub fn apply_settings(&mut self, settings: AppSettings) {
        self.index = MemoryAssetIndex::new();
        if let Some(path) = settings.sprite_manifest.as_deref() {
            match MemoryAssetIndex::load_manifest(path) {
                Ok(index) => {
                    info!(
                        "Loaded {} sprite sheet(s) from {}",
                        index.sheets().len(),
                        path.display()
                    );
                    self.index = index;
                }
                Err(err) => {
                    warn!("Sprite manifest unavailable: {err}");
                    self.set_status(err.to_string(), StatusTone::Warning);
                }
            }
        }
        self.drop = DropRouting::new(&settings);
        self.settings = settings;
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn asset_index(&self) -> &MemoryAssetIndex {
        &self.index
    }

    pub fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.text = text.into();
        self.ui.status.tone = tone;
    }
}
