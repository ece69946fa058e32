use std::path::PathBuf;

use egui::Pos2;
use tracing::debug;

use super::EguiController;
use crate::egui_app::display_name;
use crate::egui_app::state::AssetKey;
use crate::sprite_drop::{
    AssetIndex, DragPayload, DraggedObject, LayeredImageExtensions, LayeredImageNode, SpriteRef,
    TextureRef,
};

const TEXTURE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "tga", "bmp", "gif"];

impl EguiController {
    /// Begin dragging an asset row; a selected row drags the whole selection.
    pub fn start_asset_drag(&mut self, key: AssetKey, pos: Pos2) {
        let keys = if self.ui.browser.is_selected(&key) {
            self.ui.browser.selected.clone()
        } else {
            vec![key]
        };
        let extensions = self.settings.drop.extensions();
        let objects: Vec<DraggedObject> = keys
            .iter()
            .map(|key| asset_object(key, &extensions))
            .collect();
        let paths: Vec<PathBuf> = keys
            .iter()
            .filter_map(|key| match key {
                AssetKey::Sheet(path) => Some(path.clone()),
                AssetKey::Sprite { .. } => None,
            })
            .collect();
        let label = drag_label(&keys);
        debug!("Asset drag start: {label}");
        self.begin_gesture(DragPayload { objects, paths }, false);
        self.ui.drag_label = Some(label);
        self.ui.drag_position = Some(pos);
    }
}

fn asset_object(key: &AssetKey, extensions: &LayeredImageExtensions) -> DraggedObject {
    match key {
        AssetKey::Sheet(path) if extensions.matches(path) => {
            DraggedObject::LayeredImage(LayeredImageNode::root(display_name(path), path.clone()))
        }
        AssetKey::Sheet(path) => DraggedObject::Texture(TextureRef { path: path.clone() }),
        AssetKey::Sprite { sheet, name } => {
            DraggedObject::Sprite(SpriteRef::new(name.clone()).with_source(sheet.clone()))
        }
    }
}

fn drag_label(keys: &[AssetKey]) -> String {
    match keys {
        [AssetKey::Sheet(path)] => display_name(path),
        [AssetKey::Sprite { name, .. }] => name.clone(),
        _ => format!("{} assets", keys.len()),
    }
}

/// Objects an OS file drop stands for.
///
/// Layered images always count. A texture counts only when the index knows
/// sprites for it; anything else is carried as `Other`.
pub(super) fn payload_from_os_files(
    paths: &[PathBuf],
    extensions: &LayeredImageExtensions,
    index: &impl AssetIndex,
) -> DragPayload {
    let objects = paths
        .iter()
        .map(|path| {
            if extensions.matches(path) {
                return DraggedObject::LayeredImage(LayeredImageNode::root(
                    display_name(path),
                    path.clone(),
                ));
            }
            let is_texture = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| {
                    TEXTURE_EXTENSIONS
                        .iter()
                        .any(|known| known.eq_ignore_ascii_case(ext))
                });
            if is_texture && !index.sprites_at(path).is_empty() {
                DraggedObject::Texture(TextureRef { path: path.clone() })
            } else {
                DraggedObject::Other {
                    description: display_name(path),
                }
            }
        })
        .collect();
    DragPayload {
        objects,
        paths: paths.to_vec(),
    }
}
