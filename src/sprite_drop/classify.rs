//! Payload classification: accept/reject decision and grouping of dropped sprites.

use std::path::Path;

use super::asset_index::AssetIndex;
use super::payload::{
    DragPayload, DragPayloadGroup, DragVisualMode, DraggedObject, LayeredImageNode,
    PayloadSourceKind, SpriteRef, file_stem,
};

/// File extensions treated as layered images (without the leading dot).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayeredImageExtensions {
    extensions: Vec<String>,
}

impl Default for LayeredImageExtensions {
    fn default() -> Self {
        Self::new(["psd", "psb"])
    }
}

impl LayeredImageExtensions {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|ext| ext.as_ref().trim_start_matches('.').to_ascii_lowercase())
                .filter(|ext| !ext.is_empty())
                .collect(),
        }
    }

    /// True when `path` ends in a supported extension.
    ///
    /// Matching ignores ASCII case, so `Knight.PSD` counts as layered. Unity's
    /// sprite library drop handler compares extensions case-sensitively and
    /// would skip such a file.
    pub fn matches(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
            return false;
        };
        let ext = ext.to_ascii_lowercase();
        self.extensions.iter().any(|known| *known == ext)
    }
}

/// Decide whether the current payload can be dropped on a sprite library receiver.
pub fn decide_visual_mode(
    payload: &DragPayload,
    extensions: &LayeredImageExtensions,
) -> DragVisualMode {
    let has_sprite_source = payload
        .objects
        .iter()
        .any(|object| matches!(object, DraggedObject::Sprite(_) | DraggedObject::Texture(_)));
    if has_sprite_source || payload.paths.iter().any(|path| extensions.matches(path)) {
        DragVisualMode::Copy
    } else {
        DragVisualMode::Rejected
    }
}

/// Partition dragged objects into named sprite groups.
///
/// Texture sheets and layered-image roots each produce one group in encounter
/// order; bare sprites are collected into a final group named after the first.
pub fn classify_payload(
    objects: &[DraggedObject],
    index: &impl AssetIndex,
    extensions: &LayeredImageExtensions,
) -> Vec<DragPayloadGroup> {
    let mut groups = Vec::new();
    let mut loose: Vec<SpriteRef> = Vec::new();
    for object in objects {
        match object {
            DraggedObject::Sprite(sprite) => loose.push(sprite.clone()),
            DraggedObject::Texture(texture) => groups.push(DragPayloadGroup {
                source_kind: PayloadSourceKind::TextureSheet,
                group_name: file_stem(&texture.path),
                sprites: index.sprites_at(&texture.path),
            }),
            DraggedObject::LayeredImage(node) => {
                if let Some(group) = layered_image_group(node, index, extensions) {
                    groups.push(group);
                }
            }
            DraggedObject::Other { .. } => {}
        }
    }
    if let Some(first) = loose.first() {
        groups.push(DragPayloadGroup {
            source_kind: PayloadSourceKind::LooseSprite,
            group_name: first.name.clone(),
            sprites: loose,
        });
    }
    groups
}

fn layered_image_group(
    node: &LayeredImageNode,
    index: &impl AssetIndex,
    extensions: &LayeredImageExtensions,
) -> Option<DragPayloadGroup> {
    // Children belong to a root that is handled on its own.
    if !node.is_root() {
        return None;
    }
    let path = node
        .path
        .as_deref()
        .filter(|path| !path.as_os_str().is_empty())?;
    if !extensions.matches(path) {
        return None;
    }
    Some(DragPayloadGroup {
        source_kind: PayloadSourceKind::LayeredImage,
        group_name: file_stem(path),
        sprites: index.sprites_at(path),
    })
}
