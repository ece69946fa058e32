use std::path::{Path, PathBuf};

/// Accept/reject indicator shown by the host while a drag hovers a receiver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragVisualMode {
    /// Payload is recognized; the drop will copy sprites into the library.
    Copy,
    /// Nothing in the payload can be used.
    #[default]
    Rejected,
}

impl DragVisualMode {
    pub fn accepts(self) -> bool {
        matches!(self, DragVisualMode::Copy)
    }
}

/// Reference to a single sprite asset.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SpriteRef {
    pub name: String,
    /// File the sprite was sliced from, when known.
    pub source: Option<PathBuf>,
}

impl SpriteRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Reference to a texture asset that may be sliced into sprites.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureRef {
    pub path: PathBuf,
}

/// Node of an imported layered image (PSD/PSB) hierarchy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayeredImageNode {
    pub name: String,
    /// Parent node name; `None` for the root of the imported hierarchy.
    pub parent: Option<String>,
    /// Backing asset file; empty or missing for scene-only objects.
    pub path: Option<PathBuf>,
}

impl LayeredImageNode {
    pub fn root(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            path: Some(path.into()),
        }
    }

    pub fn child(name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: Some(parent.into()),
            path: None,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// One object carried by a drag gesture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DraggedObject {
    Sprite(SpriteRef),
    Texture(TextureRef),
    LayeredImage(LayeredImageNode),
    /// Anything the sprite library cannot use.
    Other { description: String },
}

/// Everything the host reports as being dragged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DragPayload {
    pub objects: Vec<DraggedObject>,
    /// OS-level file paths carried by the drag.
    pub paths: Vec<PathBuf>,
}

impl DragPayload {
    pub fn from_objects(objects: Vec<DraggedObject>) -> Self {
        Self {
            objects,
            paths: Vec::new(),
        }
    }

    pub fn from_paths(paths: Vec<PathBuf>) -> Self {
        Self {
            objects: Vec::new(),
            paths,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty() && self.paths.is_empty()
    }
}

/// Where a group of dropped sprites came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayloadSourceKind {
    LooseSprite,
    TextureSheet,
    LayeredImage,
}

/// Named batch of sprites produced from a drop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragPayloadGroup {
    pub source_kind: PayloadSourceKind,
    pub group_name: String,
    pub sprites: Vec<SpriteRef>,
}

pub(crate) fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
