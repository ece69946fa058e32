//! Drop receiving for the sprite library: receiver tracking, payload
//! classification and host event routing.

pub mod asset_index;
pub mod classes;
pub mod classify;
pub mod overlay;
pub mod payload;
pub mod session;
pub mod tracker;

pub use asset_index::{AssetIndex, ManifestError, MemoryAssetIndex, SpriteSheet};
pub use classes::{ClassList, ElementClasses};
pub use classify::{LayeredImageExtensions, classify_payload, decide_visual_mode};
pub use overlay::{DragEvent, DropHandler, DropOverlay, EventOutcome, OverlayHost};
pub use payload::{
    DragPayload, DragPayloadGroup, DragVisualMode, DraggedObject, LayeredImageNode,
    PayloadSourceKind, SpriteRef, TextureRef,
};
pub use session::DragSession;
pub use tracker::DragReceiverTracker;
