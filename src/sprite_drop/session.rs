use tracing::debug;

use super::payload::{DragPayload, DragVisualMode};

/// Host drag state for one pointer gesture.
///
/// Passed by reference into every overlay event instead of living in a global.
#[derive(Clone, Debug, Default)]
pub struct DragSession {
    pub payload: DragPayload,
    /// Indicator the host shows on the cursor.
    pub visual_mode: DragVisualMode,
    /// Set while a list-reorder gesture owns the drag; drop receivers stay passive.
    pub reorder_in_progress: bool,
    active: bool,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Start a gesture carrying `payload`, discarding any previous state.
    pub fn begin(&mut self, payload: DragPayload) {
        debug!(
            "Drag session begin: objects={} paths={}",
            payload.objects.len(),
            payload.paths.len()
        );
        self.payload = payload;
        self.visual_mode = DragVisualMode::Rejected;
        self.reorder_in_progress = false;
        self.active = true;
    }

    /// Start a list-reorder gesture that drop receivers must ignore.
    pub fn begin_reorder(&mut self) {
        self.begin(DragPayload::default());
        self.reorder_in_progress = true;
    }

    /// Replace the payload mid-gesture (the OS may report new data as the pointer moves).
    pub fn update_payload(&mut self, payload: DragPayload) {
        self.payload = payload;
    }

    pub fn end(&mut self) {
        if self.active {
            debug!("Drag session end");
        }
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite_drop::payload::{DraggedObject, SpriteRef};

    #[test]
    fn begin_resets_previous_gesture() {
        let mut session = DragSession::new();
        session.begin_reorder();
        assert!(session.reorder_in_progress);
        session.visual_mode = DragVisualMode::Copy;

        session.begin(DragPayload::from_objects(vec![DraggedObject::Sprite(
            SpriteRef::new("s"),
        )]));
        assert!(session.is_active());
        assert!(!session.reorder_in_progress);
        assert_eq!(session.visual_mode, DragVisualMode::Rejected);
        assert_eq!(session.payload.objects.len(), 1);
    }

    #[test]
    fn end_clears_everything() {
        let mut session = DragSession::new();
        session.begin_reorder();
        session.end();
        assert!(!session.is_active());
        assert!(!session.reorder_in_progress);
        assert!(session.payload.is_empty());
    }
}
