use tracing::{debug, info, warn};

use super::EguiController;
use super::assets::payload_from_os_files;
use crate::egui_app::display_name;
use crate::egui_app::state::{
    DragFrameInput, DragFrameOutput, DropZone, StatusBarState, StatusTone,
};
use crate::sprite_drop::{
    ClassList, DragEvent, DragPayload, DragPayloadGroup, DropHandler, EventOutcome, OverlayHost,
};
use crate::sprite_library::{LibraryDropTarget, SpriteLibrary};

/// Applies a completed drop to the library on behalf of one drop zone.
struct LibraryDropHandler<'a> {
    library: &'a mut SpriteLibrary,
    status: &'a mut StatusBarState,
    target: Option<LibraryDropTarget>,
    locked: bool,
}

impl DropHandler for LibraryDropHandler<'_> {
    fn can_start_drag(&self) -> bool {
        !self.locked
    }

    fn on_drag_perform(&mut self, groups: Vec<DragPayloadGroup>, alt: bool) {
        let Some(target) = self.target else {
            warn!("Drop delivered to an unregistered zone");
            return;
        };
        let summary = self.library.apply_drop(target, &groups, alt);
        info!("Applied drop to {:?}: {:?}", target, summary);
        self.status.text = format!(
            "Added {} categor{}, {} label(s), replaced {}",
            summary.categories_added,
            if summary.categories_added == 1 { "y" } else { "ies" },
            summary.labels_added,
            summary.labels_replaced
        );
        self.status.tone = StatusTone::Info;
    }
}

impl EguiController {
    /// Register a drop zone for this frame. Parents must register before children.
    pub fn register_drop_zone(&mut self, id: egui::Id, rect: egui::Rect, target: LibraryDropTarget) {
        self.drop.zones.push(DropZone { id, rect, target });
    }

    /// True while `id` is the highlighted (active, accepting) receiver.
    pub fn is_drop_highlighted(&self, id: egui::Id) -> bool {
        self.drop
            .classes
            .has_class(id, &self.settings.drop.highlight_class)
    }

    pub fn drag_in_progress(&self) -> bool {
        self.drop.session.is_active()
    }

    /// Sync the gesture with OS input before the panels render.
    pub fn begin_drag_frame(&mut self, input: &DragFrameInput) {
        let extensions = self.settings.drop.extensions();
        if input.cancel && self.drop.session.is_active() && !self.drop.os_drag {
            debug!("Drag cancelled");
            self.cancel_gesture();
        }
        if !input.os_dropped.is_empty() {
            let payload = payload_from_os_files(&input.os_dropped, &extensions, &self.index);
            self.sync_os_payload(payload);
        } else if !input.os_hovered.is_empty() {
            let payload = payload_from_os_files(&input.os_hovered, &extensions, &self.index);
            self.sync_os_payload(payload);
        } else if self.drop.os_drag && self.drop.session.is_active() {
            debug!("OS drag left the window");
            self.cancel_gesture();
        }
        if self.drop.session.is_active() {
            self.ui.drag_position = input.pointer.or(self.ui.drag_position);
        }
        self.drop.zones.clear();
    }

    /// Route hover changes and drops to the overlay after the panels registered their zones.
    pub fn end_drag_frame(&mut self, input: &DragFrameInput) -> DragFrameOutput {
        let mut output = DragFrameOutput::default();
        if !self.drop.session.is_active() {
            return output;
        }
        if input.pointer.is_some() {
            self.drop.last_pointer = input.pointer;
        }
        let hovered: Vec<egui::Id> = match self.drop.last_pointer {
            Some(pointer) => self
                .drop
                .zones
                .iter()
                .filter(|zone| zone.rect.contains(pointer))
                .map(|zone| zone.id)
                .collect(),
            None => Vec::new(),
        };
        for event in self.drop.router.transition(&hovered) {
            self.dispatch(event);
        }
        if !hovered.is_empty() {
            output.accepts = Some(self.drop.session.visual_mode.accepts());
        }
        let released = if self.drop.os_drag {
            !input.os_dropped.is_empty()
        } else {
            input.released
        };
        if released {
            if self.drop.session.visual_mode.accepts() {
                for event in self.drop.router.drop_events(input.alt) {
                    if self.dispatch(event).is_consumed() {
                        break;
                    }
                }
            }
            self.end_gesture();
            output.finished = true;
        }
        output
    }

    pub(super) fn begin_gesture(&mut self, payload: DragPayload, os_drag: bool) {
        self.reset_drop_routing();
        self.drop.session.begin(payload);
        self.drop.os_drag = os_drag;
    }

    fn sync_os_payload(&mut self, payload: DragPayload) {
        if self.drop.session.is_active() && self.drop.os_drag {
            self.drop.session.update_payload(payload);
            return;
        }
        let label = match payload.paths.as_slice() {
            [single] => display_name(single),
            paths => format!("{} files", paths.len()),
        };
        self.begin_gesture(payload, true);
        self.ui.drag_label = Some(label);
    }

    fn cancel_gesture(&mut self) {
        for event in self.drop.router.cancel() {
            self.dispatch(event);
        }
        self.end_gesture();
    }

    fn end_gesture(&mut self) {
        self.reset_drop_routing();
        self.drop.session.end();
        self.drop.os_drag = false;
        self.drop.last_pointer = None;
        self.ui.drag_label = None;
        self.ui.drag_position = None;
    }

    fn reset_drop_routing(&mut self) {
        self.drop.router.reset();
        self.drop.overlay.reset(&mut self.drop.classes);
    }

    fn dispatch(&mut self, event: DragEvent<egui::Id>) -> EventOutcome {
        let target_id = event.target();
        let target = self
            .drop
            .zones
            .iter()
            .find(|zone| zone.id == target_id)
            .map(|zone| zone.target);
        let mut handler = LibraryDropHandler {
            library: &mut self.library,
            status: &mut self.ui.status,
            target,
            locked: self.ui.library_locked,
        };
        let mut host = OverlayHost {
            session: &mut self.drop.session,
            classes: &mut self.drop.classes,
            index: &self.index,
        };
        let outcome = self.drop.overlay.handle(event, &mut host, &mut handler);
        debug!("Drag event {:?} -> {:?}", event, outcome);
        outcome
    }
}
