//! Event routing for a group of drop receivers sharing one tracker.

use std::fmt::Debug;

use tracing::{debug, info};

use super::asset_index::AssetIndex;
use super::classes::ClassList;
use super::classify::{LayeredImageExtensions, classify_payload, decide_visual_mode};
use super::payload::DragPayloadGroup;
use super::session::DragSession;
use super::tracker::DragReceiverTracker;

/// Drag events delivered by the host for a single target element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragEvent<E> {
    Enter(E),
    Updated(E),
    Exited(E),
    Leave(E),
    Perform {
        target: E,
        /// Alternate association mode requested by the user (Alt held).
        alt: bool,
    },
}

impl<E: Copy> DragEvent<E> {
    pub fn target(&self) -> E {
        match *self {
            DragEvent::Enter(target)
            | DragEvent::Updated(target)
            | DragEvent::Exited(target)
            | DragEvent::Leave(target)
            | DragEvent::Perform { target, .. } => target,
        }
    }
}

/// Whether the host should keep propagating an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    /// Handled here; stop propagation.
    Consumed,
    Ignored,
}

impl EventOutcome {
    pub fn is_consumed(self) -> bool {
        matches!(self, EventOutcome::Consumed)
    }
}

/// Feature-side callbacks for a drop overlay.
pub trait DropHandler {
    /// Checked on every enter; false keeps the receiver passive.
    fn can_start_drag(&self) -> bool {
        true
    }

    /// Called at most once per gesture with the classified, non-empty groups.
    fn on_drag_perform(&mut self, groups: Vec<DragPayloadGroup>, alt: bool);
}

/// Shared host state an overlay reads and writes while handling an event.
pub struct OverlayHost<'a, C, I> {
    pub session: &'a mut DragSession,
    pub classes: &'a mut C,
    pub index: &'a I,
}

/// Drop receiver group keyed by `data_key`.
///
/// Owns the receiver tracker for the gesture in progress; the tracker exists
/// only between the first enter and the last exit or the drop.
#[derive(Clone, Debug)]
pub struct DropOverlay<E> {
    data_key: String,
    highlight_class: String,
    extensions: LayeredImageExtensions,
    tracker: Option<DragReceiverTracker<E>>,
}

impl<E: Copy + Eq + Debug> DropOverlay<E> {
    pub fn new(
        data_key: impl Into<String>,
        highlight_class: impl Into<String>,
        extensions: LayeredImageExtensions,
    ) -> Self {
        Self {
            data_key: data_key.into(),
            highlight_class: highlight_class.into(),
            extensions,
            tracker: None,
        }
    }

    pub fn tracker(&self) -> Option<&DragReceiverTracker<E>> {
        self.tracker.as_ref()
    }

    pub fn active_receiver(&self) -> Option<E> {
        self.tracker.as_ref().and_then(|tracker| tracker.active())
    }

    pub fn is_tracking(&self, element: E) -> bool {
        self.tracker
            .as_ref()
            .is_some_and(|tracker| tracker.contains(element))
    }

    /// Route one host event; returns whether propagation should stop.
    pub fn handle<C, I, H>(
        &mut self,
        event: DragEvent<E>,
        host: &mut OverlayHost<'_, C, I>,
        handler: &mut H,
    ) -> EventOutcome
    where
        C: ClassList<E>,
        I: AssetIndex,
        H: DropHandler + ?Sized,
    {
        match event {
            DragEvent::Enter(element) => self.on_enter(element, host, handler),
            DragEvent::Updated(element) => self.on_update(element, host),
            DragEvent::Exited(element) | DragEvent::Leave(element) => {
                self.on_exit(element, host)
            }
            DragEvent::Perform { target, alt } => self.on_perform(target, alt, host, handler),
        }
    }

    /// Drop the tracker without performing, e.g. when the gesture is cancelled.
    pub fn reset(&mut self, classes: &mut impl ClassList<E>) {
        if let Some(mut tracker) = self.tracker.take() {
            debug!("Drop overlay '{}' reset", self.data_key);
            tracker.clear(classes);
        }
    }

    fn on_enter<C, I, H>(
        &mut self,
        element: E,
        host: &mut OverlayHost<'_, C, I>,
        handler: &H,
    ) -> EventOutcome
    where
        C: ClassList<E>,
        H: DropHandler + ?Sized,
    {
        if host.session.reorder_in_progress {
            return EventOutcome::Ignored;
        }
        if !handler.can_start_drag() {
            return EventOutcome::Ignored;
        }
        if self.is_tracking(element) {
            return EventOutcome::Consumed;
        }
        let visual_mode = decide_visual_mode(&host.session.payload, &self.extensions);
        host.session.visual_mode = visual_mode;
        let highlight_class = &self.highlight_class;
        self.tracker
            .get_or_insert_with(|| DragReceiverTracker::new(highlight_class.clone()))
            .add_receiver(element, visual_mode, &mut *host.classes);
        EventOutcome::Consumed
    }

    fn on_update<C, I>(&mut self, element: E, host: &mut OverlayHost<'_, C, I>) -> EventOutcome {
        if !self.is_tracking(element) {
            return EventOutcome::Ignored;
        }
        host.session.visual_mode = decide_visual_mode(&host.session.payload, &self.extensions);
        EventOutcome::Consumed
    }

    fn on_exit<C, I>(&mut self, element: E, host: &mut OverlayHost<'_, C, I>) -> EventOutcome
    where
        C: ClassList<E>,
    {
        let Some(tracker) = self.tracker.as_mut() else {
            return EventOutcome::Ignored;
        };
        if !tracker.contains(element) {
            return EventOutcome::Ignored;
        }
        if tracker.remove_receiver(element, &mut *host.classes) {
            debug!("Drop overlay '{}' has no receivers left", self.data_key);
            self.tracker = None;
        }
        EventOutcome::Consumed
    }

    fn on_perform<C, I, H>(
        &mut self,
        target: E,
        alt: bool,
        host: &mut OverlayHost<'_, C, I>,
        handler: &mut H,
    ) -> EventOutcome
    where
        C: ClassList<E>,
        I: AssetIndex,
        H: DropHandler + ?Sized,
    {
        if self.active_receiver() != Some(target) {
            return EventOutcome::Ignored;
        }
        self.reset(&mut *host.classes);
        let groups = classify_payload(&host.session.payload.objects, host.index, &self.extensions);
        if groups.is_empty() {
            debug!(
                "Drop on {:?} carried nothing usable for '{}'",
                target, self.data_key
            );
            return EventOutcome::Ignored;
        }
        info!(
            "Drop on {:?} for '{}': {} group(s), alt={}",
            target,
            self.data_key,
            groups.len(),
            alt
        );
        handler.on_drag_perform(groups, alt);
        EventOutcome::Consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite_drop::asset_index::MemoryAssetIndex;
    use crate::sprite_drop::classes::ElementClasses;
    use crate::sprite_drop::payload::{
        DragPayload, DragVisualMode, DraggedObject, PayloadSourceKind, SpriteRef,
    };

    const HOT: &str = "drag-over-add";

    #[derive(Default)]
    struct Recorder {
        blocked: bool,
        drops: Vec<(Vec<DragPayloadGroup>, bool)>,
    }

    impl DropHandler for Recorder {
        fn can_start_drag(&self) -> bool {
            !self.blocked
        }

        fn on_drag_perform(&mut self, groups: Vec<DragPayloadGroup>, alt: bool) {
            self.drops.push((groups, alt));
        }
    }

    struct Fixture {
        overlay: DropOverlay<u32>,
        session: DragSession,
        classes: ElementClasses<u32>,
        index: MemoryAssetIndex,
        recorder: Recorder,
    }

    impl Fixture {
        fn with_sprites() -> Self {
            let mut session = DragSession::new();
            session.begin(DragPayload::from_objects(vec![DraggedObject::Sprite(
                SpriteRef::new("s1"),
            )]));
            Self {
                overlay: DropOverlay::new("library", HOT, LayeredImageExtensions::default()),
                session,
                classes: ElementClasses::new(),
                index: MemoryAssetIndex::new(),
                recorder: Recorder::default(),
            }
        }

        fn send(&mut self, event: DragEvent<u32>) -> EventOutcome {
            let mut host = OverlayHost {
                session: &mut self.session,
                classes: &mut self.classes,
                index: &self.index,
            };
            self.overlay.handle(event, &mut host, &mut self.recorder)
        }
    }

    #[test]
    fn enter_creates_tracker_and_highlights() {
        let mut fx = Fixture::with_sprites();
        assert_eq!(fx.send(DragEvent::Enter(1)), EventOutcome::Consumed);
        assert_eq!(fx.overlay.active_receiver(), Some(1));
        assert_eq!(fx.session.visual_mode, DragVisualMode::Copy);
        assert!(fx.classes.has_class(1, HOT));
    }

    #[test]
    fn reorder_marker_blocks_enter() {
        let mut fx = Fixture::with_sprites();
        fx.session.reorder_in_progress = true;
        assert_eq!(fx.send(DragEvent::Enter(1)), EventOutcome::Ignored);
        assert!(fx.overlay.tracker().is_none());
    }

    #[test]
    fn handler_can_block_enter() {
        let mut fx = Fixture::with_sprites();
        fx.recorder.blocked = true;
        assert_eq!(fx.send(DragEvent::Enter(1)), EventOutcome::Ignored);
        assert!(fx.overlay.tracker().is_none());
    }

    #[test]
    fn update_refreshes_visual_mode_only_for_tracked() {
        let mut fx = Fixture::with_sprites();
        assert_eq!(fx.send(DragEvent::Updated(1)), EventOutcome::Ignored);
        fx.send(DragEvent::Enter(1));
        fx.session.update_payload(DragPayload::default());
        assert_eq!(fx.send(DragEvent::Updated(1)), EventOutcome::Consumed);
        assert_eq!(fx.session.visual_mode, DragVisualMode::Rejected);
        assert_eq!(fx.overlay.tracker().map(|t| t.len()), Some(1));
    }

    #[test]
    fn last_exit_drops_tracker() {
        let mut fx = Fixture::with_sprites();
        fx.send(DragEvent::Enter(1));
        fx.send(DragEvent::Enter(2));
        assert_eq!(fx.send(DragEvent::Leave(2)), EventOutcome::Consumed);
        assert_eq!(fx.overlay.active_receiver(), Some(1));
        assert_eq!(fx.send(DragEvent::Exited(1)), EventOutcome::Consumed);
        assert!(fx.overlay.tracker().is_none());
        assert!(fx.classes.elements_with(HOT).is_empty());
        assert_eq!(fx.send(DragEvent::Exited(1)), EventOutcome::Ignored);
    }

    #[test]
    fn perform_on_inactive_receiver_is_noop() {
        let mut fx = Fixture::with_sprites();
        fx.send(DragEvent::Enter(1));
        fx.send(DragEvent::Enter(2));
        let outcome = fx.send(DragEvent::Perform {
            target: 1,
            alt: false,
        });
        assert_eq!(outcome, EventOutcome::Ignored);
        assert!(fx.recorder.drops.is_empty());
        assert_eq!(fx.overlay.tracker().map(|t| t.receivers().to_vec()), Some(vec![1, 2]));
    }

    #[test]
    fn perform_on_active_receiver_clears_and_notifies() {
        let mut fx = Fixture::with_sprites();
        fx.send(DragEvent::Enter(1));
        fx.send(DragEvent::Enter(2));
        let outcome = fx.send(DragEvent::Perform {
            target: 2,
            alt: true,
        });
        assert_eq!(outcome, EventOutcome::Consumed);
        assert!(fx.overlay.tracker().is_none());
        assert!(fx.classes.elements_with(HOT).is_empty());
        assert_eq!(fx.recorder.drops.len(), 1);
        let (groups, alt) = &fx.recorder.drops[0];
        assert!(*alt);
        assert_eq!(groups[0].source_kind, PayloadSourceKind::LooseSprite);
        assert_eq!(groups[0].group_name, "s1");
    }

    #[test]
    fn perform_without_usable_objects_skips_callback() {
        let mut fx = Fixture::with_sprites();
        fx.send(DragEvent::Enter(1));
        fx.session.update_payload(DragPayload::default());
        let outcome = fx.send(DragEvent::Perform {
            target: 1,
            alt: false,
        });
        assert_eq!(outcome, EventOutcome::Ignored);
        assert!(fx.overlay.tracker().is_none());
        assert!(fx.recorder.drops.is_empty());
    }

    #[test]
    fn reset_clears_highlight() {
        let mut fx = Fixture::with_sprites();
        fx.send(DragEvent::Enter(1));
        fx.overlay.reset(&mut fx.classes);
        assert!(fx.overlay.tracker().is_none());
        assert!(!fx.classes.has_class(1, HOT));
    }
}
