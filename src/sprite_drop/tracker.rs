use std::fmt::Debug;

use tracing::debug;

use super::classes::ClassList;
use super::payload::DragVisualMode;

/// Stack of elements currently receiving one drag gesture.
///
/// Nested drop zones all register themselves on enter; only the most recently
/// entered one that is still hovered is active and carries the highlight class.
#[derive(Clone, Debug)]
pub struct DragReceiverTracker<E> {
    receivers: Vec<E>,
    active: Option<E>,
    highlight_class: String,
}

impl<E: Copy + Eq + Debug> DragReceiverTracker<E> {
    pub fn new(highlight_class: impl Into<String>) -> Self {
        Self {
            receivers: Vec::new(),
            active: None,
            highlight_class: highlight_class.into(),
        }
    }

    /// The element eligible to consume the drop, if any.
    pub fn active(&self) -> Option<E> {
        self.active
    }

    /// Tracked elements in hover-entry order.
    pub fn receivers(&self) -> &[E] {
        &self.receivers
    }

    pub fn len(&self) -> usize {
        self.receivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receivers.is_empty()
    }

    pub fn contains(&self, element: E) -> bool {
        self.receivers.contains(&element)
    }

    /// Push `element` on top of the stack and make it active.
    ///
    /// Callers must not add an element that is already tracked.
    pub fn add_receiver(
        &mut self,
        element: E,
        visual_mode: DragVisualMode,
        classes: &mut impl ClassList<E>,
    ) {
        if let Some(previous) = self.receivers.last().copied() {
            classes.remove_class(previous, &self.highlight_class);
        }
        self.receivers.push(element);
        self.active = Some(element);
        if visual_mode.accepts() {
            classes.add_class(element, &self.highlight_class);
        }
        debug!(
            "Drag receiver added: element={:?} mode={:?} depth={}",
            element,
            visual_mode,
            self.receivers.len()
        );
    }

    /// Remove `element` and hand the highlight down to the new top.
    ///
    /// Returns true when no receivers remain.
    pub fn remove_receiver(&mut self, element: E, classes: &mut impl ClassList<E>) -> bool {
        self.receivers.retain(|tracked| *tracked != element);
        let last = self.receivers.last().copied();
        if classes.has_class(element, &self.highlight_class) {
            classes.remove_class(element, &self.highlight_class);
            if let Some(last) = last {
                classes.add_class(last, &self.highlight_class);
            }
        }
        self.active = last;
        debug!(
            "Drag receiver removed: element={:?} active={:?} depth={}",
            element,
            self.active,
            self.receivers.len()
        );
        self.receivers.is_empty()
    }

    /// Strip the highlight from every receiver and forget them all.
    pub fn clear(&mut self, classes: &mut impl ClassList<E>) {
        for receiver in &self.receivers {
            if classes.has_class(*receiver, &self.highlight_class) {
                classes.remove_class(*receiver, &self.highlight_class);
            }
        }
        self.receivers.clear();
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite_drop::classes::ElementClasses;

    const HOT: &str = "drag-over-add";

    fn highlighted(classes: &ElementClasses<u32>) -> Vec<u32> {
        let mut elements = classes.elements_with(HOT);
        elements.sort_unstable();
        elements
    }

    #[test]
    fn active_follows_most_recent_add() {
        let mut classes = ElementClasses::new();
        let mut tracker = DragReceiverTracker::new(HOT);
        for element in [3u32, 9, 4, 1] {
            tracker.add_receiver(element, DragVisualMode::Copy, &mut classes);
            assert_eq!(tracker.active(), Some(element));
            assert_eq!(highlighted(&classes), vec![element]);
        }
        tracker.remove_receiver(1, &mut classes);
        assert_eq!(tracker.active(), Some(4));
        tracker.remove_receiver(9, &mut classes);
        assert_eq!(tracker.active(), Some(4));
        assert_eq!(tracker.receivers(), &[3, 4]);
    }

    #[test]
    fn nested_stack_hands_highlight_down() {
        let (a, b, c) = (1u32, 2, 3);
        let mut classes = ElementClasses::new();
        let mut tracker = DragReceiverTracker::new(HOT);
        tracker.add_receiver(a, DragVisualMode::Copy, &mut classes);
        tracker.add_receiver(b, DragVisualMode::Copy, &mut classes);
        tracker.add_receiver(c, DragVisualMode::Copy, &mut classes);
        assert_eq!(tracker.receivers(), &[a, b, c]);
        assert_eq!(tracker.active(), Some(c));
        assert_eq!(highlighted(&classes), vec![c]);

        assert!(!tracker.remove_receiver(c, &mut classes));
        assert_eq!(tracker.active(), Some(b));
        assert_eq!(highlighted(&classes), vec![b]);

        assert!(!tracker.remove_receiver(b, &mut classes));
        assert_eq!(tracker.active(), Some(a));
        assert_eq!(highlighted(&classes), vec![a]);

        assert!(tracker.remove_receiver(a, &mut classes));
        assert_eq!(tracker.active(), None);
        assert!(highlighted(&classes).is_empty());
    }

    #[test]
    fn repeated_remove_is_idempotent() {
        let mut classes = ElementClasses::new();
        let mut tracker = DragReceiverTracker::new(HOT);
        tracker.add_receiver(1u32, DragVisualMode::Copy, &mut classes);
        tracker.add_receiver(2, DragVisualMode::Copy, &mut classes);

        assert!(!tracker.remove_receiver(2, &mut classes));
        assert!(!tracker.remove_receiver(2, &mut classes));
        assert_eq!(tracker.receivers(), &[1]);
        assert_eq!(tracker.active(), Some(1));
        assert_eq!(highlighted(&classes), vec![1]);
    }

    #[test]
    fn removing_untracked_element_reports_state() {
        let mut classes = ElementClasses::new();
        let mut tracker: DragReceiverTracker<u32> = DragReceiverTracker::new(HOT);
        assert!(tracker.remove_receiver(5, &mut classes));
        tracker.add_receiver(1, DragVisualMode::Copy, &mut classes);
        assert!(!tracker.remove_receiver(5, &mut classes));
        assert_eq!(highlighted(&classes), vec![1]);
    }

    #[test]
    fn rejected_mode_leaves_element_unhighlighted() {
        let mut classes = ElementClasses::new();
        let mut tracker = DragReceiverTracker::new(HOT);
        tracker.add_receiver(1u32, DragVisualMode::Copy, &mut classes);
        tracker.add_receiver(2, DragVisualMode::Rejected, &mut classes);
        assert_eq!(tracker.active(), Some(2));
        assert!(highlighted(&classes).is_empty());

        // Without a highlight on the removed element nothing is handed down.
        tracker.remove_receiver(2, &mut classes);
        assert_eq!(tracker.active(), Some(1));
        assert!(highlighted(&classes).is_empty());
    }

    #[test]
    fn clear_strips_every_highlight() {
        let mut classes = ElementClasses::new();
        let mut tracker = DragReceiverTracker::new(HOT);
        tracker.add_receiver(1u32, DragVisualMode::Copy, &mut classes);
        tracker.add_receiver(2, DragVisualMode::Copy, &mut classes);
        classes.add_class(1, HOT);

        tracker.clear(&mut classes);
        assert!(tracker.is_empty());
        assert_eq!(tracker.active(), None);
        assert!(highlighted(&classes).is_empty());
    }

    #[test]
    fn clear_keeps_unrelated_classes() {
        let mut classes = ElementClasses::new();
        classes.add_class(1u32, "selected");
        let mut tracker = DragReceiverTracker::new(HOT);
        tracker.add_receiver(1, DragVisualMode::Copy, &mut classes);
        tracker.clear(&mut classes);
        assert!(classes.has_class(1, "selected"));
    }
}
