use crate::sprite_drop::DragEvent;

/// Turns per-frame hover sets into enter/update/leave events.
///
/// Immediate-mode UIs only know which drop zones contain the pointer this
/// frame; the router diffs that against the previous frame. Zones are listed
/// outermost first, so nested zones are entered after their parents.
#[derive(Clone, Debug)]
pub struct HoverRouter<E> {
    hovered: Vec<E>,
}

impl<E> Default for HoverRouter<E> {
    fn default() -> Self {
        Self {
            hovered: Vec::new(),
        }
    }
}

impl<E: Copy + Eq> HoverRouter<E> {
    pub fn hovered(&self) -> &[E] {
        &self.hovered
    }

    /// Events moving from last frame's hover set to `now`.
    ///
    /// Leaves come first (innermost first), then updates, then enters in
    /// `now` order.
    pub fn transition(&mut self, now: &[E]) -> Vec<DragEvent<E>> {
        let mut events: Vec<DragEvent<E>> = self
            .hovered
            .iter()
            .rev()
            .filter(|zone| !now.contains(zone))
            .map(|zone| DragEvent::Leave(*zone))
            .collect();
        for zone in now {
            if self.hovered.contains(zone) {
                events.push(DragEvent::Updated(*zone));
            }
        }
        for zone in now {
            if !self.hovered.contains(zone) {
                events.push(DragEvent::Enter(*zone));
            }
        }
        self.hovered = now.to_vec();
        events
    }

    /// Perform events for every hovered zone, innermost first.
    pub fn drop_events(&self, alt: bool) -> Vec<DragEvent<E>> {
        self.hovered
            .iter()
            .rev()
            .map(|zone| DragEvent::Perform { target: *zone, alt })
            .collect()
    }

    /// Exit every hovered zone, innermost first, and forget them.
    pub fn cancel(&mut self) -> Vec<DragEvent<E>> {
        self.hovered
            .drain(..)
            .rev()
            .map(DragEvent::Exited)
            .collect()
    }

    pub fn reset(&mut self) {
        self.hovered.clear();
    }
}
