//! Derives the active page section and the scroll-to-top flag from a
//! snapshot of scroll geometry.

use crate::models::{Section, SectionId};

/// Offset past which the scroll-to-top button shows
pub const SCROLL_TOP_THRESHOLD: f64 = 500.0;

/// A section counts as entered once its top is within this distance of the viewport top
pub const SECTION_LEEWAY: f64 = 150.0;

/// Reads where a section currently sits relative to the viewport.
/// `None` means the section is not rendered.
pub trait SectionProbe {
    fn top_of(&self, id: &SectionId) -> Option<f64>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollState {
    active_section: SectionId,
    past_threshold: bool,
}

impl ScrollState {
    pub fn active_section(&self) -> &SectionId {
        &self.active_section
    }

    pub fn is_past_threshold(&self) -> bool {
        self.past_threshold
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTracker {
    registry: Vec<Section>,
    state: ScrollState,
}

impl ScrollTracker {
    /// Create a tracker with the first registered section active, or `None`
    /// for an empty registry.
    pub fn new(registry: Vec<Section>) -> Option<Self> {
        let first = registry.first()?.id.clone();
        Some(Self {
            registry,
            state: ScrollState {
                active_section: first,
                past_threshold: false,
            },
        })
    }

    pub fn registry(&self) -> &[Section] {
        &self.registry
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    /// Snapshot of `(id, top)` for every registered section the probe can find
    pub fn measure(&self, probe: &impl SectionProbe) -> Vec<(SectionId, f64)> {
        self.registry
            .iter()
            .filter_map(|section| probe.top_of(&section.id).map(|top| (section.id.clone(), top)))
            .collect()
    }

    /// Recomputes the state from the scroll offset and section tops.
    ///
    /// Sections are scanned last to first and the first one whose top is
    /// within [`SECTION_LEEWAY`] becomes active, so when several qualify the
    /// last-defined wins. Missing sections are skipped. When none qualifies
    /// the previous active section is kept. Returns whether anything changed.
    pub fn on_scroll(&mut self, offset_y: f64, tops: &[(SectionId, f64)]) -> bool {
        let past_threshold = offset_y > SCROLL_TOP_THRESHOLD;

        let active = self
            .registry
            .iter()
            .rev()
            .find_map(|section| {
                tops.iter()
                    .find(|(id, _)| *id == section.id)
                    .filter(|(_, top)| *top <= SECTION_LEEWAY)
                    .map(|_| section.id.clone())
            })
            .unwrap_or_else(|| self.state.active_section.clone());

        let next = ScrollState {
            active_section: active,
            past_threshold,
        };
        if next == self.state {
            return false;
        }
        self.state = next;
        true
    }
}

/// Fraction of the page scrolled, clamped to `[0, 1]`
pub fn scroll_progress(offset_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (offset_y / scrollable).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    struct FakePage(HashMap<&'static str, f64>);

    impl SectionProbe for FakePage {
        fn top_of(&self, id: &SectionId) -> Option<f64> {
            self.0.get(id.as_str()).copied()
        }
    }

    fn registry(ids: &[&str]) -> Vec<Section> {
        ids.iter()
            .map(|id| Section {
                id: SectionId::from(*id),
                label: id.to_uppercase(),
            })
            .collect()
    }

    fn tracker_for(ids: &[&str]) -> ScrollTracker {
        ScrollTracker::new(registry(ids)).expect("non-empty registry")
    }

    #[test]
    fn empty_registry_has_no_tracker() {
        assert!(ScrollTracker::new(Vec::new()).is_none());
    }

    fn tops(pairs: &[(&str, f64)]) -> Vec<(SectionId, f64)> {
        pairs
            .iter()
            .map(|(id, top)| (SectionId::from(*id), *top))
            .collect()
    }

    #[test]
    fn top_of_page_activates_first_section() {
        let mut tracker = tracker_for(&["a", "b", "c"]);
        tracker.on_scroll(0.0, &tops(&[("a", 0.0), ("b", 800.0), ("c", 1600.0)]));

        assert!(!tracker.state().is_past_threshold());
        assert_eq!(tracker.state().active_section().as_str(), "a");
    }

    #[test]
    fn threshold_is_exclusive_at_500() {
        let mut tracker = tracker_for(&["a"]);
        tracker.on_scroll(500.0, &[]);
        assert!(!tracker.state().is_past_threshold());

        tracker.on_scroll(600.0, &[]);
        assert!(tracker.state().is_past_threshold());
    }

    #[test]
    fn lowest_qualifying_section_wins() {
        // scrolled 700px: a at -700, b at 100, c at 900
        let mut tracker = tracker_for(&["a", "b", "c"]);
        tracker.on_scroll(700.0, &tops(&[("a", -700.0), ("b", 100.0), ("c", 700.0)]));

        assert_eq!(tracker.state().active_section().as_str(), "b");
        assert!(tracker.state().is_past_threshold());
    }

    #[test]
    fn leeway_boundary_is_inclusive() {
        let mut tracker = tracker_for(&["a", "b"]);
        tracker.on_scroll(0.0, &tops(&[("a", -10.0), ("b", 150.0)]));
        assert_eq!(tracker.state().active_section().as_str(), "b");

        tracker.on_scroll(0.0, &tops(&[("a", -10.0), ("b", 150.1)]));
        assert_eq!(tracker.state().active_section().as_str(), "a");
    }

    #[test]
    fn on_scroll_is_idempotent() {
        let mut tracker = tracker_for(&["a", "b", "c"]);
        let snapshot = tops(&[("a", -900.0), ("b", -100.0), ("c", 700.0)]);

        assert!(tracker.on_scroll(900.0, &snapshot));
        let first = tracker.state().clone();

        assert!(!tracker.on_scroll(900.0, &snapshot));
        assert_eq!(tracker.state(), &first);
    }

    #[test]
    fn missing_sections_are_skipped() {
        let mut tracker = tracker_for(&["hero", "social", "cta"]);
        let page = FakePage(HashMap::from([("hero", -400.0), ("cta", 600.0)]));

        let snapshot = tracker.measure(&page);
        assert_eq!(snapshot.len(), 2);

        tracker.on_scroll(400.0, &snapshot);
        assert_eq!(tracker.state().active_section().as_str(), "hero");
    }

    #[test]
    fn unregistered_geometry_is_ignored() {
        let mut tracker = tracker_for(&["a", "b"]);
        tracker.on_scroll(0.0, &tops(&[("a", 0.0), ("rogue", 0.0)]));
        assert_eq!(tracker.state().active_section().as_str(), "a");
    }

    #[test]
    fn keeps_previous_section_when_none_qualifies() {
        let mut tracker = tracker_for(&["a", "b"]);
        tracker.on_scroll(900.0, &tops(&[("a", -900.0), ("b", 0.0)]));
        assert_eq!(tracker.state().active_section().as_str(), "b");

        tracker.on_scroll(900.0, &tops(&[("a", 400.0), ("b", 900.0)]));
        assert_eq!(tracker.state().active_section().as_str(), "b");
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(scroll_progress(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(1500.0, 2000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(100.0, 800.0, 1000.0), 0.0);
    }
}
