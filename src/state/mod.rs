pub mod nav;
pub mod scroll;

pub use nav::{NavMenu, NavState, PointerTarget};
pub use scroll::{scroll_progress, ScrollState, ScrollTracker, SectionProbe};

/// Single-open toggle shared by accordions: clicking the open row closes it.
pub fn toggle_expanded(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[cfg(test)]
mod tests {
    use super::toggle_expanded;

    #[test]
    fn accordion_toggles_single_row() {
        assert_eq!(toggle_expanded(Some(0), 0), None);
        assert_eq!(toggle_expanded(Some(0), 2), Some(2));
        assert_eq!(toggle_expanded(None, 1), Some(1));
    }
}
