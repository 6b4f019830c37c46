//! Sliding window of page-number buttons
//!
//! The window is `[current - before, current + after]` clipped to
//! `[1, total_pages]`, re-anchored when it runs short at the end. Pages past
//! the window stay reachable through an ellipsis and a final button.

use std::ops::RangeInclusive;

use crate::config::{PagerConfig, SinglePagePolicy};
use crate::state::PageState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageControl {
    Page { number: usize, active: bool },
    Ellipsis,
}

/// Pages shown around `current`. `None` when there are no pages.
pub fn page_window(current: usize, total_pages: usize, max_visible: usize) -> Option<RangeInclusive<usize>> {
    if total_pages == 0 || max_visible == 0 {
        return None;
    }
    let span = max_visible - 1;
    let before = span / 2;
    let after = span - before;

    let current = current.clamp(1, total_pages);
    let mut inicio = current.saturating_sub(before).max(1);
    let fin = (current + after).min(total_pages);
    if fin - inicio < span {
        inicio = fin.saturating_sub(span).max(1);
    }
    Some(inicio..=fin)
}

/// Controls to render for the current state; exactly one `Page` is active
/// whenever the row is non-empty.
pub fn control_row(state: &PageState, config: &PagerConfig) -> Vec<PageControl> {
    let total_pages = state.total_pages();
    if total_pages == 1 && config.single_page == SinglePagePolicy::Hide {
        return Vec::new();
    }
    let Some(window) = page_window(state.current_page(), total_pages, config.max_visible) else {
        return Vec::new();
    };

    let current = state.current_page();
    let fin = *window.end();
    let mut controls: Vec<PageControl> = window
        .map(|number| PageControl::Page { number, active: number == current })
        .collect();

    if fin < total_pages {
        controls.push(PageControl::Ellipsis);
        controls.push(PageControl::Page { number: total_pages, active: false });
    }
    controls
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(controls: &[PageControl]) -> Vec<usize> {
        controls
            .iter()
            .filter_map(|c| match c {
                PageControl::Page { number, .. } => Some(*number),
                PageControl::Ellipsis => None,
            })
            .collect()
    }

    fn state_at(page: usize, page_size: usize, total_items: usize) -> PageState {
        let mut state = PageState::new(page_size, total_items).unwrap();
        state.go_to(page);
        state
    }

    #[test]
    fn test_window_clamped_at_end() {
        assert_eq!(page_window(7, 10, 6), Some(5..=10));
        assert_eq!(page_window(9, 10, 6), Some(5..=10));
        assert_eq!(page_window(10, 10, 6), Some(5..=10));
    }

    #[test]
    fn test_window_at_start_is_not_extended() {
        assert_eq!(page_window(1, 10, 6), Some(1..=4));
        assert_eq!(page_window(3, 10, 6), Some(1..=6));
    }

    #[test]
    fn test_window_fewer_pages_than_buttons() {
        assert_eq!(page_window(2, 3, 6), Some(1..=3));
        assert_eq!(page_window(1, 0, 6), None);
    }

    #[test]
    fn test_no_ellipsis_when_window_reaches_last_page() {
        let config = PagerConfig::new(10);
        let controls = control_row(&state_at(7, 10, 100), &config);
        assert_eq!(pages(&controls), vec![5, 6, 7, 8, 9, 10]);
        assert!(!controls.contains(&PageControl::Ellipsis));
    }

    #[test]
    fn test_last_page_reachable_from_start() {
        let config = PagerConfig::new(10);
        let controls = control_row(&state_at(1, 10, 100), &config);
        assert_eq!(
            controls,
            vec![
                PageControl::Page { number: 1, active: true },
                PageControl::Page { number: 2, active: false },
                PageControl::Page { number: 3, active: false },
                PageControl::Page { number: 4, active: false },
                PageControl::Ellipsis,
                PageControl::Page { number: 10, active: false },
            ]
        );
    }

    #[test]
    fn test_exactly_one_active_button() {
        let config = PagerConfig::new(5);
        for page in 1..=23 {
            let controls = control_row(&state_at(page, 5, 113), &config);
            let active: Vec<_> = controls
                .iter()
                .filter(|c| matches!(c, PageControl::Page { active: true, .. }))
                .collect();
            assert_eq!(active, vec![&PageControl::Page { number: page, active: true }]);
        }
    }

    #[test]
    fn test_empty_collection_has_no_controls() {
        let config = PagerConfig::new(10).with_single_page(SinglePagePolicy::ShowActive);
        assert!(control_row(&state_at(1, 10, 0), &config).is_empty());
    }

    #[test]
    fn test_single_page_policy() {
        let state = state_at(1, 20, 7);
        assert!(control_row(&state, &PagerConfig::new(20)).is_empty());

        let shown = PagerConfig::new(20).with_single_page(SinglePagePolicy::ShowActive);
        assert_eq!(
            control_row(&state, &shown),
            vec![PageControl::Page { number: 1, active: true }]
        );
    }
}
