//! Paginator
//!
//! Owns the item sequence and its `PageState`; rendering of the visible slice
//! is delegated to the `RenderPage` callback supplied by the caller.

use crate::config::PagerConfig;
use crate::error::PagerError;
use crate::state::{PageState, RangeLabel};
use crate::window::{control_row, PageControl};

/// Receives the items of the page being shown, replacing the previous page
pub type RenderPage<T> = Box<dyn FnMut(&[T])>;

/// Everything a view needs besides the rows themselves
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageSnapshot {
    pub current_page: usize,
    pub total_pages: usize,
    pub range: RangeLabel,
    pub controls: Vec<PageControl>,
}

pub struct Paginator<T> {
    items: Vec<T>,
    state: PageState,
    config: PagerConfig,
    render_page: RenderPage<T>,
}

impl<T> Paginator<T> {
    /// Build a paginator positioned on page 1. Nothing is rendered until
    /// `show_page` is called.
    pub fn new(items: Vec<T>, config: PagerConfig, render_page: RenderPage<T>) -> Result<Self, PagerError> {
        if config.max_visible == 0 {
            return Err(PagerError::ZeroMaxVisible);
        }
        let state = PageState::new(config.page_size, items.len())?;
        Ok(Self {
            items,
            state,
            config,
            render_page,
        })
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Items of the current page
    pub fn page_items(&self) -> &[T] {
        &self.items[self.state.bounds()]
    }

    /// Render page `n` (clamped into range) and return the label/controls
    /// for it. Calling twice with the same `n` renders the same output.
    pub fn show_page(&mut self, n: usize) -> PageSnapshot {
        self.state.go_to(n);
        let bounds = self.state.bounds();
        (self.render_page)(&self.items[bounds]);
        self.snapshot()
    }

    pub fn next(&mut self) -> PageSnapshot {
        self.show_page(self.state.current_page() + 1)
    }

    pub fn prev(&mut self) -> PageSnapshot {
        self.show_page(self.state.current_page().saturating_sub(1))
    }

    pub fn last(&mut self) -> PageSnapshot {
        self.show_page(self.state.last_page())
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            current_page: self.state.current_page(),
            total_pages: self.state.total_pages(),
            range: self.state.range_label(),
            controls: control_row(&self.state, &self.config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_pager(total: usize, page_size: usize) -> (Paginator<usize>, Rc<RefCell<Vec<Vec<usize>>>>) {
        let rendered = Rc::new(RefCell::new(Vec::new()));
        let sink = rendered.clone();
        let pager = Paginator::new(
            (0..total).collect(),
            PagerConfig::new(page_size),
            Box::new(move |page: &[usize]| sink.borrow_mut().push(page.to_vec())),
        )
        .unwrap();
        (pager, rendered)
    }

    #[test]
    fn test_new_does_not_render() {
        let (_pager, rendered) = recording_pager(12, 5);
        assert!(rendered.borrow().is_empty());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let zero_size = Paginator::new(vec![1, 2], PagerConfig::new(0), Box::new(|_: &[i32]| {}));
        assert!(matches!(zero_size, Err(PagerError::ZeroPageSize)));

        let zero_window = Paginator::new(vec![1, 2], PagerConfig::new(5).with_max_visible(0), Box::new(|_: &[i32]| {}));
        assert!(matches!(zero_window, Err(PagerError::ZeroMaxVisible)));
    }

    #[test]
    fn test_pages_reconstruct_sequence() {
        for total in 0..40 {
            for size in 1..7 {
                let (mut pager, rendered) = recording_pager(total, size);
                let pages = pager.state().total_pages();
                for n in 1..=pages {
                    pager.show_page(n);
                }
                let joined: Vec<usize> = rendered.borrow().iter().flatten().copied().collect();
                assert_eq!(joined, (0..total).collect::<Vec<_>>(), "total={} size={}", total, size);
            }
        }
    }

    #[test]
    fn test_show_page_is_idempotent() {
        let (mut pager, rendered) = recording_pager(57, 20);
        let first = pager.show_page(2);
        let second = pager.show_page(2);
        assert_eq!(first, second);
        let rendered = rendered.borrow();
        assert_eq!(rendered[0], rendered[1]);
        assert_eq!(rendered[0], (20..40).collect::<Vec<_>>());
        assert_eq!(first.range, RangeLabel { first: 21, last: 40, total: 57 });
    }

    #[test]
    fn test_empty_collection_renders_nothing_visible() {
        let (mut pager, rendered) = recording_pager(0, 20);
        let snapshot = pager.show_page(1);
        assert_eq!(rendered.borrow().as_slice(), &[Vec::<usize>::new()]);
        assert_eq!((snapshot.range.first, snapshot.range.last), (0, 0));
        assert!(snapshot.controls.is_empty());
        assert_eq!(snapshot.total_pages, 0);
    }

    #[test]
    fn test_navigation_helpers_stay_in_range() {
        let (mut pager, _) = recording_pager(25, 10);
        assert_eq!(pager.prev().current_page, 1);
        assert_eq!(pager.next().current_page, 2);
        assert_eq!(pager.last().current_page, 3);
        assert_eq!(pager.next().current_page, 3);
        assert_eq!(pager.page_items(), &[20, 21, 22, 23, 24]);
    }
}
