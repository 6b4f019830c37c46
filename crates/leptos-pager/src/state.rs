//! Page arithmetic
//!
//! `PageState` is rebuilt whenever the item collection changes and keeps
//! `1 <= current_page <= max(1, total_pages)` after every operation.

use std::fmt;
use std::ops::Range;

use crate::error::PagerError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    page_size: usize,
    total_items: usize,
}

impl PageState {
    pub fn new(page_size: usize, total_items: usize) -> Result<Self, PagerError> {
        if page_size == 0 {
            return Err(PagerError::ZeroPageSize);
        }
        Ok(Self {
            current_page: 1,
            page_size,
            total_items,
        })
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// `ceil(total_items / page_size)`, 0 for an empty collection
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    /// Highest page the state may point at (1 even when empty)
    pub fn last_page(&self) -> usize {
        self.total_pages().max(1)
    }

    /// Move to page `n`, clamped into range. Returns the page actually selected.
    pub fn go_to(&mut self, n: usize) -> usize {
        self.current_page = n.clamp(1, self.last_page());
        self.current_page
    }

    /// Index range of the current page within the item sequence
    pub fn bounds(&self) -> Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(self.total_items);
        let end = (start + self.page_size).min(self.total_items);
        start..end
    }

    pub fn range_label(&self) -> RangeLabel {
        let bounds = self.bounds();
        RangeLabel {
            first: if bounds.is_empty() { 0 } else { bounds.start + 1 },
            last: bounds.end,
            total: self.total_items,
        }
    }
}

/// "Mostrando 1 - 20 de 57"
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RangeLabel {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

impl fmt::Display for RangeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mostrando {} - {} de {}", self.first, self.last, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_page_size() {
        assert_eq!(PageState::new(0, 10), Err(PagerError::ZeroPageSize));
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        for total in 0..60 {
            for size in 1..9 {
                let state = PageState::new(size, total).unwrap();
                let expected = (total + size - 1) / size;
                assert_eq!(state.total_pages(), expected, "total={} size={}", total, size);
            }
        }
    }

    #[test]
    fn test_empty_collection_label() {
        let state = PageState::new(20, 0).unwrap();
        assert_eq!(state.total_pages(), 0);
        assert_eq!(state.last_page(), 1);
        assert_eq!(state.bounds(), 0..0);
        let label = state.range_label();
        assert_eq!((label.first, label.last, label.total), (0, 0, 0));
    }

    #[test]
    fn test_single_item_label() {
        let state = PageState::new(20, 1).unwrap();
        assert_eq!(state.total_pages(), 1);
        let label = state.range_label();
        assert_eq!((label.first, label.last), (1, 1));
    }

    #[test]
    fn test_go_to_clamps() {
        let mut state = PageState::new(10, 57).unwrap();
        assert_eq!(state.go_to(0), 1);
        assert_eq!(state.go_to(99), 6);
        assert_eq!(state.bounds(), 50..57);
        assert_eq!(state.range_label().to_string(), "Mostrando 51 - 57 de 57");

        let mut empty = PageState::new(10, 0).unwrap();
        assert_eq!(empty.go_to(3), 1);
    }
}
