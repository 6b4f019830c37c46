//! Pager configuration, one instance per call site.

/// Page-number buttons shown around the current page.
pub const DEFAULT_MAX_VISIBLE: usize = 6;

/// What to render when every item fits on a single page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SinglePagePolicy {
    /// No controls at all, the page is implicit
    #[default]
    Hide,
    /// One active button for page 1
    ShowActive,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PagerConfig {
    pub page_size: usize,
    pub max_visible: usize,
    pub single_page: SinglePagePolicy,
}

impl PagerConfig {
    pub const fn new(page_size: usize) -> Self {
        Self {
            page_size,
            max_visible: DEFAULT_MAX_VISIBLE,
            single_page: SinglePagePolicy::Hide,
        }
    }

    pub const fn with_max_visible(mut self, max_visible: usize) -> Self {
        self.max_visible = max_visible;
        self
    }

    pub const fn with_single_page(mut self, policy: SinglePagePolicy) -> Self {
        self.single_page = policy;
        self
    }
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self::new(10)
    }
}
