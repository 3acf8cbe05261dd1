//! Single-open FAQ accordion.

/// Icon shown on a collapsed panel.
pub const ICON_COLLAPSED: &str = "+";
/// Icon shown on the expanded panel (U+2212 minus sign).
pub const ICON_EXPANDED: &str = "\u{2212}";

/// Accordion over a fixed number of panels; at most one is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    /// All panels closed.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    /// Seeded from markup: `open` is the panel already marked open, if any.
    /// An out-of-range index is treated as none.
    #[must_use]
    pub fn with_open(len: usize, open: Option<usize>) -> Self {
        Self {
            len,
            open: open.filter(|index| *index < len),
        }
    }

    /// Number of panels managed.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True when there are no panels on the page.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Header click on `index`: flip that panel and close every other one.
    /// Out-of-range indices are ignored.
    pub fn click(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    /// Index of the open panel, if any.
    #[must_use]
    pub const fn open_panel(&self) -> Option<usize> {
        self.open
    }

    /// Whether `index` is currently open.
    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Disclosure glyph for `index`.
    #[must_use]
    pub fn icon(&self, index: usize) -> &'static str {
        if self.is_open(index) {
            ICON_EXPANDED
        } else {
            ICON_COLLAPSED
        }
    }
}
