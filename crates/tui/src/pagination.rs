// crates/tui/src/pagination.rs
//! Page bar windowing
//!
//! The first five pages, the last two, and the two on each side of the
//! current page are always shown. Each run of hidden pages in between
//! collapses into a single ellipsis.

use std::fmt;

/// Pages always shown at the start of the bar
const LEADING_PAGES: u32 = 5;
/// Pages always shown at the end of the bar
const TRAILING_PAGES: u32 = 2;
/// Pages shown on each side of the current one
const NEIGHBOURS: u32 = 2;

/// One slot of the page bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Page(u32),
    Ellipsis,
}

impl PageSlot {
    pub fn page(&self) -> Option<u32> {
        match self {
            PageSlot::Page(page) => Some(*page),
            PageSlot::Ellipsis => None,
        }
    }
}

impl fmt::Display for PageSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSlot::Page(page) => write!(f, "{}", page),
            PageSlot::Ellipsis => write!(f, "…"),
        }
    }
}

/// Returns true when `page` gets its own button
pub fn is_page_visible(page: u32, current: u32, total: u32) -> bool {
    page <= LEADING_PAGES
        || page + TRAILING_PAGES > total
        || page.abs_diff(current) <= NEIGHBOURS
}

/// Computes the slots of the page bar for `(current, total)`
///
/// `total == 0` yields no slots. A `current` outside `1..=total` still
/// produces a well-formed bar.
pub fn page_window(current: u32, total: u32) -> Vec<PageSlot> {
    let mut slots = Vec::new();
    let mut in_gap = false;

    for page in 1..=total {
        if is_page_visible(page, current, total) {
            slots.push(PageSlot::Page(page));
            in_gap = false;
        } else if !in_gap {
            slots.push(PageSlot::Ellipsis);
            in_gap = true;
        }
    }

    slots
}

/// Renders slots as space-separated labels, e.g. "1 2 3 … 19 20"
pub fn labels(slots: &[PageSlot]) -> String {
    slots
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
