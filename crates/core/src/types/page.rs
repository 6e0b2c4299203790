//! Pagination state

use serde::{Deserialize, Serialize};

/// Upper bound on pages the catalog will serve for any listing
pub const MAX_TOTAL_PAGES: u32 = 500;

/// Caps a page count reported by the catalog at [`MAX_TOTAL_PAGES`]
pub fn cap_total_pages(total_pages: u32) -> u32 {
    total_pages.min(MAX_TOTAL_PAGES)
}

/// Current page and total page count of the result listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    current_page: u32,
    total_pages: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
        }
    }
}

impl PageState {
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        Self {
            current_page: current_page.max(1),
            total_pages: cap_total_pages(total_pages),
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Moves back to the first page
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Selects a page; zero is treated as page 1
    pub fn set_current(&mut self, page: u32) {
        self.current_page = page.max(1);
    }

    /// Records the page count of the latest response, capped
    pub fn set_total(&mut self, total_pages: u32) {
        self.total_pages = cap_total_pages(total_pages);
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// The page after the current one, if it exists
    pub fn next(&self) -> Option<u32> {
        self.has_next().then(|| self.current_page + 1)
    }

    /// The page before the current one, if it exists
    pub fn previous(&self) -> Option<u32> {
        self.has_previous().then(|| self.current_page - 1)
    }
}
