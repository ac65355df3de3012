//! Page bookkeeping and the fetch trigger phases.

use super::client::PAGE_SIZE;

/// Where the fetch trigger currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    /// Ready to request the next page when asked.
    #[default]
    Idle,
    /// A request for `page` is outstanding.
    Loading { page: u32 },
    /// Every page has been loaded. Terminal.
    Exhausted,
}

impl FetchPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchPhase::Loading { .. })
    }

    /// The page currently in flight, if any.
    pub fn in_flight(&self) -> Option<u32> {
        match self {
            FetchPhase::Loading { page } => Some(*page),
            _ => None,
        }
    }
}

/// Last loaded page and the page count reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    /// Last page successfully applied (1-based, 0 before the first load).
    pub current_page: u32,
    /// Pages the backend has, never less than 1.
    pub total_pages: u32,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 0,
            total_pages: 1,
        }
    }
}

impl PaginationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page that the next fetch would request.
    pub fn next_page(&self) -> u32 {
        self.current_page + 1
    }

    /// True while there is a page beyond `current_page`.
    pub fn has_more(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Record that `page` loaded and the backend now reports `total_count`.
    ///
    /// Keeps `current_page <= total_pages` even if the backend total shrinks.
    pub fn record_loaded(&mut self, page: u32, total_count: u64) {
        self.total_pages = total_pages_for(total_count).max(page);
        self.current_page = page;
    }
}

/// `ceil(total_count / PAGE_SIZE)`, with an empty catalog counting as one page.
pub fn total_pages_for(total_count: u64) -> u32 {
    let pages = total_count.div_ceil(u64::from(PAGE_SIZE)).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}
