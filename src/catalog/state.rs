//! Inventory state snapshot and its transitions.
//!
//! Every event consumes the previous snapshot and returns the next one.
//! The summary and the filtered view are recomputed inside the transition
//! from the updated catalog, so they can never lag behind it.
//!
//! ```text
//!            mount / scroll (has more)
//!   Idle ───────────────────────────────▶ Loading{page}
//!    ▲                                        │
//!    │  resolved: failure, or success w/ more │
//!    └────────────────────────────────────────┤
//!                                             │ resolved: success, last page
//!                                             ▼
//!                                         Exhausted
//! ```

use super::filter::{apply_filter, AvailabilityFilter};
use super::pagination::{FetchPhase, PaginationState};
use super::summary::{summarize, InventorySummary};
use crate::error::FetchError;
use crate::models::{BookPage, BookRecord};

/// Everything the dashboard knows at one point in time.
#[derive(Debug, Clone, Default)]
pub struct InventoryState {
    catalog: Vec<BookRecord>,
    summary: InventorySummary,
    filtered: Vec<BookRecord>,
    filter: AvailabilityFilter,
    pagination: PaginationState,
    phase: FetchPhase,
    last_error: Option<FetchError>,
    reported_total: Option<u64>,
    mounted: bool,
}

impl InventoryState {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// First display: request page 1. Only the first call has an effect.
    pub fn on_mount(mut self) -> (Self, Option<u32>) {
        if self.mounted {
            return (self, None);
        }
        self.mounted = true;
        let page = self.pagination.next_page();
        self.phase = FetchPhase::Loading { page };
        tracing::info!(page, "mounted, loading first page");
        (self, Some(page))
    }

    /// The table was scrolled to its end.
    ///
    /// Returns the page to request, or `None` when a request is already in
    /// flight, every page is loaded, or the dashboard is not mounted yet.
    pub fn on_scroll_near_bottom(mut self) -> (Self, Option<u32>) {
        if !self.mounted || self.phase != FetchPhase::Idle || !self.pagination.has_more() {
            return (self, None);
        }
        let page = self.pagination.next_page();
        self.phase = FetchPhase::Loading { page };
        tracing::debug!(page, "scrolled near bottom, loading next page");
        (self, Some(page))
    }

    /// Ask again for the page that last failed.
    ///
    /// Only retryable failures (network, 5xx) react to the retry key. A bad
    /// request or payload is still re-requested by the next scroll.
    pub fn on_retry(self) -> (Self, Option<u32>) {
        if !self.can_retry() {
            return (self, None);
        }
        self.on_scroll_near_bottom()
    }

    /// Whether the last failure is worth offering a retry for.
    pub fn can_retry(&self) -> bool {
        self.last_error
            .as_ref()
            .is_some_and(|err| err.is_retryable())
    }

    /// The user picked another availability filter.
    pub fn on_filter_change(mut self, filter: AvailabilityFilter) -> Self {
        if filter != self.filter {
            tracing::debug!(filter = filter.display_name(), "filter changed");
        }
        self.filter = filter;
        self.filtered = apply_filter(&self.catalog, self.filter);
        self
    }

    /// A request for `page` finished.
    ///
    /// Responses for anything other than the in-flight page are dropped so a
    /// page can never be appended twice.
    pub fn on_fetch_resolved(mut self, page: u32, result: Result<BookPage, FetchError>) -> Self {
        if self.phase.in_flight() != Some(page) {
            tracing::warn!(
                page,
                in_flight = ?self.phase.in_flight(),
                "ignoring response for a page that is not in flight"
            );
            return self;
        }

        match result {
            Ok(BookPage { book, total_count }) => {
                let records = book.len();
                self.catalog.extend(book);
                self.pagination.record_loaded(page, total_count);
                self.reported_total = Some(total_count);
                self.last_error = None;
                self.summary = summarize(&self.catalog);
                self.filtered = apply_filter(&self.catalog, self.filter);
                self.phase = if self.pagination.has_more() {
                    FetchPhase::Idle
                } else {
                    FetchPhase::Exhausted
                };
                tracing::info!(
                    page,
                    records,
                    total_count,
                    catalog_len = self.catalog.len(),
                    total_pages = self.pagination.total_pages,
                    "page loaded"
                );
            }
            Err(err) => {
                tracing::warn!(
                    page,
                    error_code = err.error_code(),
                    category = %err.category(),
                    error = %err,
                    "error in fetching books"
                );
                self.last_error = Some(err);
                self.phase = FetchPhase::Idle;
            }
        }
        self
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Every record loaded so far, in arrival order.
    pub fn catalog(&self) -> &[BookRecord] {
        &self.catalog
    }

    pub fn summary(&self) -> &InventorySummary {
        &self.summary
    }

    /// Records passing the current filter.
    pub fn filtered(&self) -> &[BookRecord] {
        &self.filtered
    }

    pub fn filter(&self) -> AvailabilityFilter {
        self.filter
    }

    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }

    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    /// True while a request is outstanding.
    pub fn loading(&self) -> bool {
        self.phase.is_loading()
    }

    /// The error from the most recent failed fetch, cleared on success.
    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    /// Idle because the last request failed (as opposed to exhausted).
    pub fn is_failed(&self) -> bool {
        self.phase == FetchPhase::Idle && self.last_error.is_some()
    }

    pub fn is_exhausted(&self) -> bool {
        self.phase == FetchPhase::Exhausted
    }

    /// `totalCount` from the latest successful response.
    pub fn reported_total(&self) -> Option<u64> {
        self.reported_total
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(n: usize, availability: bool) -> BookRecord {
        BookRecord {
            title: format!("Book {}", n),
            author: "Anon".to_string(),
            genre: if n % 2 == 0 { "Fiction" } else { "History" }.to_string(),
            price: n as f64,
            availability,
        }
    }

    fn page(start: usize, len: usize, total_count: u64) -> BookPage {
        BookPage {
            book: (start..start + len).map(|n| book(n, n % 3 != 0)).collect(),
            total_count,
        }
    }

    fn network_error() -> FetchError {
        FetchError::Network {
            url: "http://api/books?page=2&pageSize=10".to_string(),
            message: "connection refused".to_string(),
        }
    }

    #[test]
    fn test_initial_state() {
        let state = InventoryState::new();
        assert!(!state.is_mounted());
        assert_eq!(state.phase(), FetchPhase::Idle);
        assert!(!state.loading());
        assert!(state.catalog().is_empty());
        assert_eq!(state.filter(), AvailabilityFilter::All);
    }

    #[test]
    fn test_mount_requests_first_page_once() {
        let (state, fetch) = InventoryState::new().on_mount();
        assert_eq!(fetch, Some(1));
        assert!(state.loading());

        let (state, fetch) = state.on_mount();
        assert_eq!(fetch, None);
        assert_eq!(state.phase(), FetchPhase::Loading { page: 1 });
    }

    #[test]
    fn test_scroll_before_mount_does_nothing() {
        let (state, fetch) = InventoryState::new().on_scroll_near_bottom();
        assert_eq!(fetch, None);
        assert!(!state.loading());
    }

    #[test]
    fn test_scroll_while_loading_does_not_refetch() {
        let (state, _) = InventoryState::new().on_mount();
        let (state, fetch) = state.on_scroll_near_bottom();
        assert_eq!(fetch, None);
        assert_eq!(state.phase(), FetchPhase::Loading { page: 1 });
    }

    #[test]
    fn test_twenty_five_records_three_pages() {
        let (state, fetch) = InventoryState::new().on_mount();
        assert_eq!(fetch, Some(1));
        let state = state.on_fetch_resolved(1, Ok(page(0, 10, 25)));
        assert_eq!(state.phase(), FetchPhase::Idle);
        assert_eq!(state.pagination().total_pages, 3);

        let (state, fetch) = state.on_scroll_near_bottom();
        assert_eq!(fetch, Some(2));
        let state = state.on_fetch_resolved(2, Ok(page(10, 10, 25)));

        let (state, fetch) = state.on_scroll_near_bottom();
        assert_eq!(fetch, Some(3));
        let state = state.on_fetch_resolved(3, Ok(page(20, 5, 25)));

        assert_eq!(state.catalog().len(), 25);
        assert_eq!(state.pagination().current_page, 3);
        assert_eq!(state.pagination().total_pages, 3);
        assert!(state.is_exhausted());

        let (state, fetch) = state.on_scroll_near_bottom();
        assert_eq!(fetch, None);
        assert!(state.is_exhausted());
    }

    #[test]
    fn test_failed_page_returns_to_idle_and_keeps_catalog() {
        let (state, _) = InventoryState::new().on_mount();
        let state = state.on_fetch_resolved(1, Ok(page(0, 10, 25)));
        let (state, fetch) = state.on_scroll_near_bottom();
        assert_eq!(fetch, Some(2));

        let state = state.on_fetch_resolved(2, Err(network_error()));
        assert_eq!(state.catalog().len(), 10);
        assert!(!state.loading());
        assert_eq!(state.pagination().current_page, 1);
        assert_eq!(state.phase(), FetchPhase::Idle);
        assert!(state.is_failed());
        assert!(!state.is_exhausted());
    }

    #[test]
    fn test_retry_after_failure_requests_same_page() {
        let (state, _) = InventoryState::new().on_mount();
        let state = state.on_fetch_resolved(1, Err(network_error()));
        let (state, fetch) = state.on_retry();
        assert_eq!(fetch, Some(1));

        let state = state.on_fetch_resolved(1, Ok(page(0, 4, 4)));
        assert!(state.last_error().is_none());
        assert!(state.is_exhausted());
    }

    #[test]
    fn test_retry_ignores_malformed_payload() {
        let (state, _) = InventoryState::new().on_mount();
        let state = state.on_fetch_resolved(
            1,
            Err(FetchError::MalformedPayload {
                url: "http://api/books?page=1&pageSize=10".to_string(),
                message: "missing field `book`".to_string(),
            }),
        );
        assert!(!state.can_retry());

        let (state, fetch) = state.on_retry();
        assert_eq!(fetch, None);
        assert_eq!(state.phase(), FetchPhase::Idle);

        let (_, fetch) = state.on_scroll_near_bottom();
        assert_eq!(fetch, Some(1));
    }

    #[test]
    fn test_retry_without_failure_is_noop() {
        let (state, _) = InventoryState::new().on_mount();
        let state = state.on_fetch_resolved(1, Ok(page(0, 10, 20)));
        let (state, fetch) = state.on_retry();
        assert_eq!(fetch, None);
        assert_eq!(state.phase(), FetchPhase::Idle);
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let (state, _) = InventoryState::new().on_mount();
        let state = state.on_fetch_resolved(1, Ok(page(0, 10, 30)));
        // duplicate delivery of page 1 while idle
        let state = state.on_fetch_resolved(1, Ok(page(0, 10, 30)));
        assert_eq!(state.catalog().len(), 10);

        let (state, _) = state.on_scroll_near_bottom();
        let state = state.on_fetch_resolved(3, Ok(page(20, 10, 30)));
        assert_eq!(state.catalog().len(), 10);
        assert_eq!(state.phase(), FetchPhase::Loading { page: 2 });
    }

    #[test]
    fn test_filter_reapplied_after_append() {
        let (state, _) = InventoryState::new().on_mount();
        let state = state.on_filter_change(AvailabilityFilter::OutOfStock);
        assert!(state.filtered().is_empty());

        let state = state.on_fetch_resolved(1, Ok(page(0, 10, 20)));
        assert!(state.filtered().iter().all(|b| !b.availability));
        let expected = state.catalog().iter().filter(|b| !b.availability).count();
        assert_eq!(state.filtered().len(), expected);

        let (state, _) = state.on_scroll_near_bottom();
        let state = state.on_fetch_resolved(2, Ok(page(10, 10, 20)));
        let expected = state.catalog().iter().filter(|b| !b.availability).count();
        assert_eq!(state.filtered().len(), expected);
    }

    #[test]
    fn test_summary_uses_updated_catalog() {
        let (state, _) = InventoryState::new().on_mount();
        let state = state.on_fetch_resolved(1, Ok(page(0, 10, 20)));
        assert_eq!(state.summary().total(), 10);
        let (state, _) = state.on_scroll_near_bottom();
        let state = state.on_fetch_resolved(2, Ok(page(10, 10, 20)));
        assert_eq!(state.summary().total(), 20);
        assert_eq!(state.summary().genre_total(), 20);
    }

    #[test]
    fn test_empty_backend_is_exhausted_after_first_page() {
        let (state, _) = InventoryState::new().on_mount();
        let state = state.on_fetch_resolved(1, Ok(page(0, 0, 0)));
        assert!(state.is_exhausted());
        assert_eq!(state.pagination().current_page, 1);
        assert_eq!(state.pagination().total_pages, 1);
        assert_eq!(state.reported_total(), Some(0));
    }

    #[test]
    fn test_filter_change_does_not_touch_catalog() {
        let (state, _) = InventoryState::new().on_mount();
        let state = state.on_fetch_resolved(1, Ok(page(0, 10, 10)));
        let before = state.catalog().to_vec();
        let state = state
            .on_filter_change(AvailabilityFilter::InStock)
            .on_filter_change(AvailabilityFilter::All);
        assert_eq!(state.catalog(), before.as_slice());
        assert_eq!(state.filtered(), before.as_slice());
    }
}
