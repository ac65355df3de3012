//! Catalog core: fetching pages, summarizing, filtering and the pagination
//! state machine.
//!
//! - [`client`] - the Fetcher, one HTTP GET per page
//! - [`summary`] - the Aggregator, counts by availability and by genre
//! - [`filter`] - the availability filter projection
//! - [`pagination`] - page bookkeeping and fetch phases
//! - [`state`] - the snapshot tying it all together

pub mod client;
pub mod filter;
pub mod pagination;
pub mod state;
pub mod summary;

pub use client::{CatalogClient, PAGE_SIZE};
pub use filter::{apply_filter, AvailabilityFilter};
pub use pagination::{total_pages_for, FetchPhase, PaginationState};
pub use state::InventoryState;
pub use summary::{summarize, GenreCount, InventorySummary};
