//! Availability filter over the catalog.

use crate::models::BookRecord;

/// Which books the table shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvailabilityFilter {
    /// Show every book
    #[default]
    All,
    /// Only books with `availability == true`
    InStock,
    /// Only books with `availability == false`
    OutOfStock,
}

impl AvailabilityFilter {
    /// All options, in selector order.
    pub const ALL: [AvailabilityFilter; 3] = [
        AvailabilityFilter::All,
        AvailabilityFilter::InStock,
        AvailabilityFilter::OutOfStock,
    ];

    /// Check if a book passes this filter
    pub fn matches(&self, book: &BookRecord) -> bool {
        match self {
            AvailabilityFilter::All => true,
            AvailabilityFilter::InStock => book.availability,
            AvailabilityFilter::OutOfStock => !book.availability,
        }
    }

    /// The literal option label
    pub fn display_name(&self) -> &'static str {
        match self {
            AvailabilityFilter::All => "All",
            AvailabilityFilter::InStock => "In Stock",
            AvailabilityFilter::OutOfStock => "Out of Stock",
        }
    }

    /// Cycle to the next option
    pub fn next(&self) -> Self {
        match self {
            AvailabilityFilter::All => AvailabilityFilter::InStock,
            AvailabilityFilter::InStock => AvailabilityFilter::OutOfStock,
            AvailabilityFilter::OutOfStock => AvailabilityFilter::All,
        }
    }

    /// Cycle to the previous option
    pub fn prev(&self) -> Self {
        match self {
            AvailabilityFilter::All => AvailabilityFilter::OutOfStock,
            AvailabilityFilter::InStock => AvailabilityFilter::All,
            AvailabilityFilter::OutOfStock => AvailabilityFilter::InStock,
        }
    }
}

/// Order-preserving subsequence of `catalog` that passes `filter`.
///
/// Always evaluated over the whole catalog, never over a single page.
pub fn apply_filter(catalog: &[BookRecord], filter: AvailabilityFilter) -> Vec<BookRecord> {
    catalog
        .iter()
        .filter(|book| filter.matches(book))
        .cloned()
        .collect()
}
