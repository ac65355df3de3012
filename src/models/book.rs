//! Book records and the paginated listing payload.

use serde::{Deserialize, Serialize};

/// One book as returned by the catalog API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,
    pub author: String,
    /// Categorical; grouped by exact string.
    pub genre: String,
    pub price: f64,
    /// `true` means in stock.
    pub availability: bool,
}

impl BookRecord {
    /// Label used in the table's availability column.
    pub fn availability_label(&self) -> &'static str {
        availability_label(self.availability)
    }

    /// Price formatted with two decimals.
    pub fn price_label(&self) -> String {
        format!("{:.2}", self.price)
    }
}

/// "In Stock" / "Out of Stock".
pub fn availability_label(available: bool) -> &'static str {
    if available {
        "In Stock"
    } else {
        "Out of Stock"
    }
}

/// Body of `GET /books?page=n&pageSize=10`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookPage {
    /// Records on this page (the API names the field `book`).
    pub book: Vec<BookRecord>,
    /// Total number of records across all pages.
    #[serde(rename = "totalCount")]
    pub total_count: u64,
}
