//! Inventory summary: counts by availability and by genre.

use std::collections::{BTreeMap, HashMap};

use crate::models::BookRecord;

/// Number of books for one genre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

/// Counts derived from the whole catalog.
///
/// Always rebuilt from scratch by [`summarize`]; never patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventorySummary {
    /// Availability value -> count. Only values that occur are present.
    pub by_availability: BTreeMap<bool, usize>,
    /// Genre -> count, in order of first appearance in the catalog.
    pub by_genre: Vec<GenreCount>,
}

impl InventorySummary {
    /// Create an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of books in stock.
    pub fn in_stock(&self) -> usize {
        self.by_availability.get(&true).copied().unwrap_or(0)
    }

    /// Number of books out of stock.
    pub fn out_of_stock(&self) -> usize {
        self.by_availability.get(&false).copied().unwrap_or(0)
    }

    /// Count for one genre (exact match).
    pub fn genre_count(&self, genre: &str) -> usize {
        self.by_genre
            .iter()
            .find(|g| g.genre == genre)
            .map(|g| g.count)
            .unwrap_or(0)
    }

    /// Total over the availability grouping.
    pub fn total(&self) -> usize {
        self.by_availability.values().sum()
    }

    /// Total over the genre grouping. Equal to [`Self::total`].
    pub fn genre_total(&self) -> usize {
        self.by_genre.iter().map(|g| g.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_availability.is_empty()
    }
}

/// Count the catalog by availability and by genre in one pass.
///
/// Genre keys are the literal strings: `"Fiction"` and `"fiction "` are two
/// different groups.
pub fn summarize(catalog: &[BookRecord]) -> InventorySummary {
    let mut summary = InventorySummary::new();
    let mut genre_index: HashMap<&str, usize> = HashMap::new();

    for book in catalog {
        *summary.by_availability.entry(book.availability).or_insert(0) += 1;

        match genre_index.get(book.genre.as_str()) {
            Some(&idx) => summary.by_genre[idx].count += 1,
            None => {
                genre_index.insert(book.genre.as_str(), summary.by_genre.len());
                summary.by_genre.push(GenreCount {
                    genre: book.genre.clone(),
                    count: 1,
                });
            }
        }
    }

    summary
}
