//! AppMessage enum for async communication within the application.

use crate::error::FetchError;
use crate::models::BookPage;

/// Messages sent from spawned tasks back to the UI loop.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A page request finished, successfully or not.
    PageLoaded {
        page: u32,
        result: Result<BookPage, FetchError>,
    },
}
