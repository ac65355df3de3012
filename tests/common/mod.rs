//! Common test utilities for integration tests.
//!
//! Fixtures for catalog records and pages, plus helpers that wire an
//! [`App`] to a [`MockHttpClient`] and drain its message channel.
//!
//! # Example
//!
//! ```ignore
//! let (mut app, mock) = mock_app(&[catalog_page_json(1, 10, 25)]);
//! let mut rx = app.message_rx.take().unwrap();
//! app.mount();
//! deliver_next(&mut app, &mut rx).await;
//! ```

#![allow(dead_code)]

use std::sync::Arc;

use bookstock::adapters::mock::{MockHttpClient, MockResponse};
use bookstock::app::{App, AppMessage};
use bookstock::catalog::CatalogClient;
use bookstock::models::{BookPage, BookRecord};
use bookstock::traits::Response;
use serde_json::json;
use tokio::sync::mpsc::UnboundedReceiver;

/// Base URL used with the mock transport.
pub const MOCK_BASE_URL: &str = "http://catalog.test";

const GENRES: [&str; 4] = ["Fiction", "Sci-Fi", "History", "Poetry"];

/// A record with a deterministic title.
pub fn book(title: &str, genre: &str, availability: bool) -> BookRecord {
    BookRecord {
        title: title.to_string(),
        author: format!("Author of {}", title),
        genre: genre.to_string(),
        price: 10.0,
        availability,
    }
}

/// Record number `n` of a generated catalog. Genres rotate, every third
/// record is out of stock.
pub fn numbered_book(n: usize) -> BookRecord {
    BookRecord {
        title: format!("Book {}", n),
        author: format!("Author {}", n % 7),
        genre: GENRES[n % GENRES.len()].to_string(),
        price: 5.0 + n as f64,
        availability: n % 3 != 0,
    }
}

/// Records for 1-based `page` of a catalog of `total` generated records.
pub fn page_records(page: u32, total: usize) -> Vec<BookRecord> {
    let start = (page.saturating_sub(1) as usize) * 10;
    let end = (start + 10).min(total);
    (start..end).map(numbered_book).collect()
}

/// A [`BookPage`] for `page` of `total` generated records.
pub fn catalog_page(page: u32, total: usize) -> BookPage {
    BookPage {
        book: page_records(page, total),
        total_count: total as u64,
    }
}

/// The JSON body the API would send for `page` of `total` records.
pub fn catalog_page_json(page: u32, total: usize) -> serde_json::Value {
    json!({
        "book": page_records(page, total),
        "totalCount": total,
    })
}

/// URL the client requests for `page`.
pub fn page_url(page: u32) -> String {
    format!("{}/books?page={}&pageSize=10", MOCK_BASE_URL, page)
}

/// Successful mock response with a JSON body.
pub fn ok_json(body: serde_json::Value) -> MockResponse {
    MockResponse::Success(Response::json_body(&body))
}

/// Mock transport serving every page of a `total`-record catalog.
pub fn mock_catalog(total: usize) -> MockHttpClient {
    let mock = MockHttpClient::new();
    let pages = total.div_ceil(10).max(1) as u32;
    for page in 1..=pages {
        mock.set_response(&page_url(page), ok_json(catalog_page_json(page, total)));
    }
    mock
}

/// An [`App`] talking to `mock`.
pub fn app_with(mock: &MockHttpClient) -> App {
    let client = CatalogClient::with_http(MOCK_BASE_URL, Arc::new(mock.clone()));
    App::new(Arc::new(client))
}

/// Take the app's receiver so tests can drive message delivery.
pub fn take_rx(app: &mut App) -> UnboundedReceiver<AppMessage> {
    app.message_rx.take().expect("message receiver already taken")
}

/// Wait for the next fetch result and apply it.
pub async fn deliver_next(app: &mut App, rx: &mut UnboundedReceiver<AppMessage>) {
    let message = tokio::time::timeout(std::time::Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for a page")
        .expect("message channel closed");
    app.handle_message(message);
}
