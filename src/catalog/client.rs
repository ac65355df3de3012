//! Catalog API client.
//!
//! Issues `GET {base_url}/books?page={n}&pageSize=10` and turns the answer
//! into a [`BookPage`] or a [`FetchError`]. The client never touches the
//! accumulated catalog; appending is the state machine's job.

use std::sync::Arc;

use crate::adapters::ReqwestHttpClient;
use crate::error::{FetchError, FetchResult};
use crate::models::BookPage;
use crate::traits::{Headers, HttpClient};

/// Fixed number of records per page.
pub const PAGE_SIZE: u32 = 10;

/// Client for the paginated books listing.
pub struct CatalogClient {
    /// Base URL without a trailing slash
    base_url: String,
    /// HTTP transport (reqwest in production, mock in tests)
    http: Arc<dyn HttpClient>,
}

impl CatalogClient {
    /// Create a client backed by reqwest.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(base_url, Arc::new(ReqwestHttpClient::new()))
    }

    /// Create a client with an injected HTTP transport.
    pub fn with_http(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the listing endpoint for `page`.
    pub fn page_url(&self, page: u32) -> String {
        format!(
            "{}/books?page={}&pageSize={}",
            self.base_url, page, PAGE_SIZE
        )
    }

    /// Load one page of records.
    ///
    /// `page` is 1-based. Pages below 1 are clamped to 1.
    pub async fn load_page(&self, page: u32) -> FetchResult<BookPage> {
        let page = page.max(1);
        let url = self.page_url(page);

        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        tracing::debug!(page, url = %url, "requesting catalog page");

        let response = self
            .http
            .get(&url, &headers)
            .await
            .map_err(|e| FetchError::network(&url, &e))?;

        if !response.is_success() {
            return Err(FetchError::HttpStatus {
                url,
                status: response.status,
                message: response.text_lossy(),
            });
        }

        response
            .json::<BookPage>()
            .map_err(|e| FetchError::MalformedPayload {
                url,
                message: e.to_string(),
            })
    }
}

impl std::fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
