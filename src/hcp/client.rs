//! TFE HTTP client for API interactions

use futures::stream::{self, StreamExt};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::traits::PaginatedResponse;

/// TFE API client
///
/// Holds the bearer token and a pooled HTTP transport. It carries no
/// per-organization state, so a single instance is shared by reference across
/// every concurrent worker.
pub struct TfeClient {
    client: Client,
    token: String,
    base_url: String,
}

impl TfeClient {
    /// Create a new TFE client with optimized connection settings
    ///
    /// `tfe_url` is the instance root (e.g. `https://tfe.example.com`); the
    /// API v2 prefix is appended here.
    pub fn new(token: String, tfe_url: &str) -> Self {
        let client = Client::builder()
            // Connection pool settings - reuse connections
            .pool_max_idle_per_host(20)
            .pool_idle_timeout(Duration::from_secs(90))
            // TCP keepalive to maintain connections
            .tcp_keepalive(Duration::from_secs(60))
            // Timeouts
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            base_url: format!("{}{}", tfe_url.trim_end_matches('/'), api::BASE_PATH),
        }
    }

    /// Create a client with an exact base URL (for testing with mock servers)
    #[cfg(test)]
    pub fn with_base_url(token: String, base_url: String) -> Self {
        let client = Client::builder().build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            base_url,
        }
    }

    /// Base URL for API requests, without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", api::CONTENT_TYPE)
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Parse an API response, returning error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(TfeError::Api {
                status: response.status().as_u16(),
                message: format!("Failed to fetch {}", error_context),
            });
        }
        Ok(response.json().await?)
    }

    /// Fetch all pages from a paginated API endpoint with parallel fetching
    ///
    /// Fetches page 1 first to learn `total-pages`, then fetches the
    /// remaining pages in parallel (with concurrency limit) and reassembles
    /// them in page order.
    ///
    /// # Arguments
    /// * `path` - API path (e.g., "/organizations" or with query "...?q=foo")
    /// * `error_context` - Context for error messages (e.g., "organizations")
    pub async fn fetch_all_pages<T, R>(&self, path: &str, error_context: &str) -> Result<Vec<T>>
    where
        T: Send,
        R: DeserializeOwned + PaginatedResponse<T> + Send,
    {
        let separator = if path.contains('?') { "&" } else { "?" };

        let first_page_url = format!(
            "{}{}{}page[size]={}&page[number]=1",
            self.base_url(),
            path,
            separator,
            api::DEFAULT_PAGE_SIZE,
        );

        debug!("Fetching page 1 from: {}", first_page_url);

        let response = self.get(&first_page_url).send().await?;

        let first_resp: R = self.parse_api_response(response, error_context).await?;
        let meta = first_resp.meta().cloned();
        let mut all_items = first_resp.into_data();

        let (total_pages, total_count) = match meta.and_then(|m| m.pagination) {
            Some(p) => (p.total_pages, p.total_count),
            None => return Ok(all_items), // No pagination info = single page
        };

        debug!("Page 1/{}, total items: {}", total_pages, total_count);

        if total_pages <= 1 {
            return Ok(all_items);
        }

        let remaining_pages: Vec<u32> = (2..=total_pages).collect();

        debug!(
            "Fetching {} remaining pages in parallel (max {} concurrent)",
            remaining_pages.len(),
            api::MAX_CONCURRENT_PAGE_REQUESTS
        );

        let page_futures = remaining_pages.into_iter().map(|page_num| {
            let url = format!(
                "{}{}{}page[size]={}&page[number]={}",
                self.base_url(),
                path,
                separator,
                api::DEFAULT_PAGE_SIZE,
                page_num
            );
            self.fetch_single_page::<T, R>(url, page_num, error_context)
        });

        let results: Vec<Result<(u32, Vec<T>)>> = stream::iter(page_futures)
            .buffer_unordered(api::MAX_CONCURRENT_PAGE_REQUESTS)
            .collect()
            .await;

        let mut page_results: Vec<(u32, Vec<T>)> = Vec::with_capacity(results.len());
        for result in results {
            page_results.push(result?);
        }

        // Completion order is arbitrary; restore page order
        page_results.sort_by_key(|(page_num, _)| *page_num);

        for (_, items) in page_results {
            all_items.extend(items);
        }

        debug!(
            "Fetched {} total items for {}",
            all_items.len(),
            error_context
        );
        Ok(all_items)
    }

    /// Fetch a single page (helper for parallel pagination)
    async fn fetch_single_page<T, R>(
        &self,
        url: String,
        page_num: u32,
        error_context: &str,
    ) -> Result<(u32, Vec<T>)>
    where
        R: DeserializeOwned + PaginatedResponse<T>,
    {
        debug!("Fetching page {} from: {}", page_num, url);

        let response = self.get(&url).send().await?;

        let page_context = format!("{} (page {})", error_context, page_num);
        let resp: R = self.parse_api_response(response, &page_context).await?;
        let items = resp.into_data();

        debug!("Page {} returned {} items", page_num, items.len());
        Ok((page_num, items))
    }
}

#[cfg(test)]
impl TfeClient {
    /// Create a test client with mock base URL
    pub fn test_client(base_url: &str) -> Self {
        Self::with_base_url("test-token".to_string(), base_url.to_string())
    }
}
