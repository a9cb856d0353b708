//! HTTP client for the Folio API
//!
//! Requests sections as rendered text; the API does the formatting.

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

/// Default API location when FOLIO_API_URL is unset
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// HTTP client for communicating with the Folio API
#[derive(Clone)]
pub struct FolioClient {
    client: reqwest::Client,
    base_url: String,
}

impl FolioClient {
    /// Create a new client from environment variables
    ///
    /// Optional env vars:
    /// - FOLIO_API_URL: Base URL of the API (default http://localhost:8080)
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("FOLIO_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::new(&base_url)
    }

    /// Create a new client with explicit configuration
    pub fn new(base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("text/plain"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the blog section, optionally narrowed to one category
    pub async fn get_blog(&self, category: Option<&str>) -> Result<String> {
        let query: Vec<(&str, &str)> = category
            .filter(|c| !c.trim().is_empty())
            .map(|c| vec![("category", c)])
            .unwrap_or_default();

        self.get_text("/blog", &query).await
    }

    /// Get the recent-activity section
    pub async fn get_activity(&self) -> Result<String> {
        self.get_text("/activity", &[]).await
    }

    // --- Internal helpers ---

    async fn get_text(&self, path: &str, query: &[(&str, &str)]) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .with_context(|| format!("Failed to GET {}", path))?;

        handle_text_response(response).await
    }
}

/// Unavailable sections still carry a readable body; keep it in the error
async fn handle_text_response(response: reqwest::Response) -> Result<String> {
    let status = response.status();
    let body = response
        .text()
        .await
        .context("Failed to read response body")?;

    if !status.is_success() {
        anyhow::bail!("API error ({}): {}", status, body);
    }

    Ok(body)
}
