//! rss2json API client implementation

use async_trait::async_trait;
use reqwest::Client;
use urlencoding::encode;

use crate::domain::ports::{FeedProxyClient, ProxyFeed};
use crate::error::FeedError;

/// Feed proxy client for `api.rss2json.com` compatible endpoints
pub struct Rss2JsonClient {
    http: Client,
    base_url: String,
}

impl Rss2JsonClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Proxy URL converting the feed at `feed_url`
    fn proxy_url(&self, feed_url: &str) -> String {
        format!("{}?rss_url={}", self.base_url, encode(feed_url))
    }
}

#[async_trait]
impl FeedProxyClient for Rss2JsonClient {
    async fn fetch_feed(&self, feed_url: &str) -> Result<ProxyFeed, FeedError> {
        let url = self.proxy_url(feed_url);
        tracing::debug!("Fetching feed via proxy: {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FeedError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Network(format!(
                "HTTP error! status: {}",
                status.as_u16()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FeedError::Network(e.to_string()))?;

        serde_json::from_str(&body)
            .map_err(|e| FeedError::Upstream(format!("Invalid feed payload: {}", e)))
    }
}
