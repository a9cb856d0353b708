//! Feed proxy port trait
//!
//! A third-party bridge that converts a syndication feed into JSON.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer};

use crate::error::FeedError;

/// Status value the proxy uses for a successful conversion
pub const PROXY_STATUS_OK: &str = "ok";

/// Helper to deserialize null as default (empty vec, empty string)
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// Converted feed body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProxyFeed {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub status: String,
    /// Set by the proxy when `status` isn't "ok"
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub items: Vec<ProxyItem>,
}

/// One converted feed entry
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProxyItem {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub title: String,
    #[serde(rename = "pubDate", default, deserialize_with = "deserialize_null_default")]
    pub pub_date: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub link: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Raw HTML body as published
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub content: String,
    #[serde(rename = "contentSnippet", default)]
    pub content_snippet: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub categories: Vec<String>,
}

impl ProxyItem {
    /// Body used for snippets, reading time and keyword scans
    pub fn body(&self) -> &str {
        if self.description.is_empty() {
            &self.content
        } else {
            &self.description
        }
    }
}

/// Port trait for the feed-to-JSON proxy
#[async_trait]
pub trait FeedProxyClient: Send + Sync {
    /// Fetch and convert the feed at `feed_url`.
    ///
    /// Transport failures and non-success statuses are `FeedError::Network`;
    /// a body that isn't valid JSON is `FeedError::Upstream`. The proxy's own
    /// `status` field is returned as-is for the caller to check.
    async fn fetch_feed(&self, feed_url: &str) -> Result<ProxyFeed, FeedError>;
}
