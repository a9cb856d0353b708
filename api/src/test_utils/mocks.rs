//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing. They
//! record every request so tests can verify what was asked for.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::ports::{CodeHostClient, FeedProxyClient, ProxyFeed, RepoSummary};
use crate::error::{FeedError, GitHubError};

// ============================================================================
// Mock Feed Proxy
// ============================================================================

#[derive(Default)]
pub struct MockFeedProxy {
    /// Feed URLs passed to `fetch_feed`, in call order
    pub requested: Arc<RwLock<Vec<String>>>,
    pub should_fail: Arc<RwLock<bool>>,
    feed: Arc<RwLock<ProxyFeed>>,
}

impl MockFeedProxy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: Arc::new(RwLock::new(true)),
            ..Self::default()
        }
    }

    /// Configure the feed returned for every request
    pub fn with_feed(self, feed: ProxyFeed) -> Self {
        *self.feed.write().unwrap() = feed;
        self
    }
}

#[async_trait]
impl FeedProxyClient for MockFeedProxy {
    async fn fetch_feed(&self, feed_url: &str) -> Result<ProxyFeed, FeedError> {
        self.requested.write().unwrap().push(feed_url.to_string());

        if *self.should_fail.read().unwrap() {
            return Err(FeedError::Network("Mock failure".to_string()));
        }

        Ok(self.feed.read().unwrap().clone())
    }
}

// ============================================================================
// Mock Code Host
// ============================================================================

#[derive(Default)]
pub struct MockCodeHost {
    /// `(username, limit)` pairs passed to `list_recent_repos`
    pub requested: Arc<RwLock<Vec<(String, u8)>>>,
    pub should_fail: Arc<RwLock<bool>>,
    repos: Arc<RwLock<Vec<RepoSummary>>>,
}

impl MockCodeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: Arc::new(RwLock::new(true)),
            ..Self::default()
        }
    }

    /// Configure the repositories listed for every user
    pub fn with_repos(self, repos: Vec<RepoSummary>) -> Self {
        *self.repos.write().unwrap() = repos;
        self
    }
}

#[async_trait]
impl CodeHostClient for MockCodeHost {
    async fn list_recent_repos(
        &self,
        username: &str,
        limit: u8,
    ) -> Result<Vec<RepoSummary>, GitHubError> {
        self.requested
            .write()
            .unwrap()
            .push((username.to_string(), limit));

        if *self.should_fail.read().unwrap() {
            return Err(GitHubError::Api {
                status: 500,
                message: "Mock failure".to_string(),
            });
        }

        let repos = self.repos.read().unwrap();
        Ok(repos.iter().take(limit as usize).cloned().collect())
    }
}
