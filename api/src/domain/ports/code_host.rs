//! Code-hosting client port trait
//!
//! Defines the interface for reading public repository activity.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::GitHubError;

/// Public repository summary as listed for a user
#[derive(Debug, Clone, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    pub updated_at: DateTime<Utc>,
    /// Null for repositories that never received a push
    pub pushed_at: Option<DateTime<Utc>>,
    pub language: Option<String>,
}

impl RepoSummary {
    /// Most recent of the last push and the last metadata update
    pub fn last_activity(&self) -> DateTime<Utc> {
        match self.pushed_at {
            Some(pushed) if pushed > self.updated_at => pushed,
            _ => self.updated_at,
        }
    }
}

/// Port trait for code-hosting API operations
#[async_trait]
pub trait CodeHostClient: Send + Sync {
    /// List up to `limit` of a user's public repositories, most recently
    /// updated first
    async fn list_recent_repos(
        &self,
        username: &str,
        limit: u8,
    ) -> Result<Vec<RepoSummary>, GitHubError>;
}
