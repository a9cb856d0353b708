//! Activity entity
//!
//! A recent-activity entry for the social section. One variant per source
//! platform; synthesized posts are their own variant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Handles addressing the author on each platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityHandles {
    /// Code-hosting username (GitHub)
    pub repo_handle: String,
    /// Publishing-platform username (Medium)
    pub article_handle: String,
    /// Social-network username, used for synthesized post links
    pub social_handle: String,
}

/// Fields shared by every activity variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivitySummary {
    pub title: String,
    pub description: String,
    /// Coarse relative-time phrase ("3 days ago"), not a timestamp
    pub timestamp_label: String,
    pub link: String,
    /// Instant the label was derived from, when it was known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurred_at: Option<DateTime<Utc>>,
}

/// A recent activity entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "platform", rename_all = "snake_case")]
pub enum ActivityRecord {
    /// A recently updated repository
    Repo {
        #[serde(flatten)]
        summary: ActivitySummary,
        star_count: u64,
        fork_count: u64,
        repo_name: String,
    },
    /// A published article. Engagement metrics aren't exposed by the feed,
    /// so both counts stay zero.
    Article {
        #[serde(flatten)]
        summary: ActivitySummary,
        clap_count: u64,
        response_count: u64,
    },
    /// A post synthesized from repo or article activity
    Post {
        #[serde(flatten)]
        summary: ActivitySummary,
        like_count: u64,
        share_count: u64,
    },
}

impl ActivityRecord {
    pub fn summary(&self) -> &ActivitySummary {
        match self {
            ActivityRecord::Repo { summary, .. }
            | ActivityRecord::Article { summary, .. }
            | ActivityRecord::Post { summary, .. } => summary,
        }
    }

    pub fn title(&self) -> &str {
        &self.summary().title
    }

    pub fn timestamp_label(&self) -> &str {
        &self.summary().timestamp_label
    }

    /// Platform name used in rendered output
    pub fn platform(&self) -> &'static str {
        match self {
            ActivityRecord::Repo { .. } => "github",
            ActivityRecord::Article { .. } => "medium",
            ActivityRecord::Post { .. } => "x",
        }
    }
}
