//! Article entity
//!
//! One published article, normalized from a feed item.

use serde::{Deserialize, Serialize};

/// Tag used when an article has no categories and matches no keyword
pub const DEFAULT_TAG: &str = "Technology";

/// Maximum number of tags kept per article
pub const MAX_TAGS: usize = 4;

/// A normalized article ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub title: String,
    /// Canonical URL; identifies the article within one fetch
    pub link: String,
    /// Publication date exactly as the feed supplied it
    pub published_at: String,
    /// Plain-text preview, never contains markup
    pub snippet: String,
    pub reading_time_label: String,
    /// 1..=MAX_TAGS entries
    pub tags: Vec<String>,
    /// Primary category, always the first tag
    pub category: String,
    /// First two articles of a fetch are featured
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl ArticleRecord {
    /// Case-insensitive category match; "All" matches every article
    pub fn in_category(&self, category: &str) -> bool {
        category.eq_ignore_ascii_case("all") || self.category.eq_ignore_ascii_case(category)
    }
}
