//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid value that can be customized.

use chrono::{DateTime, Utc};

use crate::config::{Config, DEFAULT_FEED_PROXY_URL, DEFAULT_GITHUB_API_URL};
use crate::domain::entities::{ActivityHandles, ActivityRecord, ActivitySummary, ArticleRecord};
use crate::domain::ports::{ProxyFeed, ProxyItem, RepoSummary, PROXY_STATUS_OK};

/// Configuration pointing at the test handles
pub fn test_config() -> Config {
    Config {
        port: 8080,
        feed_proxy_url: DEFAULT_FEED_PROXY_URL.to_string(),
        github_api_url: DEFAULT_GITHUB_API_URL.to_string(),
        github_token: None,
        medium_handle: "jane.writes".to_string(),
        github_handle: "janedev".to_string(),
        social_handle: "jane_posts".to_string(),
    }
}

/// Handles used across service tests
pub fn test_handles() -> ActivityHandles {
    ActivityHandles {
        repo_handle: "janedev".to_string(),
        article_handle: "jane.writes".to_string(),
        social_handle: "jane_posts".to_string(),
    }
}

/// A successful proxy response carrying `items`
pub fn test_feed(items: Vec<ProxyItem>) -> ProxyFeed {
    ProxyFeed {
        status: PROXY_STATUS_OK.to_string(),
        message: None,
        items,
    }
}

/// A feed item with a short plain body, no thumbnail and no categories
pub fn test_feed_item(title: &str) -> ProxyItem {
    let slug = title.to_lowercase().replace(' ', "-");
    ProxyItem {
        title: title.to_string(),
        pub_date: "2024-06-01 09:30:00".to_string(),
        link: format!("https://medium.com/@jane.writes/{}", slug),
        thumbnail: None,
        description: "<p>Short notes from the week.</p>".to_string(),
        content: String::new(),
        content_snippet: None,
        categories: Vec::new(),
    }
}

/// A normalized article tagged with a single `category`
pub fn test_article(title: &str, category: &str) -> ArticleRecord {
    let slug = title.to_lowercase().replace(' ', "-");
    ArticleRecord {
        title: title.to_string(),
        link: format!("https://medium.com/@jane.writes/{}", slug),
        published_at: "2024-06-01 09:30:00".to_string(),
        snippet: format!("A few thoughts on {}.", title),
        reading_time_label: "3 min read".to_string(),
        tags: vec![category.to_string()],
        category: category.to_string(),
        featured: false,
        thumbnail_url: None,
    }
}

/// A repository last updated at `updated_at`, never pushed
pub fn test_repo(name: &str, updated_at: DateTime<Utc>) -> RepoSummary {
    RepoSummary {
        name: name.to_string(),
        description: Some(format!("The {} project", name)),
        html_url: format!("https://github.com/janedev/{}", name),
        stargazers_count: 0,
        forks_count: 0,
        updated_at,
        pushed_at: None,
        language: Some("Rust".to_string()),
    }
}

fn summary(title: String, link: &str, label: &str) -> ActivitySummary {
    ActivitySummary {
        title,
        description: "Test activity".to_string(),
        timestamp_label: label.to_string(),
        link: link.to_string(),
        occurred_at: None,
    }
}

/// A repo activity titled "Updated {name}" with a fixed label
pub fn test_repo_activity(name: &str, label: &str) -> ActivityRecord {
    ActivityRecord::Repo {
        summary: summary(
            format!("Updated {}", name),
            &format!("https://github.com/janedev/{}", name),
            label,
        ),
        star_count: 0,
        fork_count: 0,
        repo_name: name.to_string(),
    }
}

/// A synthesized post with a fixed label
pub fn test_post_activity(label: &str) -> ActivityRecord {
    ActivityRecord::Post {
        summary: summary(
            "🚀 Just pushed updates to folio".to_string(),
            "https://x.com/jane_posts",
            label,
        ),
        like_count: 0,
        share_count: 0,
    }
}
