use std::env;

use crate::domain::entities::{github_profile_url, medium_profile_url, ActivityHandles};

pub const DEFAULT_FEED_PROXY_URL: &str = "https://api.rss2json.com/v1/api.json";
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    /// RSS-to-JSON bridge endpoint
    pub feed_proxy_url: String,
    pub github_api_url: String,
    /// Optional GitHub token for higher rate limits
    pub github_token: Option<String>,
    pub medium_handle: String,
    pub github_handle: String,
    pub social_handle: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            feed_proxy_url: env::var("FEED_PROXY_URL")
                .unwrap_or_else(|_| DEFAULT_FEED_PROXY_URL.to_string()),
            github_api_url: env::var("GITHUB_API_URL")
                .unwrap_or_else(|_| DEFAULT_GITHUB_API_URL.to_string()),
            github_token: env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty()),
            medium_handle: env::var("MEDIUM_HANDLE")
                .unwrap_or_else(|_| "harsh.chetan20".to_string()),
            github_handle: env::var("GITHUB_HANDLE")
                .unwrap_or_else(|_| "Harshjain2094".to_string()),
            social_handle: env::var("SOCIAL_HANDLE")
                .unwrap_or_else(|_| "Chetan20Harsh".to_string()),
        }
    }

    /// Handles passed to the activity aggregator
    pub fn activity_handles(&self) -> ActivityHandles {
        ActivityHandles {
            repo_handle: self.github_handle.clone(),
            article_handle: self.medium_handle.clone(),
            social_handle: self.social_handle.clone(),
        }
    }

    /// Fallback link shown when the blog section can't be loaded
    pub fn blog_profile_url(&self) -> String {
        medium_profile_url(&self.medium_handle)
    }

    /// Fallback link shown when the activity section can't be loaded
    pub fn activity_profile_url(&self) -> String {
        github_profile_url(&self.github_handle)
    }
}
