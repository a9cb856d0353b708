//! GitHub API client implementation

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::Client;
use serde::Deserialize;
use urlencoding::encode;

use crate::domain::ports::{CodeHostClient, RepoSummary};
use crate::error::GitHubError;

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Implementation of the GitHub API client
pub struct GitHubClientImpl {
    http: Client,
    base_url: String,
    /// Bearer token; unauthenticated access when absent
    token: Option<String>,
}

impl GitHubClientImpl {
    pub fn new(base_url: String, token: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let request = self
            .http
            .get(url)
            .header(ACCEPT, GITHUB_ACCEPT)
            .header(USER_AGENT, concat!("folio-api/", env!("CARGO_PKG_VERSION")));

        match &self.token {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => request,
        }
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, GitHubError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| GitHubError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 {
            Err(GitHubError::Unauthorized)
        } else if status.as_u16() == 429 || is_rate_limit_exhausted(&response) {
            Err(GitHubError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(GitHubError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// GitHub answers 403 with `x-ratelimit-remaining: 0` once the quota is spent
fn is_rate_limit_exhausted(response: &reqwest::Response) -> bool {
    response.status().as_u16() == 403
        && response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .map(|v| v == "0")
            .unwrap_or(false)
}

#[async_trait]
impl CodeHostClient for GitHubClientImpl {
    async fn list_recent_repos(
        &self,
        username: &str,
        limit: u8,
    ) -> Result<Vec<RepoSummary>, GitHubError> {
        let url = self.api_url(&format!(
            "/users/{}/repos?sort=updated&per_page={}",
            encode(username),
            limit
        ));

        let response = self.get(&url).send().await?;
        self.handle_response(response).await
    }
}
