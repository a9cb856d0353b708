//! Activity service
//!
//! Builds the "recent activity" list for the social section: recently
//! updated repositories, the latest articles, and a synthesized post
//! summarizing each, merged and ordered by approximate recency.
//!
//! The repository fetch and the article fetch run concurrently and fail
//! independently; a failing source contributes nothing.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::app::article_service::ArticleService;
use crate::app::cancel::{until_cancelled, CancelSignal};
use crate::app::recency::{label_for, relative_time_label, sort_by_recency};
use crate::domain::entities::{
    social_profile_url, ActivityHandles, ActivityRecord, ActivitySummary, ArticleRecord,
};
use crate::domain::ports::{CodeHostClient, FeedProxyClient, RepoSummary};
use crate::error::FeedError;

/// Repositories requested from the code host
pub const REPO_FETCH_LIMIT: u8 = 5;

/// Articles turned into activity records
pub const ARTICLE_ACTIVITY_LIMIT: usize = 2;

/// Per-source caps applied when merging, in precedence order
pub const MERGED_REPO_LIMIT: usize = 2;
pub const MERGED_ARTICLE_LIMIT: usize = 1;
pub const MERGED_POST_LIMIT: usize = 1;

/// Maximum number of records returned
pub const MAX_ACTIVITIES: usize = 4;

/// Service aggregating activity across platforms
pub struct ActivityService<CH, FP>
where
    CH: CodeHostClient,
    FP: FeedProxyClient,
{
    code_host: Arc<CH>,
    articles: Arc<ArticleService<FP>>,
}

impl<CH, FP> ActivityService<CH, FP>
where
    CH: CodeHostClient,
    FP: FeedProxyClient,
{
    pub fn new(code_host: Arc<CH>, articles: Arc<ArticleService<FP>>) -> Self {
        Self {
            code_host,
            articles,
        }
    }

    /// Fetch and merge recent activity for `handles`.
    ///
    /// Sub-fetch failures are logged and contribute an empty list; only
    /// cancellation is returned as an error.
    pub async fn fetch_all_activity(
        &self,
        handles: &ActivityHandles,
        cancel: &CancelSignal,
    ) -> Result<Vec<ActivityRecord>, FeedError> {
        tracing::info!("Fetching all activity");

        let (repos, articles) = tokio::join!(
            self.fetch_repos(&handles.repo_handle, cancel),
            self.articles.fetch_articles(&handles.article_handle, cancel),
        );

        let repos = isolate("repository", repos)?;
        let articles = isolate("article", articles)?;

        let activities = build_activity(
            &repos,
            &articles,
            &social_profile_url(&handles.social_handle),
            Utc::now(),
        );

        tracing::info!(
            "Fetched {} activities from {} repos and {} articles",
            activities.len(),
            repos.len(),
            articles.len()
        );

        Ok(activities)
    }

    async fn fetch_repos(
        &self,
        username: &str,
        cancel: &CancelSignal,
    ) -> Result<Vec<RepoSummary>, FeedError> {
        tracing::debug!("Fetching repositories for {}", username);
        until_cancelled(cancel, async {
            self.code_host
                .list_recent_repos(username, REPO_FETCH_LIMIT)
                .await
                .map_err(FeedError::from)
        })
        .await
    }
}

/// Swallow a sub-fetch failure into an empty list, except cancellation
fn isolate<T>(source: &str, result: Result<Vec<T>, FeedError>) -> Result<Vec<T>, FeedError> {
    match result {
        Ok(items) => Ok(items),
        Err(FeedError::Cancelled) => Err(FeedError::Cancelled),
        Err(e) => {
            tracing::warn!("Error fetching {} activity: {}", source, e);
            Ok(Vec::new())
        }
    }
}

/// Merge repos and articles into at most [`MAX_ACTIVITIES`] records.
///
/// Takes up to two repo records, one article record and one synthesized
/// post (in that order), then sorts by recency.
pub fn build_activity(
    repos: &[RepoSummary],
    articles: &[ArticleRecord],
    social_profile: &str,
    now: DateTime<Utc>,
) -> Vec<ActivityRecord> {
    let repo_records: Vec<ActivityRecord> =
        repos.iter().map(|repo| repo_activity(repo, now)).collect();

    let article_records: Vec<ActivityRecord> = articles
        .iter()
        .take(ARTICLE_ACTIVITY_LIMIT)
        .map(|article| article_activity(article, now))
        .collect();

    let posts = synthesize_posts(&repo_records, articles, &article_records, social_profile);

    let mut merged: Vec<ActivityRecord> = repo_records
        .into_iter()
        .take(MERGED_REPO_LIMIT)
        .chain(article_records.into_iter().take(MERGED_ARTICLE_LIMIT))
        .chain(posts.into_iter().take(MERGED_POST_LIMIT))
        .collect();

    sort_by_recency(&mut merged);
    merged.truncate(MAX_ACTIVITIES);
    merged
}

/// Repository update record
pub fn repo_activity(repo: &RepoSummary, now: DateTime<Utc>) -> ActivityRecord {
    let occurred_at = repo.last_activity();

    ActivityRecord::Repo {
        summary: ActivitySummary {
            title: format!("Updated {}", repo.name),
            description: repo_description(repo),
            timestamp_label: relative_time_label(occurred_at, now),
            link: repo.html_url.clone(),
            occurred_at: Some(occurred_at),
        },
        star_count: repo.stargazers_count,
        fork_count: repo.forks_count,
        repo_name: repo.name.clone(),
    }
}

fn repo_description(repo: &RepoSummary) -> String {
    match repo.description.as_deref().map(str::trim) {
        Some(description) if !description.is_empty() => description.to_string(),
        _ => match repo.language.as_deref().filter(|l| !l.is_empty()) {
            Some(language) => format!(
                "Recent work on {} repository. Built with {}.",
                repo.name, language
            ),
            None => format!("Recent work on {} repository.", repo.name),
        },
    }
}

/// Published article record. Claps and responses aren't available from
/// the feed, so both stay zero.
pub fn article_activity(article: &ArticleRecord, now: DateTime<Utc>) -> ActivityRecord {
    let (timestamp_label, occurred_at) = label_for(&article.published_at, now);

    ActivityRecord::Article {
        summary: ActivitySummary {
            title: article.title.clone(),
            description: article.snippet.clone(),
            timestamp_label,
            link: article.link.clone(),
            occurred_at,
        },
        clap_count: 0,
        response_count: 0,
    }
}

/// Posts announcing the newest repo update and the newest article. Each
/// reuses the timing of the record it summarizes and links to the social
/// profile.
pub fn synthesize_posts(
    repo_records: &[ActivityRecord],
    articles: &[ArticleRecord],
    article_records: &[ActivityRecord],
    social_profile: &str,
) -> Vec<ActivityRecord> {
    let mut posts = Vec::with_capacity(2);

    if let Some(ActivityRecord::Repo {
        summary, repo_name, ..
    }) = repo_records.first()
    {
        let focus = if repo_name.to_lowercase().contains("android") {
            "Android"
        } else {
            "tech"
        };
        posts.push(post(
            format!("🚀 Just pushed updates to {}", repo_name),
            format!(
                "Working on some exciting {} features. Check out the latest commits and improvements!",
                focus
            ),
            summary,
            social_profile,
        ));
    }

    if let (Some(article), Some(record)) = (articles.first(), article_records.first()) {
        posts.push(post(
            format!("📝 New blog post: {}", article.title),
            format!(
                "Just published a new article on {}. Thread with key insights below 🧵",
                article.category
            ),
            record.summary(),
            social_profile,
        ));
    }

    posts
}

fn post(
    title: String,
    description: String,
    source: &ActivitySummary,
    social_profile: &str,
) -> ActivityRecord {
    ActivityRecord::Post {
        summary: ActivitySummary {
            title,
            description,
            timestamp_label: source.timestamp_label.clone(),
            link: social_profile.to_string(),
            occurred_at: source.occurred_at,
        },
        like_count: 0,
        share_count: 0,
    }
}
