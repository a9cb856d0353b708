//! Article service
//!
//! Fetches an author's syndication feed through the feed proxy, drops
//! replies and comments, and normalizes each remaining entry into an
//! `ArticleRecord` for the blog section.

use std::sync::Arc;

use crate::app::article_text::{
    calculate_reading_time, extract_categories, extract_snippet, extract_thumbnail,
};
use crate::app::cancel::{until_cancelled, CancelSignal};
use crate::domain::entities::{medium_feed_url, ArticleRecord, DEFAULT_TAG, MAX_TAGS};
use crate::domain::ports::{FeedProxyClient, ProxyItem, PROXY_STATUS_OK};
use crate::error::FeedError;

/// Number of leading articles marked as featured
pub const FEATURED_COUNT: usize = 2;

/// Shown in place of a snippet when an article has no body text
pub const EMPTY_SNIPPET_PLACEHOLDER: &str = "Click to read more...";

/// Category selection that keeps every article
pub const ALL_CATEGORIES: &str = "All";

/// Title phrases marking an entry as a comment/response rather than an article
const RESPONSE_MARKERS: &[&str] = &["responded to", "commented on"];
const REPLY_PREFIX: &str = "re:";

/// Service for fetching and normalizing articles
pub struct ArticleService<FP>
where
    FP: FeedProxyClient,
{
    proxy: Arc<FP>,
}

impl<FP> ArticleService<FP>
where
    FP: FeedProxyClient,
{
    pub fn new(proxy: Arc<FP>) -> Self {
        Self { proxy }
    }

    /// Fetch the articles published by `handle`, newest first as the feed
    /// orders them.
    ///
    /// One request, no retry. An empty feed is `Ok(vec![])`.
    pub async fn fetch_articles(
        &self,
        handle: &str,
        cancel: &CancelSignal,
    ) -> Result<Vec<ArticleRecord>, FeedError> {
        let feed_url = medium_feed_url(handle);
        tracing::info!("Fetching articles for {}", handle);

        let feed = until_cancelled(cancel, self.proxy.fetch_feed(&feed_url)).await?;

        if feed.status != PROXY_STATUS_OK {
            let reason = feed
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| {
                    if feed.status.is_empty() {
                        "Unknown error".to_string()
                    } else {
                        feed.status.clone()
                    }
                });
            tracing::warn!("Feed proxy returned status {:?}: {}", feed.status, reason);
            return Err(FeedError::Upstream(format!("API Error: {}", reason)));
        }

        if feed.items.is_empty() {
            tracing::warn!("No articles found in feed for {}", handle);
            return Ok(Vec::new());
        }

        let articles: Vec<&ProxyItem> = feed
            .items
            .iter()
            .filter(|item| is_original_article(&item.title))
            .collect();

        tracing::info!(
            "Found {} articles after filtering {} feed items",
            articles.len(),
            feed.items.len()
        );

        Ok(normalize_articles(&articles))
    }
}

/// False for replies ("Re: ...") and comment/response notifications
pub fn is_original_article(title: &str) -> bool {
    let title = title.to_lowercase();
    !title.starts_with(REPLY_PREFIX) && !RESPONSE_MARKERS.iter().any(|m| title.contains(m))
}

/// Normalize filtered feed items. Snippet length depends on how many
/// articles the whole set has.
pub fn normalize_articles(items: &[&ProxyItem]) -> Vec<ArticleRecord> {
    let count = items.len();
    items
        .iter()
        .enumerate()
        .map(|(index, item)| normalize_article(item, index, count))
        .collect()
}

fn normalize_article(item: &ProxyItem, index: usize, count: usize) -> ArticleRecord {
    let body = item.body();

    let snippet_source = match item.content_snippet.as_deref() {
        Some(s) if !s.trim().is_empty() => s,
        _ => body,
    };
    let mut snippet = extract_snippet(snippet_source, count);
    if snippet.is_empty() {
        snippet = EMPTY_SNIPPET_PLACEHOLDER.to_string();
    }

    let thumbnail_url = item
        .thumbnail
        .clone()
        .filter(|t| !t.trim().is_empty())
        .or_else(|| extract_thumbnail(&item.description));

    let mut tags = extract_categories(body, &item.title, &item.categories);
    tags.truncate(MAX_TAGS);
    let category = tags
        .first()
        .cloned()
        .unwrap_or_else(|| DEFAULT_TAG.to_string());

    ArticleRecord {
        title: item.title.clone(),
        link: item.link.clone(),
        published_at: item.pub_date.clone(),
        snippet,
        reading_time_label: calculate_reading_time(body),
        tags,
        category,
        featured: index < FEATURED_COUNT,
        thumbnail_url,
    }
}

/// The category a request narrows to, `None` when blank or "All"
pub fn selected_category(category: Option<&str>) -> Option<&str> {
    category
        .map(str::trim)
        .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case(ALL_CATEGORIES))
}

/// Keep only articles in `category`; `None` or "All" keeps everything
pub fn filter_by_category(
    articles: Vec<ArticleRecord>,
    category: Option<&str>,
) -> Vec<ArticleRecord> {
    match selected_category(category) {
        Some(category) => articles
            .into_iter()
            .filter(|a| a.in_category(category))
            .collect(),
        None => articles,
    }
}

/// "All" followed by each distinct primary category, in first-seen order
pub fn available_categories(articles: &[ArticleRecord]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for article in articles {
        if !categories.contains(&article.category) {
            categories.push(article.category.clone());
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::cancel::{cancel_pair, never_cancelled};
    use crate::test_utils::{test_article, test_feed, test_feed_item, MockFeedProxy};
    use tokio_test::{assert_err, assert_ok};

    fn create_service(proxy: MockFeedProxy) -> ArticleService<MockFeedProxy> {
        ArticleService::new(Arc::new(proxy))
    }

    fn plain_words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[tokio::test]
    async fn requests_medium_feed_for_handle() {
        let proxy = MockFeedProxy::new().with_feed(test_feed(vec![]));
        let requested = proxy.requested.clone();
        let service = create_service(proxy);

        assert_ok!(service.fetch_articles("jane.writes", &never_cancelled()).await);

        let requested = requested.read().unwrap();
        assert_eq!(*requested, vec!["https://medium.com/feed/@jane.writes".to_string()]);
    }

    #[tokio::test]
    async fn filters_replies_and_comments() {
        let service = create_service(MockFeedProxy::new().with_feed(test_feed(vec![
            test_feed_item("Re: foo"),
            test_feed_item("I commented on bar"),
            test_feed_item("Real Article"),
            test_feed_item("Someone Responded To my post"),
        ])));

        let articles = service
            .fetch_articles("jane", &never_cancelled())
            .await
            .unwrap();

        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Real Article");
    }

    #[tokio::test]
    async fn empty_feed_is_not_an_error() {
        let service = create_service(MockFeedProxy::new().with_feed(test_feed(vec![])));
        let articles = service
            .fetch_articles("jane", &never_cancelled())
            .await
            .unwrap();
        assert!(articles.is_empty());
    }

    #[tokio::test]
    async fn non_ok_status_is_upstream_error() {
        let mut feed = test_feed(vec![test_feed_item("Real Article")]);
        feed.status = "error".to_string();
        feed.message = Some("Cannot download this RSS feed".to_string());
        let service = create_service(MockFeedProxy::new().with_feed(feed));

        let err = assert_err!(service.fetch_articles("jane", &never_cancelled()).await);
        assert_eq!(
            err,
            FeedError::Upstream("API Error: Cannot download this RSS feed".to_string())
        );
    }

    #[tokio::test]
    async fn network_errors_propagate() {
        let service = create_service(MockFeedProxy::failing());
        let err = assert_err!(service.fetch_articles("jane", &never_cancelled()).await);
        assert!(matches!(err, FeedError::Network(_)));
    }

    #[tokio::test]
    async fn cancelled_fetch_returns_cancelled() {
        let (tx, rx) = cancel_pair();
        tx.send(true).unwrap();
        let service = create_service(MockFeedProxy::new().with_feed(test_feed(vec![])));

        let err = assert_err!(service.fetch_articles("jane", &rx).await);
        assert_eq!(err, FeedError::Cancelled);
    }

    #[tokio::test]
    async fn single_article_scenario() {
        let mut item = test_feed_item("Scaling Android Apps");
        item.description = format!("<p>{}</p>", plain_words(180));
        item.pub_date = "2024-01-01".to_string();
        item.link = "https://x/1".to_string();
        let service = create_service(MockFeedProxy::new().with_feed(test_feed(vec![item])));

        let articles = service
            .fetch_articles("jane", &never_cancelled())
            .await
            .unwrap();

        assert_eq!(articles.len(), 1);
        let article = &articles[0];
        assert_eq!(article.reading_time_label, "1 min read");
        // "android" in the title is a keyword match
        assert_eq!(article.tags, vec!["Android"]);
        assert_eq!(article.category, "Android");
        assert_eq!(article.published_at, "2024-01-01");
        assert_eq!(article.link, "https://x/1");
        assert!(!article.snippet.contains('<'));
        assert!(article.snippet.chars().count() <= 250 + 3);
        assert!(article.featured);
    }

    #[tokio::test]
    async fn fetch_is_idempotent() {
        let service = create_service(MockFeedProxy::new().with_feed(test_feed(vec![
            test_feed_item("First"),
            test_feed_item("Second"),
        ])));

        let first = service
            .fetch_articles("jane", &never_cancelled())
            .await
            .unwrap();
        let second = service
            .fetch_articles("jane", &never_cancelled())
            .await
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn original_article_detection() {
        assert!(is_original_article("Real Article"));
        assert!(is_original_article("Reading list"));
        assert!(!is_original_article("RE: question"));
        assert!(!is_original_article("She responded to you"));
    }

    #[test]
    fn normalize_preserves_order_and_features_first_two() {
        let items = [
            test_feed_item("One"),
            test_feed_item("Two"),
            test_feed_item("Three"),
        ];
        let refs: Vec<&ProxyItem> = items.iter().collect();

        let articles = normalize_articles(&refs);

        let titles: Vec<&str> = articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Two", "Three"]);
        let featured: Vec<bool> = articles.iter().map(|a| a.featured).collect();
        assert_eq!(featured, vec![true, true, false]);
    }

    #[test]
    fn snippet_cap_follows_result_size() {
        let long_body = format!("<p>{}</p>", "z".repeat(500));
        let mut a = test_feed_item("A");
        a.description = long_body.clone();
        let mut b = test_feed_item("B");
        b.description = long_body;

        let one = normalize_articles(&[&a]);
        assert_eq!(one[0].snippet.chars().count(), 253);

        let two = normalize_articles(&[&a, &b]);
        assert_eq!(two[0].snippet.chars().count(), 223);
    }

    #[test]
    fn upstream_fields_take_precedence() {
        let mut item = test_feed_item("Kotlin Flows");
        item.thumbnail = Some("https://cdn/thumb.png".to_string());
        item.description = r#"<img src="https://cdn/inline.png"><p>Body</p>"#.to_string();
        item.content_snippet = Some("Supplied <b>preview</b>".to_string());
        item.categories = vec![
            "kotlin".to_string(),
            "flow".to_string(),
            "coroutines".to_string(),
            "android".to_string(),
            "jvm".to_string(),
        ];

        let article = &normalize_articles(&[&item])[0];

        assert_eq!(article.thumbnail_url.as_deref(), Some("https://cdn/thumb.png"));
        assert_eq!(article.snippet, "Supplied preview");
        assert_eq!(article.tags, vec!["Kotlin", "Flow", "Coroutines", "Android"]);
        assert_eq!(article.category, "Kotlin");
    }

    #[test]
    fn thumbnail_extracted_from_description() {
        let mut item = test_feed_item("Images");
        item.thumbnail = Some(String::new());
        item.description = r#"<figure><img src="https://cdn/inline.png"></figure>"#.to_string();

        let article = &normalize_articles(&[&item])[0];
        assert_eq!(article.thumbnail_url.as_deref(), Some("https://cdn/inline.png"));
    }

    #[test]
    fn empty_body_gets_placeholder_snippet() {
        let mut item = test_feed_item("Empty");
        item.description = String::new();
        item.content = String::new();

        let article = &normalize_articles(&[&item])[0];
        assert_eq!(article.snippet, EMPTY_SNIPPET_PLACEHOLDER);
        assert_eq!(article.reading_time_label, "1 min read");
    }

    #[test]
    fn category_filter() {
        let articles = vec![
            test_article("One", "Kotlin"),
            test_article("Two", "Android"),
            test_article("Three", "Kotlin"),
        ];

        assert_eq!(filter_by_category(articles.clone(), None).len(), 3);
        assert_eq!(filter_by_category(articles.clone(), Some("All")).len(), 3);
        assert_eq!(filter_by_category(articles.clone(), Some("  ")).len(), 3);

        let kotlin = filter_by_category(articles.clone(), Some("kotlin"));
        let titles: Vec<&str> = kotlin.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Three"]);

        assert!(filter_by_category(articles, Some("Rust")).is_empty());
    }

    #[test]
    fn selected_category_ignores_blank_and_all() {
        assert_eq!(selected_category(None), None);
        assert_eq!(selected_category(Some(" ")), None);
        assert_eq!(selected_category(Some("all")), None);
        assert_eq!(selected_category(Some(" Kotlin ")), Some("Kotlin"));
    }

    #[test]
    fn categories_list_all_first_then_distinct() {
        let articles = vec![
            test_article("One", "Kotlin"),
            test_article("Two", "Android"),
            test_article("Three", "Kotlin"),
        ];

        assert_eq!(
            available_categories(&articles),
            vec!["All", "Kotlin", "Android"]
        );
        assert_eq!(available_categories(&[]), vec!["All"]);
    }
}
