//! Article text helpers
//!
//! Pure transformations over a feed item's raw HTML body: snippet extraction,
//! thumbnail lookup, reading-time estimate and keyword-based tagging. None of
//! these touch the network, so each can be used and tested on its own.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::entities::DEFAULT_TAG;

/// Reading speed behind the reading-time estimate
pub const WORDS_PER_MINUTE: usize = 200;

/// Keywords scanned for when the feed supplies no categories, in priority order
pub const TECH_KEYWORDS: &[&str] = &[
    "android",
    "kotlin",
    "java",
    "jetpack compose",
    "architecture",
    "mvvm",
    "clean code",
    "performance",
    "testing",
    "ui/ux",
    "backend",
    "api",
    "database",
    "security",
    "mobile",
    "ai",
    "refactoring",
    "clean-code",
];

const ELLIPSIS: &str = "...";

fn html_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"))
}

fn html_entity() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"&[^;]+;").expect("valid entity pattern"))
}

fn img_src() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"<img[^>]*src="([^"]*)"[^>]*>"#).expect("valid img pattern"))
}

/// Strip tags and `&...;` entities, then drop any stray angle brackets left
/// by unterminated tags.
pub fn strip_html(content: &str) -> String {
    let without_tags = html_tag().replace_all(content, "");
    let without_entities = html_entity().replace_all(&without_tags, "");
    without_entities
        .replace(['<', '>'], "")
        .trim()
        .to_string()
}

/// Snippet length cap for a result set of `article_count` articles.
/// Fewer articles get more room each.
pub fn snippet_cap(article_count: usize) -> usize {
    match article_count {
        1 => 250,
        2 => 220,
        _ => 200,
    }
}

/// Plain-text preview of `content`, capped by [`snippet_cap`] and suffixed
/// with `...` when truncated.
pub fn extract_snippet(content: &str, article_count: usize) -> String {
    if content.is_empty() {
        return String::new();
    }

    let text = strip_html(content);
    let cap = snippet_cap(article_count);

    if text.chars().count() > cap {
        let mut snippet: String = text.chars().take(cap).collect();
        snippet.push_str(ELLIPSIS);
        snippet
    } else {
        text
    }
}

/// `src` of the first `<img>` in `content`
pub fn extract_thumbnail(content: &str) -> Option<String> {
    img_src()
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .filter(|src| !src.is_empty())
}

/// "N min read" at [`WORDS_PER_MINUTE`], never less than one minute
pub fn calculate_reading_time(content: &str) -> String {
    let text = html_tag().replace_all(content, "");
    let words = text.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);

    format!("{} min read", minutes)
}

/// Category tags for an article.
///
/// Non-blank `existing` categories win and are capitalized as given.
/// Otherwise `content` and `title` are scanned for [`TECH_KEYWORDS`]; matches
/// are capitalized and de-duplicated in keyword order. Falls back to
/// `[DEFAULT_TAG]`.
pub fn extract_categories(content: &str, title: &str, existing: &[String]) -> Vec<String> {
    let supplied: Vec<String> = existing
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .map(capitalize)
        .collect();
    if !supplied.is_empty() {
        return supplied;
    }

    let haystack = format!("{} {}", content, title).to_lowercase();
    let mut found: Vec<String> = Vec::new();

    for keyword in TECH_KEYWORDS {
        if haystack.contains(keyword) {
            let category = capitalize(keyword);
            if !found.contains(&category) {
                found.push(category);
            }
        }
    }

    if found.is_empty() {
        found.push(DEFAULT_TAG.to_string());
    }

    found
}

/// Upper-case the first character, leave the rest untouched
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
