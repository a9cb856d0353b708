//! Section renderer
//!
//! Renders the blog and activity sections to LLM-readable markdown.

use crate::app::selected_category;
use crate::domain::entities::{ActivityRecord, ArticleRecord};
use crate::feed::{BlogSection, SectionView};

/// Render the blog section
pub fn render_blog(section: &BlogSection, category: Option<&str>) -> String {
    let mut buf = String::new();
    let category = selected_category(category);

    buf.push_str("# Blog\n\n");

    if section.categories.len() > 1 {
        buf.push_str(&format!("Categories: {}\n", section.categories.join(" | ")));
    }
    if let Some(category) = category {
        buf.push_str(&format!("Category: {}\n", category));
    }
    if section.categories.len() > 1 || category.is_some() {
        buf.push('\n');
    }

    match &section.view {
        SectionView::Ready { items } => {
            for article in items {
                buf.push_str(&render_article(article));
                buf.push('\n');
            }
        }
        SectionView::Empty { profile_url } => {
            if category.is_some() {
                buf.push_str("_No articles found for the selected category._\n\n");
            } else {
                buf.push_str("_No articles published yet._\n\n");
            }
            buf.push_str(&format!("Follow along at {}\n", profile_url));
        }
        SectionView::Unavailable {
            message,
            profile_url,
        } => {
            buf.push_str(&format!(
                "[UNAVAILABLE] Articles could not be loaded: {}\n\n",
                message
            ));
            buf.push_str(&format!("Read them directly at {}\n", profile_url));
        }
    }

    buf
}

fn render_article(article: &ArticleRecord) -> String {
    let mut buf = String::new();

    let marker = if article.featured { " [FEATURED]" } else { "" };
    buf.push_str(&format!("## {}{}\n", article.title, marker));
    buf.push_str(&format!(
        "{} | {} | Tags: {}\n\n",
        article.published_at,
        article.reading_time_label,
        article.tags.join(", ")
    ));
    buf.push_str(&format!("{}\n\n", article.snippet));
    buf.push_str(&format!("Read: {}\n", article.link));

    buf
}

/// Render the recent-activity section
pub fn render_activity(view: &SectionView<ActivityRecord>) -> String {
    let mut buf = String::new();

    buf.push_str("# Recent Activity\n\n");

    match view {
        SectionView::Ready { items } => {
            for activity in items {
                buf.push_str(&render_activity_item(activity));
                buf.push('\n');
            }
        }
        SectionView::Empty { profile_url } => {
            buf.push_str("_No recent activity._\n\n");
            buf.push_str(&format!("Check back later or visit {}\n", profile_url));
        }
        SectionView::Unavailable {
            message,
            profile_url,
        } => {
            buf.push_str(&format!(
                "[UNAVAILABLE] Activity could not be loaded: {}\n\n",
                message
            ));
            buf.push_str(&format!("See the latest at {}\n", profile_url));
        }
    }

    buf
}

fn render_activity_item(activity: &ActivityRecord) -> String {
    let summary = activity.summary();

    let stats = match activity {
        ActivityRecord::Repo {
            star_count,
            fork_count,
            ..
        } => format!("{} stars | {} forks", star_count, fork_count),
        ActivityRecord::Article {
            clap_count,
            response_count,
            ..
        } => format!("{} claps | {} responses", clap_count, response_count),
        ActivityRecord::Post {
            like_count,
            share_count,
            ..
        } => format!("{} likes | {} shares", like_count, share_count),
    };

    format!(
        "[{}] {} ({})\n    {}\n    {} | {}\n",
        activity.platform().to_uppercase(),
        summary.title,
        summary.timestamp_label,
        truncate(&summary.description, 160),
        stats,
        summary.link
    )
}

/// Truncate on a char boundary, suffixing `...` when shortened
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
