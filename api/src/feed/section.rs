//! Section view
//!
//! The display state of one page section. Loading is a client concern, so
//! a finished fetch always lands in one of three states.

use serde::Serialize;

use crate::domain::entities::ArticleRecord;
use crate::error::FeedError;

/// Rendered state of a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SectionView<T> {
    /// At least one item to show
    Ready { items: Vec<T> },
    /// The fetch succeeded but returned nothing
    Empty { profile_url: String },
    /// The fetch failed; readers are pointed at the external profile instead
    Unavailable { message: String, profile_url: String },
}

impl<T> SectionView<T> {
    /// Build the view for a finished fetch.
    ///
    /// Cancellation is passed back to the caller; it has no view.
    pub fn from_result(
        result: Result<Vec<T>, FeedError>,
        profile_url: &str,
    ) -> Result<Self, FeedError> {
        match result {
            Ok(items) if items.is_empty() => Ok(SectionView::Empty {
                profile_url: profile_url.to_string(),
            }),
            Ok(items) => Ok(SectionView::Ready { items }),
            Err(FeedError::Cancelled) => Err(FeedError::Cancelled),
            Err(e) => Ok(SectionView::Unavailable {
                message: e.to_string(),
                profile_url: profile_url.to_string(),
            }),
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, SectionView::Unavailable { .. })
    }
}

/// The blog section plus the categories a reader can narrow it to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogSection {
    /// "All" followed by every category in the unfiltered feed
    pub categories: Vec<String>,
    #[serde(flatten)]
    pub view: SectionView<ArticleRecord>,
}
