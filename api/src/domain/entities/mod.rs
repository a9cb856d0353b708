//! Domain entities
//!
//! Records produced by the services. Both are rebuilt on every fetch.

pub mod activity;
pub mod article;
pub mod profile;

pub use activity::{ActivityHandles, ActivityRecord, ActivitySummary};
pub use article::{ArticleRecord, DEFAULT_TAG, MAX_TAGS};
pub use profile::{github_profile_url, medium_feed_url, medium_profile_url, social_profile_url};
