//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod activity_service;
pub mod article_service;
pub mod article_text;
pub mod cancel;
pub mod recency;

pub use activity_service::ActivityService;
pub use article_service::{
    available_categories, filter_by_category, selected_category, ArticleService,
};
pub use cancel::{cancel_pair, CancelSignal};
