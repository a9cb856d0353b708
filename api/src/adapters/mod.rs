//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod github;
pub mod rss2json;

pub use github::GitHubClientImpl;
pub use rss2json::Rss2JsonClient;
