//! Domain ports (traits)
//!
//! Port traits define the upstream data sources the services require.
//! Adapters provide concrete implementations of these traits.

pub mod code_host;
pub mod feed_proxy;

pub use code_host::{CodeHostClient, RepoSummary};
pub use feed_proxy::{FeedProxyClient, ProxyFeed, ProxyItem, PROXY_STATUS_OK};
