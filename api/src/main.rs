//! Folio API Server
//!
//! Serves the blog and recent-activity sections of a developer portfolio,
//! aggregated from a syndication feed proxy and the GitHub API.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{GitHubClientImpl, Rss2JsonClient};
use app::{cancel_pair, ActivityService, ArticleService, CancelSignal};
use config::Config;
use domain::ports::{CodeHostClient, FeedProxyClient};

/// Application state shared across all handlers
pub struct AppState<CH, FP>
where
    CH: CodeHostClient,
    FP: FeedProxyClient,
{
    pub article_service: Arc<ArticleService<FP>>,
    pub activity_service: Arc<ActivityService<CH, FP>>,
    pub config: Config,
    /// Flips to `true` when the server starts shutting down
    pub cancel: CancelSignal,
}

// Manual impl: derive would require `CH: Clone` and `FP: Clone`
impl<CH, FP> Clone for AppState<CH, FP>
where
    CH: CodeHostClient,
    FP: FeedProxyClient,
{
    fn clone(&self) -> Self {
        Self {
            article_service: self.article_service.clone(),
            activity_service: self.activity_service.clone(),
            config: self.config.clone(),
            cancel: self.cancel.clone(),
        }
    }
}

impl<CH, FP> AppState<CH, FP>
where
    CH: CodeHostClient,
    FP: FeedProxyClient,
{
    /// Wire both services over the given clients. The activity service
    /// reuses the article service for its article half.
    pub fn new(code_host: Arc<CH>, proxy: Arc<FP>, config: Config, cancel: CancelSignal) -> Self {
        let article_service = Arc::new(ArticleService::new(proxy));
        let activity_service = Arc::new(ActivityService::new(code_host, article_service.clone()));

        Self {
            article_service,
            activity_service,
            config,
            cancel,
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router over any pair of clients
pub fn router<CH, FP>(state: AppState<CH, FP>) -> Router
where
    CH: CodeHostClient + 'static,
    FP: FeedProxyClient + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/blog", get(handlers::get_blog::<CH, FP>))
        .route("/activity", get(handlers::get_activity::<CH, FP>))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,folio_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Folio API...");

    // Load configuration
    let config = Config::from_env();
    if config.github_token.is_none() {
        tracing::info!("GITHUB_TOKEN not set, using unauthenticated GitHub requests");
    }

    // Create adapters
    let code_host = Arc::new(GitHubClientImpl::new(
        config.github_api_url.clone(),
        config.github_token.clone(),
    ));
    let proxy = Arc::new(Rss2JsonClient::new(config.feed_proxy_url.clone()));

    let (cancel_tx, cancel) = cancel_pair();
    let state = AppState::new(code_host, proxy, config.clone(), cancel);
    let app = router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
            tracing::info!("Shutting down, cancelling in-flight fetches");
            // Receivers live in the router state, so this only fails once
            // they are all gone and there is nothing left to cancel
            let _ = cancel_tx.send(true);
        })
        .await
        .context("Server error")?;

    Ok(())
}
