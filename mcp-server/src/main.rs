//! Folio MCP Server
//!
//! Exposes the portfolio's blog and recent-activity sections as MCP tools.
//! Talks to a running Folio API, located by FOLIO_API_URL.

mod client;
mod server;

use anyhow::Result;
use rmcp::ServiceExt;
use server::FolioServer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging to stderr (stdout is used for MCP protocol)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting Folio MCP server");

    let server = FolioServer::from_env()?;

    // Serve over stdio - pass as tuple (stdin, stdout)
    let transport = (tokio::io::stdin(), tokio::io::stdout());
    let service = server.serve(transport).await?;

    // Wait for shutdown
    service.waiting().await?;

    Ok(())
}
