//! Folio MCP Server implementation
//!
//! Each tool fetches one rendered section from the API. API failures are
//! reported as tool errors rather than protocol errors.

use crate::client::FolioClient;
use anyhow::Result;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{
    handler::server::tool::ToolRouter,
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use schemars::JsonSchema;
use serde::Deserialize;

/// Folio MCP Server
///
/// Provides read-only tools over a developer portfolio's articles and
/// recent activity.
#[derive(Clone)]
pub struct FolioServer {
    client: FolioClient,
    tool_router: ToolRouter<Self>,
}

impl FolioServer {
    pub fn from_env() -> Result<Self> {
        let client = FolioClient::from_env()?;
        Ok(Self::new(client))
    }

    pub fn new(client: FolioClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }
}

// --- Tool Parameter Types ---

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct CategoryParams {
    /// Category to show, e.g. "Kotlin" or "Android". Omit or use "All" for every article.
    #[serde(default)]
    pub category: Option<String>,
}

fn text_result(result: Result<String>) -> Result<CallToolResult, McpError> {
    match result {
        Ok(content) => Ok(CallToolResult::success(vec![Content::text(content)])),
        Err(e) => {
            tracing::warn!("Tool call failed: {:#}", e);
            Ok(CallToolResult::error(vec![Content::text(e.to_string())]))
        }
    }
}

#[tool_router]
impl FolioServer {
    #[tool(
        description = "List published articles with snippets, reading time and tags. Optionally filter by category."
    )]
    async fn blog(&self, params: Parameters<CategoryParams>) -> Result<CallToolResult, McpError> {
        text_result(self.client.get_blog(params.0.category.as_deref()).await)
    }

    #[tool(
        description = "Show recent activity: updated repositories, new articles and posts, most recent first."
    )]
    async fn activity(&self) -> Result<CallToolResult, McpError> {
        text_result(self.client.get_activity().await)
    }
}

#[tool_handler]
impl ServerHandler for FolioServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "folio".into(),
                title: Some("Folio MCP Server".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                r#"Folio - Developer Portfolio Feeds

TOOLS:
- 'blog' - Published articles, newest first. Pass 'category' to narrow the list.
- 'activity' - Up to four recent items across repositories, articles and posts.

If a section can't be loaded, the error includes a profile link to visit instead."#
                    .into(),
            ),
        }
    }
}
