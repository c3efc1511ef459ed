//! MCP server implementation using rmcp over stdio transport.
//!
//! Exposes the single `assess_risk` tool that any MCP client (Cursor,
//! Claude, etc.) can invoke to score a coding prompt through the Orcho
//! risk API.

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolRequestParams, CallToolResult, ListToolsResult, PaginatedRequestParams,
    ServerCapabilities, ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::{tool, tool_router, ErrorData as McpError, ServerHandler, ServiceExt};
use serde::Deserialize;
use serde_json::Value;

use crate::config::OrchoConfig;
use crate::error::OrchoError;
use crate::risk::RiskClient;

/// MCP protocol name reported to clients.
const SERVER_NAME: &str = "orcho-prompt-logger";

// ---------------------------------------------------------------------------
// Server struct
// ---------------------------------------------------------------------------

/// Orcho MCP server.
///
/// Wraps the [`RiskClient`] in an `Arc` to satisfy the `Clone + Send + Sync`
/// requirements of rmcp's `ServerHandler` trait; the client itself is
/// stateless across calls.
#[derive(Clone)]
pub struct OrchoServer {
    client: Arc<RiskClient>,
}

impl OrchoServer {
    /// Create a new MCP server from an immutable configuration value.
    pub fn new(config: OrchoConfig) -> Self {
        Self {
            client: Arc::new(RiskClient::new(config)),
        }
    }
}

// ---------------------------------------------------------------------------
// Tool parameters
// ---------------------------------------------------------------------------

#[derive(Deserialize, schemars::JsonSchema)]
pub struct AssessRiskParams {
    #[schemars(description = "The coding task or prompt you want to assess for risk.")]
    pub prompt: String,
    #[schemars(
        description = "STRONGLY RECOMMENDED: Path to the currently open/active file in the editor (e.g. \"src/main.js\"). You (the AI assistant) can see which file is open in the editor tabs - always pass this if available. This enables context-aware assessment with blast radius and complexity analysis. If no file is open or unknown, omit this parameter."
    )]
    pub current_file: Option<String>,
    #[schemars(
        description = "STRONGLY RECOMMENDED: Array of file paths that will be touched/modified by this prompt. Analyze the user prompt to determine which files will be affected (e.g. if the prompt says \"update login.js and auth.js\", include [\"login.js\", \"auth.js\"]). This enables accurate blast radius calculation."
    )]
    pub other_files: Option<Vec<String>>,
    #[schemars(description = "Optional custom weights for risk calculation factors.")]
    pub weights: Option<serde_json::Map<String, Value>>,
    #[schemars(
        description = "Repository identifier as owner/repo (e.g. \"acme/widgets\"). If omitted, it is resolved from the local git remote."
    )]
    pub repo_full_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Tool implementation
// ---------------------------------------------------------------------------

#[tool_router]
impl OrchoServer {
    #[tool(
        name = "assess_risk",
        description = "Assess the risk level of your coding prompt using the Orcho risk analysis API. CRITICAL: You (the AI assistant) have access to the editor state - ALWAYS include context when available: 1) Pass the currently open/active file path as current_file, 2) Analyze the user prompt to determine which files will be modified and pass them as other_files. Without context, only basic risk assessment is available. With context, you get blast radius and complexity analysis."
    )]
    async fn assess_risk(&self, Parameters(p): Parameters<AssessRiskParams>) -> String {
        super::tools::handle_assess_risk(&self.client, p).await
    }
}

// ---------------------------------------------------------------------------
// ServerHandler impl
// ---------------------------------------------------------------------------

impl ServerHandler for OrchoServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Orcho — prompt risk assessment MCP server. Call assess_risk before \
                 executing a coding task to get a risk level and 0-100 score. Include \
                 current_file and other_files from the editor state whenever available \
                 to enable blast radius analysis."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: rmcp::model::Implementation {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        std::future::ready(Ok(ListToolsResult {
            meta: None,
            next_cursor: None,
            tools: Self::tool_router().list_all(),
        }))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        // The router rejects unknown tool names with a protocol error.
        let tool_context =
            rmcp::handler::server::tool::ToolCallContext::new(self, request, context);
        Self::tool_router().call(tool_context).await
    }
}

// ---------------------------------------------------------------------------
// Public entry point: run the MCP server over stdio
// ---------------------------------------------------------------------------

/// Start the MCP server on stdin/stdout.
///
/// Blocks until the client disconnects. Serve failures are surfaced as
/// [`OrchoError::Server`] so the caller can exit non-zero.
pub async fn run_server(config: OrchoConfig) -> Result<(), OrchoError> {
    tracing::info!(
        api_url = %config.api_url,
        api_key = %config.redacted_key(),
        "Orcho MCP server started (risk assessment mode)"
    );

    let server = OrchoServer::new(config);
    let transport = rmcp::transport::io::stdio();
    let running = server
        .serve(transport)
        .await
        .map_err(|e| OrchoError::Server(e.to_string()))?;
    let _ = running.waiting().await;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
