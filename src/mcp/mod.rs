//! Remote HR API Model Context Protocol server.
//!
//! Exposes the tool registry over MCP. The set of tools depends on the
//! allow-list, so tools are listed and dispatched by hand rather than through
//! the `rmcp` router macros.
//!
//! The server can be served over stdio or mounted as a streamable HTTP
//! service; see `main.rs`.

use std::sync::Arc;

use axum::http::request;
use rmcp::{
    ErrorData, RoleServer, ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Content, ErrorCode, Implementation,
        InitializeRequestParam, InitializeResult, JsonObject, ListToolsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
};
use serde_json::Value;
use tracing::{debug, error, info};

use crate::{
    config::{Context, ToolkitOptions},
    error::RemoteError,
    http::RemoteApiClient,
    tools::{Tool, get_all_tools},
};

#[derive(Debug, Clone)]
pub struct RemoteMcpServer {
    client: Arc<RemoteApiClient>,
    context: Arc<Context>,
    tools: Arc<Vec<Tool>>,
}

impl RemoteMcpServer {
    /// Builds the client and the (filtered) tool list once.
    ///
    /// # Errors
    /// `Config` when the API key is missing or the base URL is invalid.
    pub fn new(options: ToolkitOptions) -> Result<Self, RemoteError> {
        let client = Arc::new(RemoteApiClient::new(
            options.api_key.clone(),
            options.api_base_url.as_deref(),
        )?);
        let context = Arc::new(options.context());
        let tools = Arc::new(get_all_tools(&context));

        info!(tools = tools.len(), base_url = client.base_url(), "Remote MCP server ready");
        Ok(Self {
            client,
            context,
            tools,
        })
    }

    #[must_use]
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// MCP descriptions of the exposed tools, in registry order.
    #[must_use]
    pub fn tool_descriptions(&self) -> Vec<rmcp::model::Tool> {
        self.tools
            .iter()
            .map(|tool| {
                rmcp::model::Tool::new(tool.method, tool.description, Arc::clone(&tool.parameters))
            })
            .collect()
    }

    /// Runs the tool registered under `method`.
    ///
    /// # Errors
    /// `INVALID_PARAMS` for an unknown tool or arguments that fail
    /// validation. Other failures come back as text content.
    pub async fn invoke(
        &self,
        method: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ErrorData> {
        let tool = self
            .tools
            .iter()
            .find(|tool| tool.method == method)
            .ok_or_else(|| {
                ErrorData::new(
                    ErrorCode::INVALID_PARAMS,
                    format!("Unknown tool: {method}"),
                    None,
                )
            })?;

        let args = arguments.map_or(Value::Null, Value::Object);
        debug!(tool = tool.method, "Calling tool");
        match tool
            .execute(Arc::clone(&self.client), Arc::clone(&self.context), args)
            .await
        {
            Ok(output) => Ok(CallToolResult::success(vec![Content::text(
                output.into_text(),
            )])),
            Err(e @ RemoteError::InvalidParams(_)) => Err(e.into()),
            Err(e) => {
                error!(tool = tool.method, error = %e, "MCP Server: Error executing tool");
                Ok(CallToolResult::success(vec![Content::text(tool.error_text(&e))]))
            }
        }
    }
}

impl ServerHandler for RemoteMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Remote HR API MCP Server: time off, leave policies, employments, payroll, \
                 expenses, timesheets, billing documents and incentives"
                    .to_string(),
            ),
        }
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<InitializeResult, ErrorData> {
        if let Some(http_request_part) = context.extensions.get::<request::Parts>() {
            let initialize_headers = &http_request_part.headers;
            let initialize_uri = &http_request_part.uri;
            info!(?initialize_headers, %initialize_uri, "initialize from http server");
        }
        Ok(self.get_info())
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(self.tool_descriptions()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        self.invoke(&request.name, request.arguments).await
    }
}
