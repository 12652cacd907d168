//! Agent toolkit: the registry exposed as a list of structured tools
//! (`name`, `description`, `schema`, `invoke`) for agent frameworks.

use std::sync::Arc;

use rmcp::model::JsonObject;
use serde_json::Value;
use tracing::{error, info};

use crate::{
    config::{Context, ToolkitOptions},
    error::RemoteError,
    http::RemoteApiClient,
    tools::{Tool, get_all_tools},
};

/// One registry tool bound to the toolkit's client and context.
#[derive(Debug, Clone)]
pub struct ToolkitTool {
    tool: Tool,
    client: Arc<RemoteApiClient>,
    context: Arc<Context>,
}

impl ToolkitTool {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.tool.name
    }

    #[must_use]
    pub const fn method(&self) -> &'static str {
        self.tool.method
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.tool.description
    }

    #[must_use]
    pub fn schema(&self) -> &JsonObject {
        &self.tool.parameters
    }

    /// Runs the tool and renders its result as text.
    ///
    /// # Errors
    /// `InvalidParams` when `args` fail the tool's schema or validation.
    /// Any other failure is returned as an `Error in ...` string.
    pub async fn invoke(&self, args: Value) -> Result<String, RemoteError> {
        match self
            .tool
            .execute(Arc::clone(&self.client), Arc::clone(&self.context), args)
            .await
        {
            Ok(output) => Ok(output.into_text()),
            Err(e @ RemoteError::InvalidParams(_)) => Err(e),
            Err(e) => {
                error!(tool = self.tool.method, error = %e, "Tool execution failed");
                Ok(self.tool.error_text(&e))
            }
        }
    }
}

/// The full (or allow-listed) tool set over one shared client.
#[derive(Debug, Clone)]
pub struct RemoteApiToolkit {
    tools: Vec<ToolkitTool>,
}

impl RemoteApiToolkit {
    /// # Errors
    /// `Config` when the API key is missing or the base URL is invalid.
    pub fn new(options: ToolkitOptions) -> Result<Self, RemoteError> {
        let client = Arc::new(RemoteApiClient::new(
            options.api_key.clone(),
            options.api_base_url.as_deref(),
        )?);
        let context = Arc::new(options.context());

        let tools: Vec<ToolkitTool> = get_all_tools(&context)
            .into_iter()
            .map(|tool| ToolkitTool {
                tool,
                client: Arc::clone(&client),
                context: Arc::clone(&context),
            })
            .collect();
        info!(tools = tools.len(), base_url = client.base_url(), "Remote API toolkit ready");
        Ok(Self { tools })
    }

    #[must_use]
    pub fn tools(&self) -> &[ToolkitTool] {
        &self.tools
    }

    /// Finds a tool by display name.
    #[must_use]
    pub fn tool(&self, name: &str) -> Option<&ToolkitTool> {
        self.tools.iter().find(|tool| tool.name() == name)
    }
}
