//! Shared configuration handed to the tool registry and both host adapters.

use std::fmt;

/// Immutable bundle passed to every tool execution.
#[derive(Clone, Default)]
pub struct Context {
    pub api_key: String,
    /// Display names of the tools to expose. `None` exposes every tool.
    pub allowed_tools: Option<Vec<String>>,
}

impl Context {
    pub fn new(api_key: impl Into<String>, allowed_tools: Option<Vec<String>>) -> Self {
        Self {
            api_key: api_key.into(),
            allowed_tools,
        }
    }
}

// The API key is a bearer credential, keep it out of logs.
impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("api_key", &"<redacted>")
            .field("allowed_tools", &self.allowed_tools)
            .finish()
    }
}

/// Construction options for [`crate::toolkit::RemoteApiToolkit`] and
/// [`crate::mcp::RemoteMcpServer`].
#[derive(Clone, Default)]
pub struct ToolkitOptions {
    pub api_key: String,
    pub api_base_url: Option<String>,
    pub allowed_tools: Option<Vec<String>>,
}

impl ToolkitOptions {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_base_url = Some(base_url.into());
        self
    }

    #[must_use]
    pub fn with_allowed_tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_tools = Some(tools.into_iter().map(Into::into).collect());
        self
    }

    pub(crate) fn context(&self) -> Context {
        Context::new(self.api_key.clone(), self.allowed_tools.clone())
    }
}

impl fmt::Debug for ToolkitOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolkitOptions")
            .field("api_key", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .field("allowed_tools", &self.allowed_tools)
            .finish()
    }
}

/// Splits a comma separated allow-list, trimming entries and dropping empty ones.
pub fn parse_allowed_tools(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToString::to_string)
        .collect()
}
