//! Remote HR API tools for agents.
//!
//! The Remote REST API (time off, employments, payroll, expenses, timesheets,
//! billing, incentives) exposed as schema-validated tools, consumable through
//! an agent toolkit or a Model Context Protocol server.
//!
//! - `http`: Authenticated client for the Remote API
//! - `api`: Typed records and endpoint methods per resource
//! - `tools`: Tool definitions and the registry
//! - `toolkit`: Structured-tool adapter for agent frameworks
//! - `mcp`: MCP server adapter
//! - `config`: Context and construction options
//! - `error`: Error taxonomy

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod mcp;
pub mod toolkit;
pub mod tools;

pub use config::{Context, ToolkitOptions};
pub use error::RemoteError;
pub use http::RemoteApiClient;
pub use mcp::RemoteMcpServer;
pub use toolkit::{RemoteApiToolkit, ToolkitTool};
pub use tools::{Tool, ToolOutput, get_all_tools};
