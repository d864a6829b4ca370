//! Tool source abstraction: list tools and call a tool.
//!
//! The executor depends on `ToolSource` instead of a concrete registry.
//! Implementations: [`MockToolSource`] (tests) and
//! [`AggregateToolSource`](crate::tools::AggregateToolSource) over a
//! [`ToolRegistry`](crate::tools::ToolRegistry); [`WebToolsSource`] builds
//! an aggregate source pre-loaded with the web fetcher.

mod mock;
mod web_tools_source;

pub use mock::MockToolSource;
pub use web_tools_source::WebToolsSource;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Tool specification: name, description, and argument schema.
///
/// Returned by `ToolSource::list_tools()`; passed to the LLM so it can emit
/// matching tool_calls.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ToolSpec {
    /// Tool name (used in tool_calls).
    pub name: String,
    /// Human-readable description for the LLM.
    pub description: Option<String>,
    /// JSON Schema for arguments.
    pub input_schema: Value,
}

/// Result of a single tool call.
#[derive(Debug, Clone)]
pub struct ToolCallContent {
    /// Result text.
    pub text: String,
}

/// Errors from listing or calling tools.
#[derive(Debug, Error)]
pub enum ToolSourceError {
    #[error("tool not found: {0}")]
    NotFound(String),
    #[error("invalid arguments: {0}")]
    InvalidInput(String),
    #[error("transport error: {0}")]
    Transport(String),
}

/// Tool source: list tools and call a tool.
///
/// The executor's Think side uses `list_tools()` to advertise tools to the
/// LLM; the Act node uses `call_tool(name, args)` to execute them.
#[async_trait]
pub trait ToolSource: Send + Sync {
    /// List available tools.
    async fn list_tools(&self) -> Result<Vec<ToolSpec>, ToolSourceError>;

    /// Call a tool by name with JSON arguments.
    async fn call_tool(
        &self,
        name: &str,
        arguments: Value,
    ) -> Result<ToolCallContent, ToolSourceError>;
}
