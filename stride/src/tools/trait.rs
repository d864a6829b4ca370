//! Tool trait: a single callable exposed to the LLM.

use async_trait::async_trait;

use crate::tool_source::{ToolCallContent, ToolSourceError, ToolSpec};

/// A single tool that can be called by the LLM.
///
/// Each tool has a unique name, a specification (description and JSON schema
/// for arguments), and the call logic. Tools are registered with
/// [`ToolRegistry`](super::ToolRegistry) and reached through
/// [`AggregateToolSource`](super::AggregateToolSource).
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique name of this tool; used to identify it in tool_calls.
    fn name(&self) -> &str;

    /// Specification sent to the LLM: name, description, argument schema.
    fn spec(&self) -> ToolSpec;

    /// Executes the tool with the given JSON arguments.
    async fn call(&self, args: serde_json::Value) -> Result<ToolCallContent, ToolSourceError>;
}
