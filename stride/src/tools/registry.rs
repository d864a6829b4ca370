//! Tool registry: the complete set of invocable tools, keyed by name.

use std::collections::HashMap;

use crate::tool_source::{ToolCallContent, ToolSourceError, ToolSpec};
use crate::tools::r#trait::Tool;

/// Central registry for a collection of tools.
///
/// Stores tools by name and provides registration, listing, and calling.
/// [`AggregateToolSource`](super::AggregateToolSource) wraps this to
/// implement the `ToolSource` trait for the executor.
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Registers a tool. A tool with the same name is replaced.
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        let name = tool.name().to_string();
        self.tools.insert(name, tool);
    }

    /// The complete set of registered tools as specs for the LLM.
    pub fn list(&self) -> Vec<ToolSpec> {
        self.tools.values().map(|tool| tool.spec()).collect()
    }

    /// Calls a tool by name with the given arguments.
    ///
    /// Returns `ToolSourceError::NotFound` when the name is not registered.
    pub async fn call(
        &self,
        name: &str,
        args: serde_json::Value,
    ) -> Result<ToolCallContent, ToolSourceError> {
        match self.tools.get(name) {
            Some(tool) => tool.call(args).await,
            None => Err(ToolSourceError::NotFound(name.to_string())),
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
