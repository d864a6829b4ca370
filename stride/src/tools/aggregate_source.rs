//! Aggregate tool source: a `ToolSource` backed by a [`ToolRegistry`].

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::tool_source::{ToolCallContent, ToolSource, ToolSourceError, ToolSpec};
use crate::tools::r#trait::Tool;
use crate::tools::registry::ToolRegistry;

/// `ToolSource` implementation over a registry of [`Tool`]s.
///
/// Tools can be registered after construction; the registry is guarded by an
/// async RwLock so the source can be shared with the executor.
pub struct AggregateToolSource {
    registry: RwLock<ToolRegistry>,
}

impl AggregateToolSource {
    /// Creates an empty aggregate source.
    pub fn new() -> Self {
        Self {
            registry: RwLock::new(ToolRegistry::new()),
        }
    }

    /// Registers a tool.
    pub async fn register(&self, tool: Box<dyn Tool>) {
        self.registry.write().await.register(tool);
    }
}

impl Default for AggregateToolSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolSource for AggregateToolSource {
    async fn list_tools(&self) -> Result<Vec<ToolSpec>, ToolSourceError> {
        Ok(self.registry.read().await.list())
    }

    async fn call_tool(
        &self,
        name: &str,
        arguments: Value,
    ) -> Result<ToolCallContent, ToolSourceError> {
        self.registry.read().await.call(name, arguments).await
    }
}
