//! Mock tool source for tests.

use async_trait::async_trait;
use serde_json::Value;

use super::{ToolCallContent, ToolSource, ToolSourceError, ToolSpec};

/// Mock tool source: one `get_time` tool returning a fixed answer.
///
/// Unknown tool names return `NotFound`, so tests can assert the executor's
/// error handling as well as the happy path.
pub struct MockToolSource {
    answer: String,
}

impl MockToolSource {
    /// Mock with the default fixed answer.
    pub fn new() -> Self {
        Self {
            answer: "12:00".to_string(),
        }
    }

    /// Mock returning the given answer for `get_time`.
    pub fn with_answer(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
        }
    }
}

impl Default for MockToolSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolSource for MockToolSource {
    async fn list_tools(&self) -> Result<Vec<ToolSpec>, ToolSourceError> {
        Ok(vec![ToolSpec {
            name: "get_time".to_string(),
            description: Some("Get the current time".to_string()),
            input_schema: serde_json::json!({"type": "object", "properties": {}}),
        }])
    }

    async fn call_tool(
        &self,
        name: &str,
        _arguments: Value,
    ) -> Result<ToolCallContent, ToolSourceError> {
        if name != "get_time" {
            return Err(ToolSourceError::NotFound(name.to_string()));
        }
        Ok(ToolCallContent {
            text: self.answer.clone(),
        })
    }
}
