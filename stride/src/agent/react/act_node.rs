//! Act node: read tool_calls, call the ToolSource for each, write tool_results.
//!
//! # Error handling
//!
//! By default tool errors propagate and short-circuit the graph. Use
//! `with_handle_tool_errors(HandleToolErrors::Always(None))` to instead turn
//! each failure into an error-text result the LLM can read and correct.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::AgentError;
use crate::graph::{Next, Node};
use crate::state::{ReActState, ToolResult};
use crate::tool_source::{ToolSource, ToolSourceError};

/// Error message template used when a tool call fails and errors are handled.
pub const DEFAULT_EXECUTION_ERROR_TEMPLATE: &str =
    "Error executing tool '{tool_name}' with kwargs {tool_kwargs} with error:\n {error}\n Please fix the error and try again.";

/// How the Act node handles tool errors.
#[derive(Clone, Debug, Default)]
pub enum HandleToolErrors {
    /// Errors propagate and fail the run.
    #[default]
    Never,
    /// Errors become error-text tool results; `Some` overrides the message template.
    Always(Option<String>),
}

/// Parses ToolCall.arguments into JSON, logging and defaulting on failure.
fn parse_tool_arguments(arguments: &str) -> Value {
    if arguments.trim().is_empty() {
        return serde_json::json!({});
    }
    match serde_json::from_str(arguments) {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, arguments = %arguments, "tool arguments JSON parse failed, using empty object");
            serde_json::json!({})
        }
    }
}

/// Act node: one executor step that runs tool_calls and produces tool_results.
pub struct ActNode {
    tools: Box<dyn ToolSource>,
    handle_tool_errors: HandleToolErrors,
}

impl ActNode {
    pub fn new(tools: Box<dyn ToolSource>) -> Self {
        Self {
            tools,
            handle_tool_errors: HandleToolErrors::Never,
        }
    }

    pub fn with_handle_tool_errors(mut self, handle_tool_errors: HandleToolErrors) -> Self {
        self.handle_tool_errors = handle_tool_errors;
        self
    }

    fn handle_error(
        &self,
        error: &ToolSourceError,
        tool_name: &str,
        tool_args: &Value,
    ) -> Option<String> {
        match &self.handle_tool_errors {
            HandleToolErrors::Never => None,
            HandleToolErrors::Always(custom_msg) => Some(custom_msg.clone().unwrap_or_else(|| {
                DEFAULT_EXECUTION_ERROR_TEMPLATE
                    .replace("{tool_name}", tool_name)
                    .replace("{tool_kwargs}", &tool_args.to_string())
                    .replace("{error}", &error.to_string())
            })),
        }
    }
}

#[async_trait]
impl Node<ReActState> for ActNode {
    fn id(&self) -> &str {
        "act"
    }

    async fn run(&self, state: ReActState) -> Result<(ReActState, Next), AgentError> {
        let mut tool_results = Vec::with_capacity(state.tool_calls.len());

        for tc in &state.tool_calls {
            let args = parse_tool_arguments(&tc.arguments);
            debug!(tool = %tc.name, args = %args, "calling tool");

            let content = match self.tools.call_tool(&tc.name, args.clone()).await {
                Ok(result) => result.text,
                Err(e) => match self.handle_error(&e, &tc.name, &args) {
                    Some(msg) => msg,
                    None => {
                        return Err(AgentError::ExecutionFailed(format!(
                            "tool {} failed: {}",
                            tc.name, e
                        )))
                    }
                },
            };

            tool_results.push(ToolResult {
                call_id: tc.id.clone(),
                name: Some(tc.name.clone()),
                content,
            });
        }

        let new_state = ReActState {
            tool_results,
            ..state
        };
        Ok((new_state, Next::Continue))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ToolCall;
    use crate::tool_source::MockToolSource;

    fn state_with_call(name: &str) -> ReActState {
        ReActState {
            tool_calls: vec![ToolCall {
                name: name.to_string(),
                arguments: "{}".to_string(),
                id: Some("call-1".to_string()),
            }],
            ..ReActState::default()
        }
    }

    /// **Scenario**: Act executes each tool call and records its result.
    #[tokio::test]
    async fn act_executes_tool_calls() {
        let node = ActNode::new(Box::new(MockToolSource::with_answer("12:00")));
        let (out, _) = node.run(state_with_call("get_time")).await.unwrap();

        assert_eq!(out.tool_results.len(), 1);
        assert_eq!(out.tool_results[0].content, "12:00");
        assert_eq!(out.tool_results[0].call_id.as_deref(), Some("call-1"));
    }

    /// **Scenario**: With HandleToolErrors::Never, a failing tool fails the run.
    #[tokio::test]
    async fn act_propagates_tool_error_by_default() {
        let node = ActNode::new(Box::new(MockToolSource::new()));
        let err = node.run(state_with_call("unknown_tool")).await.unwrap_err();
        assert!(err.to_string().contains("unknown_tool"));
    }

    /// **Scenario**: With HandleToolErrors::Always, the failure becomes an
    /// error-text result the LLM can read.
    #[tokio::test]
    async fn act_converts_tool_error_to_result_when_handled() {
        let node = ActNode::new(Box::new(MockToolSource::new()))
            .with_handle_tool_errors(HandleToolErrors::Always(None));
        let (out, _) = node.run(state_with_call("unknown_tool")).await.unwrap();

        assert_eq!(out.tool_results.len(), 1);
        assert!(out.tool_results[0].content.contains("unknown_tool"));
        assert!(out.tool_results[0].content.contains("fix the error"));
    }

    /// **Scenario**: Malformed argument JSON degrades to an empty object.
    #[test]
    fn parse_tool_arguments_defaults_on_bad_json() {
        assert_eq!(parse_tool_arguments("not json"), serde_json::json!({}));
        assert_eq!(parse_tool_arguments(""), serde_json::json!({}));
        assert_eq!(
            parse_tool_arguments(r#"{"url": "x"}"#),
            serde_json::json!({"url": "x"})
        );
    }
}
