//! Mock LLM for tests and offline examples.
//!
//! Two modes: a fixed response (optionally with tool_calls), or a scripted
//! queue of responses consumed one per invoke; the latter drives full
//! plan/execute/replan loops without a network.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::llm::{LlmClient, LlmResponse};
use crate::message::Message;
use crate::state::ToolCall;

/// Mock LLM: fixed assistant text and optional tool_calls, or a scripted
/// sequence of responses.
///
/// - [`MockLlm::with_no_tool_calls`]: one fixed text reply (executor END path).
/// - [`MockLlm::with_get_time_call`]: one fixed reply plus a `get_time` tool call.
/// - [`MockLlm::first_tools_then_end`]: stateful; first invoke returns the tool
///   call, later invokes return plain text (multi-round executor tests).
/// - [`MockLlm::from_responses`]: scripted queue; each invoke pops the next
///   response, erroring when the script runs dry.
pub struct MockLlm {
    content: String,
    tool_calls: Vec<ToolCall>,
    /// When Some, first invoke() returns (content, tool_calls), later invokes
    /// return (second_content, []).
    call_count: Option<AtomicUsize>,
    second_content: Option<String>,
    /// When Some, responses are popped front-to-back, ignoring the fixed fields.
    script: Option<Mutex<std::collections::VecDeque<LlmResponse>>>,
}

impl MockLlm {
    /// Fixed reply with custom content and tool_calls.
    pub fn new(content: impl Into<String>, tool_calls: Vec<ToolCall>) -> Self {
        Self {
            content: content.into(),
            tool_calls,
            call_count: None,
            second_content: None,
            script: None,
        }
    }

    /// Fixed assistant text and no tool_calls (executor END path).
    pub fn with_no_tool_calls(content: impl Into<String>) -> Self {
        Self::new(content, vec![])
    }

    /// Fixed reply plus one `get_time` tool call.
    pub fn with_get_time_call() -> Self {
        Self::new(
            "I'll check the time.",
            vec![ToolCall {
                name: "get_time".to_string(),
                arguments: "{}".to_string(),
                id: Some("call-1".to_string()),
            }],
        )
    }

    /// Stateful mock: first invoke() returns the get_time tool call, later
    /// invokes return plain text. Drives one full tool round.
    pub fn first_tools_then_end() -> Self {
        Self {
            content: "I'll check the time.".to_string(),
            tool_calls: vec![ToolCall {
                name: "get_time".to_string(),
                arguments: "{}".to_string(),
                id: Some("call-1".to_string()),
            }],
            call_count: Some(AtomicUsize::new(0)),
            second_content: Some("The time is as above.".to_string()),
            script: None,
        }
    }

    /// Scripted mock: each invoke pops the next response in order.
    ///
    /// Invoking past the end of the script returns `ExecutionFailed`, which
    /// makes an over-long loop fail loudly in tests.
    pub fn from_responses(responses: Vec<LlmResponse>) -> Self {
        Self {
            content: String::new(),
            tool_calls: vec![],
            call_count: None,
            second_content: None,
            script: Some(Mutex::new(responses.into_iter().collect())),
        }
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn invoke(&self, _messages: &[Message]) -> Result<LlmResponse, AgentError> {
        if let Some(script) = &self.script {
            let mut queue = script.lock().expect("mock script lock");
            return queue.pop_front().ok_or_else(|| {
                AgentError::ExecutionFailed("mock llm script exhausted".to_string())
            });
        }

        let (content, tool_calls) = match &self.call_count {
            Some(c) => {
                let n = c.fetch_add(1, Ordering::SeqCst);
                if n == 0 {
                    (self.content.clone(), self.tool_calls.clone())
                } else {
                    (
                        self.second_content
                            .as_deref()
                            .unwrap_or(&self.content)
                            .to_string(),
                        vec![],
                    )
                }
            }
            None => (self.content.clone(), self.tool_calls.clone()),
        };
        Ok(LlmResponse {
            content,
            tool_calls,
            usage: None,
        })
    }
}
