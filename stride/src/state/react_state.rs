//! State and tool types for the tool-using executor (ReAct loop).
//!
//! `ReActState` holds the conversation plus per-round tool_calls and
//! tool_results; the Think/Act/Observe nodes read and write these fields.

use crate::llm::LlmUsage;
use crate::message::Message;
use serde::{Deserialize, Serialize};

/// A single tool invocation produced by the LLM (Think node) and consumed by Act.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolCall {
    /// Tool name as registered in the tool source.
    pub name: String,
    /// Arguments as a JSON string; parsed in Act when calling the tool.
    pub arguments: String,
    /// Optional id to match with `ToolResult::call_id`.
    pub id: Option<String>,
}

/// Result of executing one tool call (Act node output, Observe node input).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolResult {
    /// Id of the tool call this result belongs to (if the call had one).
    pub call_id: Option<String>,
    /// Tool name; alternative to call_id for matching.
    pub name: Option<String>,
    /// Result content.
    pub content: String,
}

/// State for the executor graph: Think → Act → Observe.
///
/// Conversation history in `messages`; per-round tool data in `tool_calls`
/// (Think writes, Act reads) and `tool_results` (Act writes, Observe merges
/// and clears). One round is one Observe pass; `turn_count` bounds the loop.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReActState {
    /// Conversation history (System, User, Assistant).
    pub messages: Vec<Message>,
    /// Current round tool calls from the LLM.
    pub tool_calls: Vec<ToolCall>,
    /// Current round tool execution results.
    pub tool_results: Vec<ToolResult>,
    /// Number of observe rounds completed; used to enforce max turns.
    #[serde(default)]
    pub turn_count: u32,
    /// Token usage for the last LLM call, when the provider reports it.
    #[serde(default)]
    pub usage: Option<LlmUsage>,
    /// Accumulated token usage over the whole run.
    #[serde(default)]
    pub total_usage: Option<LlmUsage>,
}

impl ReActState {
    /// Initial state for one executor run: system prompt plus user task.
    pub fn with_task(system_prompt: &str, task: &str) -> Self {
        Self {
            messages: vec![Message::system(system_prompt), Message::user(task)],
            ..Self::default()
        }
    }

    /// Content of the chronologically last Assistant message, if any.
    ///
    /// An assistant turn that carried only tool_calls has empty content and
    /// returns `Some("")`; `None` means no Assistant message exists at all.
    pub fn last_assistant_reply(&self) -> Option<String> {
        self.messages.iter().rev().find_map(|m| match m {
            Message::Assistant(s) => Some(s.clone()),
            _ => None,
        })
    }
}
