//! Think node: read messages, call the LLM, write the assistant message and
//! any tool_calls.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::graph::{Next, Node};
use crate::llm::{LlmClient, LlmUsage};
use crate::message::Message;
use crate::state::ReActState;

pub struct ThinkNode {
    llm: Arc<dyn LlmClient>,
}

impl ThinkNode {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

fn accumulate_usage(
    total: &Option<LlmUsage>,
    latest: &Option<LlmUsage>,
) -> (Option<LlmUsage>, Option<LlmUsage>) {
    match (total, latest) {
        (Some(t), Some(u)) => (Some(u.clone()), Some(t.add(u))),
        (None, Some(u)) => (Some(u.clone()), Some(u.clone())),
        (Some(t), None) => (None, Some(t.clone())),
        (None, None) => (None, None),
    }
}

#[async_trait]
impl Node<ReActState> for ThinkNode {
    fn id(&self) -> &str {
        "think"
    }

    async fn run(&self, state: ReActState) -> Result<(ReActState, Next), AgentError> {
        let response = self.llm.invoke(&state.messages).await?;
        let (usage, total_usage) = accumulate_usage(&state.total_usage, &response.usage);

        let mut messages = state.messages;
        messages.push(Message::Assistant(response.content));

        let new_state = ReActState {
            messages,
            tool_calls: response.tool_calls,
            tool_results: state.tool_results,
            turn_count: state.turn_count,
            usage,
            total_usage,
        };
        Ok((new_state, Next::Continue))
    }
}
