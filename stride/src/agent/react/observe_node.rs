//! Observe node: merge tool_results into messages, clear the round, loop or end.

use async_trait::async_trait;

use crate::error::AgentError;
use crate::graph::{Next, Node};
use crate::message::Message;
use crate::state::ReActState;

/// Maximum number of executor loop rounds (observe passes) before forcing End.
pub const MAX_REACT_TURNS: u32 = 10;

/// Observe node: feeds tool results back into the conversation.
///
/// When built with [`ObserveNode::with_loop`], the node returns
/// `Next::Continue` (back to think via the observe → think edge) while the
/// round had tool calls, and `Next::End` once a round produced none or the
/// turn budget is spent.
pub struct ObserveNode {
    enable_loop: bool,
}

impl ObserveNode {
    /// One-shot observe: always continues along the linear edge.
    pub fn new() -> Self {
        Self { enable_loop: false }
    }

    /// Looping observe for the think → act → observe cycle.
    pub fn with_loop() -> Self {
        Self { enable_loop: true }
    }
}

impl Default for ObserveNode {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Node<ReActState> for ObserveNode {
    fn id(&self) -> &str {
        "observe"
    }

    async fn run(&self, state: ReActState) -> Result<(ReActState, Next), AgentError> {
        let had_tool_calls = !state.tool_calls.is_empty();
        let mut messages = state.messages;
        for tr in &state.tool_results {
            let name = tr
                .name
                .as_deref()
                .or(tr.call_id.as_deref())
                .unwrap_or("tool");
            messages.push(Message::User(format!(
                "Tool {} returned: {}",
                name, tr.content
            )));
        }
        let next_turn = state.turn_count.saturating_add(1);
        let new_state = ReActState {
            messages,
            tool_calls: vec![],
            tool_results: vec![],
            turn_count: next_turn,
            usage: state.usage,
            total_usage: state.total_usage,
        };
        let next = if !self.enable_loop {
            Next::Continue
        } else if next_turn >= MAX_REACT_TURNS || !had_tool_calls {
            Next::End
        } else {
            Next::Continue
        };
        Ok((new_state, next))
    }
}
