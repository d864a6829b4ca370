//! Shared state and agent types for the state_graph tests.

use async_trait::async_trait;

use stride::{Agent, AgentError, Message};

/// Minimal message-list state used across the state_graph tests.
#[derive(Debug, Clone, Default)]
pub struct AgentState {
    pub messages: Vec<Message>,
}

/// Echoes the last user message back as an assistant message.
pub struct EchoAgent;

#[async_trait]
impl Agent for EchoAgent {
    fn name(&self) -> &str {
        "echo"
    }

    type State = AgentState;

    async fn run(&self, state: Self::State) -> Result<Self::State, AgentError> {
        let mut messages = state.messages;
        if let Some(Message::User(s)) = messages.last() {
            let reply = s.clone();
            messages.push(Message::Assistant(reply));
        }
        Ok(AgentState { messages })
    }
}
