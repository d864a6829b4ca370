//! Example: a minimal agent as a graph node (state-in, state-out).
//!
//! Run: `cargo run -p stride-examples --example state_graph_echo -- "hello"`

use async_trait::async_trait;
use std::env;
use std::sync::Arc;

use stride::{Agent, AgentError, Message, StateGraph, END, START};

#[derive(Debug, Clone, Default)]
struct AgentState {
    pub messages: Vec<Message>,
}

struct EchoAgent;

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

#[tokio::main]
async fn main() {
    let input = env::args().nth(1).unwrap_or_else(|| "hello".to_string());

    let mut graph = StateGraph::<AgentState>::new();
    graph
        .add_node("echo", Arc::new(EchoAgent))
        .add_edge(START, "echo")
        .add_edge("echo", END);
    let compiled = graph.compile().expect("valid graph");

    let mut state = AgentState::default();
    state.messages.push(Message::User(input));

    let state = compiled.invoke(state, None).await.expect("invoke");

    if let Some(Message::Assistant(content)) = state.messages.last() {
        println!("{content}");
    }
}
