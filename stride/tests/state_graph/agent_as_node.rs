//! The Agent blanket impl lets an agent be added to a graph directly.

use std::sync::Arc;

use stride::{Message, StateGraph, END, START};

use super::common::{AgentState, EchoAgent};

/// **Scenario**: An Agent added via add_node runs as a node and its name is the id.
#[tokio::test]
async fn agent_runs_as_graph_node() {
    let mut graph = StateGraph::<AgentState>::new();
    graph
        .add_node("echo", Arc::new(EchoAgent))
        .add_edge(START, "echo")
        .add_edge("echo", END);
    let compiled = graph.compile().expect("graph compiles");

    let mut state = AgentState::default();
    state.messages.push(Message::user("hello"));

    let out = compiled.invoke(state, None).await.expect("invoke");

    assert_eq!(out.messages.len(), 2);
    assert!(matches!(&out.messages[1], Message::Assistant(s) if s == "hello"));
}
