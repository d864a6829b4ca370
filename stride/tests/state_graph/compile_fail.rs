//! Compile validation through the public API.

use std::sync::Arc;

use stride::{CompilationError, NameNode, StateGraph, END, START};

use super::common::AgentState;

/// **Scenario**: An edge to an unregistered node fails compilation.
#[test]
fn edge_to_unknown_node_fails() {
    let mut graph = StateGraph::<AgentState>::new();
    graph.add_node("a", Arc::new(NameNode::new("a")));
    graph.add_edge(START, "a");
    graph.add_edge("a", "ghost");
    assert!(matches!(
        graph.compile(),
        Err(CompilationError::NodeNotFound(id)) if id == "ghost"
    ));
}

/// **Scenario**: A graph without a START edge fails compilation.
#[test]
fn missing_start_fails() {
    let mut graph = StateGraph::<AgentState>::new();
    graph.add_node("a", Arc::new(NameNode::new("a")));
    graph.add_edge("a", END);
    assert!(matches!(graph.compile(), Err(CompilationError::MissingStart)));
}

/// **Scenario**: Two edges out of the same node fail compilation (branch).
#[test]
fn duplicate_outgoing_edge_fails() {
    let mut graph = StateGraph::<AgentState>::new();
    graph.add_node("a", Arc::new(NameNode::new("a")));
    graph.add_node("b", Arc::new(NameNode::new("b")));
    graph.add_node("c", Arc::new(NameNode::new("c")));
    graph.add_edge(START, "a");
    graph.add_edge("a", "b");
    graph.add_edge("a", "c");
    graph.add_edge("b", END);
    assert!(matches!(graph.compile(), Err(CompilationError::InvalidChain(_))));
}

/// **Scenario**: A conditional source may not also have a plain outgoing edge.
#[test]
fn conditional_and_plain_edge_conflict_fails() {
    let mut graph = StateGraph::<AgentState>::new();
    graph.add_node("a", Arc::new(NameNode::new("a")));
    graph.add_node("b", Arc::new(NameNode::new("b")));
    graph.add_edge(START, "a");
    graph.add_edge("a", "b");
    graph.add_edge("b", END);
    graph.add_conditional_edges("a", Arc::new(|_: &AgentState| "b".to_string()), None);
    assert!(matches!(
        graph.compile(),
        Err(CompilationError::NodeHasBothEdgeAndConditional(id)) if id == "a"
    ));
}
