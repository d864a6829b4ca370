//! A compiled graph embedded as a single node of an outer graph.
//!
//! This is the pattern the plan-and-execute ExecuteNode uses: the executor is
//! a compiled graph invoked from inside one node of the workflow graph.

use std::sync::Arc;

use async_trait::async_trait;

use stride::{
    AgentError, CompiledStateGraph, Message, Next, Node, StateGraph, END, START,
};

use super::common::AgentState;

struct TagNode {
    id: &'static str,
}

#[async_trait]
impl Node<AgentState> for TagNode {
    fn id(&self) -> &str {
        self.id
    }
    async fn run(&self, state: AgentState) -> Result<(AgentState, Next), AgentError> {
        let mut messages = state.messages;
        messages.push(Message::assistant(self.id));
        Ok((AgentState { messages }, Next::Continue))
    }
}

/// Wrapper node that runs a compiled subgraph with the current state.
struct SubgraphNode {
    id: &'static str,
    inner: CompiledStateGraph<AgentState>,
}

#[async_trait]
impl Node<AgentState> for SubgraphNode {
    fn id(&self) -> &str {
        self.id
    }
    async fn run(&self, state: AgentState) -> Result<(AgentState, Next), AgentError> {
        let new_state = self.inner.invoke(state, None).await?;
        Ok((new_state, Next::Continue))
    }
}

fn build_inner() -> CompiledStateGraph<AgentState> {
    let mut graph = StateGraph::<AgentState>::new();
    graph
        .add_node("inner", Arc::new(TagNode { id: "inner" }))
        .add_edge(START, "inner")
        .add_edge("inner", END);
    graph.compile().expect("inner graph compiles")
}

/// **Scenario**: Outer runs a1, then the subgraph as a node, then a2; the
/// subgraph's state changes are visible downstream.
#[tokio::test]
async fn subgraph_runs_as_single_outer_node() {
    let inner = build_inner();

    let mut outer = StateGraph::<AgentState>::new();
    outer
        .add_node("a1", Arc::new(TagNode { id: "a1" }))
        .add_node(
            "sub",
            Arc::new(SubgraphNode {
                id: "sub",
                inner,
            }),
        )
        .add_node("a2", Arc::new(TagNode { id: "a2" }))
        .add_edge(START, "a1")
        .add_edge("a1", "sub")
        .add_edge("sub", "a2")
        .add_edge("a2", END);
    let compiled = outer.compile().expect("outer graph compiles");

    let out = compiled.invoke(AgentState::default(), None).await.unwrap();

    let ids: Vec<String> = out
        .messages
        .iter()
        .map(|m| match m {
            Message::Assistant(s) => s.clone(),
            other => panic!("unexpected message {:?}", other),
        })
        .collect();
    assert_eq!(
        ids,
        vec!["a1".to_string(), "inner".to_string(), "a2".to_string()]
    );
}
