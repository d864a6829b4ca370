//! Invoke semantics: ordering, custom state updaters, recursion limit.

use std::sync::Arc;

use async_trait::async_trait;

use stride::{
    AgentError, FieldBasedUpdater, Message, Next, Node, RunnableConfig, StateGraph, END, START,
};

use super::common::AgentState;

struct AppendNode {
    id: &'static str,
}

#[async_trait]
impl Node<AgentState> for AppendNode {
    fn id(&self) -> &str {
        self.id
    }

    async fn run(&self, state: AgentState) -> Result<(AgentState, Next), AgentError> {
        let mut messages = state.messages;
        messages.push(Message::assistant(self.id));
        Ok((AgentState { messages }, Next::Continue))
    }
}

/// **Scenario**: Nodes run in edge order and each sees the previous node's output.
#[tokio::test]
async fn nodes_run_in_edge_order() {
    let mut graph = StateGraph::<AgentState>::new();
    graph
        .add_node("one", Arc::new(AppendNode { id: "one" }))
        .add_node("two", Arc::new(AppendNode { id: "two" }))
        .add_edge(START, "one")
        .add_edge("one", "two")
        .add_edge("two", END);
    let compiled = graph.compile().expect("graph compiles");

    let out = compiled.invoke(AgentState::default(), None).await.unwrap();

    let ids: Vec<String> = out
        .messages
        .iter()
        .map(|m| match m {
            Message::Assistant(s) => s.clone(),
            other => panic!("unexpected message {:?}", other),
        })
        .collect();
    assert_eq!(ids, vec!["one".to_string(), "two".to_string()]);
}

/// **Scenario**: A custom state updater controls how node output merges into state.
/// Here updates append only the new tail message, so the node's full return is
/// merged through the updater rather than replacing the state.
#[tokio::test]
async fn custom_state_updater_is_applied() {
    let updater = FieldBasedUpdater::new(|current: &mut AgentState, update: &AgentState| {
        if let Some(last) = update.messages.last() {
            current.messages.push(last.clone());
        }
    });

    let mut graph = StateGraph::<AgentState>::new();
    graph
        .add_node("one", Arc::new(AppendNode { id: "one" }))
        .add_edge(START, "one")
        .add_edge("one", END);
    let compiled = graph
        .with_state_updater(Arc::new(updater))
        .compile()
        .expect("graph compiles");

    let mut initial = AgentState::default();
    initial.messages.push(Message::user("seed"));

    let out = compiled.invoke(initial, None).await.unwrap();

    // seed survives, and the updater appended only the node's tail message.
    assert_eq!(out.messages.len(), 2);
    assert!(matches!(&out.messages[0], Message::User(s) if s == "seed"));
    assert!(matches!(&out.messages[1], Message::Assistant(s) if s == "one"));
}

/// **Scenario**: The recursion limit bounds a conditional loop through the public API.
#[tokio::test]
async fn recursion_limit_bounds_loop() {
    let mut graph = StateGraph::<AgentState>::new();
    graph.add_node("loop", Arc::new(AppendNode { id: "loop" }));
    graph.add_edge(START, "loop");
    graph.add_conditional_edges(
        "loop",
        Arc::new(|_: &AgentState| "loop".to_string()),
        Some(
            [
                ("loop".to_string(), "loop".to_string()),
                (END.to_string(), END.to_string()),
            ]
            .into_iter()
            .collect(),
        ),
    );
    let compiled = graph.compile().expect("graph compiles");

    let result = compiled
        .invoke(
            AgentState::default(),
            Some(RunnableConfig::with_recursion_limit(4)),
        )
        .await;

    assert!(matches!(result, Err(AgentError::RecursionLimit(4))));
}
