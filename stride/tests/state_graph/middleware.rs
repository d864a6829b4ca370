//! Node middleware wiring through the public API.

use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use stride::{AgentError, NameNode, Next, NodeMiddleware, StateGraph, END, START};

use super::common::AgentState;

/// Counts how many node executions the middleware wrapped.
#[derive(Default)]
struct CountingMiddleware {
    calls: AtomicUsize,
}

#[async_trait]
impl NodeMiddleware<AgentState> for CountingMiddleware {
    async fn around_run(
        &self,
        _node_id: &str,
        state: AgentState,
        inner: Box<
            dyn FnOnce(
                    AgentState,
                ) -> Pin<
                    Box<
                        dyn std::future::Future<Output = Result<(AgentState, Next), AgentError>>
                            + Send,
                    >,
                > + Send,
        >,
    ) -> Result<(AgentState, Next), AgentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        inner(state).await
    }
}

/// **Scenario**: Middleware set via with_middleware wraps every node execution.
#[tokio::test]
async fn middleware_wraps_each_node() {
    let middleware = Arc::new(CountingMiddleware::default());

    let mut graph = StateGraph::<AgentState>::new();
    graph
        .add_node("a", Arc::new(NameNode::new("a")))
        .add_node("b", Arc::new(NameNode::new("b")))
        .add_edge(START, "a")
        .add_edge("a", "b")
        .add_edge("b", END);
    let compiled = graph
        .with_middleware(middleware.clone())
        .compile()
        .expect("graph compiles");

    compiled
        .invoke(AgentState::default(), None)
        .await
        .expect("invoke");

    assert_eq!(middleware.calls.load(Ordering::SeqCst), 2);
}
