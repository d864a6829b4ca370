//! Minimal agent trait: state in, state out.
//!
//! One step per run: receive state, return updated state. When
//! `Agent::State == S`, an agent can be used directly as a graph `Node<S>`
//! (see the blanket impl below).

use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::AgentError;
use crate::graph::{Next, Node};

/// Minimal agent: state in, state out (no separate Input/Output types).
///
/// The caller puts input (e.g. a user message) into state before calling and
/// reads output (e.g. the assistant reply) from the returned state. The state
/// type and its fields are defined by the implementer.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Display name of the agent (doubles as the node id in a graph).
    fn name(&self) -> &str;

    /// State type for this agent; must cross async boundaries.
    type State: Clone + Send + Sync + Debug + 'static;

    /// One step: receive state, return updated state.
    async fn run(&self, state: Self::State) -> Result<Self::State, AgentError>;
}

/// Any agent whose state type is `S` can be used as a graph node.
///
/// Allows `StateGraph::add_node("id", Arc::new(some_agent))` when the graph
/// state type matches the agent's state.
#[async_trait]
impl<S, A> Node<S> for A
where
    S: Clone + Send + Sync + Debug + 'static,
    A: Agent<State = S> + Send + Sync,
{
    fn id(&self) -> &str {
        self.name()
    }

    async fn run(&self, state: S) -> Result<(S, Next), AgentError> {
        Agent::run(self, state).await.map(|s| (s, Next::Continue))
    }
}
