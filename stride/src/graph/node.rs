//! Graph node trait: one step in a StateGraph.
//!
//! Receives state `S`, returns updated `S` and [`Next`] (continue, jump, or
//! end). Agents can implement `Node<S>` when `Agent::State == S` (see the
//! blanket impl in `traits`).

use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::AgentError;

use super::{Next, RunContext};

/// One step in a graph: state in, (state out, next step).
///
/// The run loop uses the returned `Next` to choose the next node unless the
/// node has conditional edges, in which case the router decides from state.
#[async_trait]
pub trait Node<S>: Send + Sync
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Node id (e.g. `"planner"`, `"agent"`). Must be unique within a graph.
    fn id(&self) -> &str;

    /// One step: state in, (state out, next step).
    async fn run(&self, state: S) -> Result<(S, Next), AgentError>;

    /// Variant with run context (config, streaming). Default ignores the
    /// context and calls `run`.
    async fn run_with_context(
        &self,
        state: S,
        _ctx: &RunContext<S>,
    ) -> Result<(S, Next), AgentError> {
        self.run(state).await
    }
}
