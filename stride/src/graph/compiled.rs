//! Compiled state graph: immutable, supports invoke and stream.
//!
//! Built by `StateGraph::compile`. Holds nodes and a next-node map derived
//! from the explicit edges at compile time. The run loop advances one node at
//! a time, merging each node's output into the shared state, until a node
//! routes to END or the recursion limit aborts the run.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use crate::channels::BoxedStateUpdater;
use crate::error::AgentError;
use crate::stream::{StreamEvent, StreamMode};

use super::logging::{
    log_graph_complete, log_graph_error, log_graph_start, log_node_complete, log_node_start,
    log_node_state,
};
use super::node_middleware::NodeMiddleware;
use super::retry::RetryPolicy;
use super::state_graph::END;
use super::{Next, NextEntry, Node, RunContext, RunnableConfig};

/// Compiled graph: immutable structure, supports invoke and stream.
///
/// Runs from the first node (the single edge out of START); after each node,
/// uses the node's returned [`Next`] or the conditional router (when present)
/// to choose the next node. Node executions are counted against the config's
/// recursion limit; exceeding it is a fatal abort.
#[derive(Clone)]
pub struct CompiledStateGraph<S> {
    pub(super) nodes: HashMap<String, Arc<dyn Node<S>>>,
    /// First node to run (target of the START edge).
    pub(super) first_node_id: String,
    /// Map from node id to how the next node is found: Unconditional(to_id) or Conditional(router).
    pub(super) next_map: HashMap<String, NextEntry<S>>,
    /// Optional node middleware wrapping every node.run.
    pub(super) middleware: Option<Arc<dyn NodeMiddleware<S>>>,
    /// How node outputs are merged into state. Default replaces the state.
    pub(super) state_updater: BoxedStateUpdater<S>,
    /// Retry policy for node execution. Default is no retries.
    pub(super) retry_policy: RetryPolicy,
}

impl<S> CompiledStateGraph<S>
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Runs one node, retrying per the configured retry policy.
    async fn execute_node_with_retry(
        &self,
        node: Arc<dyn Node<S>>,
        state: S,
        run_ctx: &RunContext<S>,
    ) -> Result<(S, Next), AgentError> {
        let mut attempt = 0;
        loop {
            let current_state = state.clone();
            let result = if let Some(middleware) = &self.middleware {
                let node_id = node.id().to_string();
                let node_clone = node.clone();
                let ctx = run_ctx.clone();
                middleware
                    .around_run(
                        &node_id,
                        current_state,
                        Box::new(move |s| {
                            let node = node_clone.clone();
                            Box::pin(async move { node.run_with_context(s, &ctx).await })
                        }),
                    )
                    .await
            } else {
                node.run_with_context(current_state, run_ctx).await
            };

            match result {
                Ok(output) => return Ok(output),
                Err(e) => {
                    if self.retry_policy.should_retry(attempt) {
                        let delay = self.retry_policy.delay(attempt);
                        if delay > std::time::Duration::ZERO {
                            tokio::time::sleep(delay).await;
                        }
                        attempt += 1;
                        continue;
                    }
                    return Err(e);
                }
            }
        }
    }

    /// Shared run loop used by invoke() and stream().
    ///
    /// Counts node executions against the recursion limit; aborts with
    /// [`AgentError::RecursionLimit`] when the next execution would exceed it.
    async fn run_loop_inner(
        &self,
        state: &mut S,
        current_id: &mut String,
        run_ctx: &RunContext<S>,
    ) -> Result<(), AgentError> {
        let limit = run_ctx.config.effective_recursion_limit();
        let mut steps: u32 = 0;
        log_graph_start(run_ctx.config.run_name.as_deref());

        loop {
            if steps >= limit {
                let err = AgentError::RecursionLimit(limit);
                log_graph_error(&err);
                return Err(err);
            }
            steps += 1;

            let node = match self.nodes.get(current_id) {
                Some(n) => n.clone(),
                None => {
                    // A mapless conditional router can produce an id that was
                    // never registered; surface it instead of panicking.
                    let err =
                        AgentError::ExecutionFailed(format!("unknown node id: {}", current_id));
                    log_graph_error(&err);
                    return Err(err);
                }
            };

            log_node_start(current_id);
            log_node_state(current_id, state);

            if run_ctx.emits(StreamMode::Tasks) {
                run_ctx
                    .send(StreamEvent::TaskStart {
                        node_id: current_id.clone(),
                    })
                    .await;
            }

            let result = self
                .execute_node_with_retry(node, state.clone(), run_ctx)
                .await;

            let (new_state, next) = match result {
                Ok(output) => output,
                Err(e) => {
                    if run_ctx.emits(StreamMode::Tasks) {
                        run_ctx
                            .send(StreamEvent::TaskEnd {
                                node_id: current_id.clone(),
                                result: Err(e.to_string()),
                            })
                            .await;
                    }
                    log_graph_error(&e);
                    return Err(e);
                }
            };

            if run_ctx.emits(StreamMode::Tasks) {
                run_ctx
                    .send(StreamEvent::TaskEnd {
                        node_id: current_id.clone(),
                        result: Ok(()),
                    })
                    .await;
            }

            log_node_complete(current_id, &next);
            self.state_updater.apply_update(state, &new_state);

            if run_ctx.emits(StreamMode::Values) {
                run_ctx.send(StreamEvent::Values(state.clone())).await;
            }
            if run_ctx.emits(StreamMode::Updates) {
                run_ctx
                    .send(StreamEvent::Updates {
                        node_id: current_id.clone(),
                        state: state.clone(),
                    })
                    .await;
            }

            let next_id: Option<String> = match self.next_map.get(current_id) {
                Some(NextEntry::Conditional(router)) => {
                    let target = router.resolve_next(state);
                    tracing::debug!(from = %current_id, to = %target, "conditional routing");
                    Some(target)
                }
                Some(NextEntry::Unconditional(to_id)) => match next {
                    Next::End => None,
                    Next::Node(id) => Some(id),
                    Next::Continue => Some(to_id.clone()),
                },
                None => match next {
                    Next::Node(id) => Some(id),
                    _ => None,
                },
            };

            match next_id {
                Some(id) if id != END => *current_id = id,
                _ => {
                    log_graph_complete(steps);
                    return Ok(());
                }
            }
        }
    }

    /// Runs the graph with the given state and returns the final state.
    ///
    /// Starts at the first node; after each node, uses the returned `Next` or
    /// the conditional router to choose the next node. `config` carries the
    /// recursion limit; pass `None` for the default.
    pub async fn invoke(&self, state: S, config: Option<RunnableConfig>) -> Result<S, AgentError> {
        if self.nodes.is_empty() || !self.nodes.contains_key(&self.first_node_id) {
            return Err(AgentError::ExecutionFailed("empty graph".into()));
        }
        let run_ctx = RunContext::new(config.unwrap_or_default());
        let mut state = state;
        let mut current_id = self.first_node_id.clone();

        self.run_loop_inner(&mut state, &mut current_id, &run_ctx)
            .await?;

        Ok(state)
    }

    /// Streams graph execution, emitting events via a channel-backed stream.
    ///
    /// The run happens on a spawned task; dropping the returned stream
    /// abandons the run. A failed run (including a recursion-limit abort)
    /// ends with a terminal [`StreamEvent::Error`].
    pub fn stream(
        &self,
        state: S,
        config: Option<RunnableConfig>,
        stream_mode: impl Into<HashSet<StreamMode>>,
    ) -> ReceiverStream<StreamEvent<S>> {
        let (tx, rx) = mpsc::channel(128);
        let graph = self.clone();
        let mode_set: HashSet<StreamMode> = stream_mode.into();

        tokio::spawn(async move {
            let mut state = state;
            let mut current_id = graph.first_node_id.clone();
            let mut run_ctx = RunContext::new(config.unwrap_or_default());
            run_ctx.stream_tx = Some(tx.clone());
            run_ctx.stream_mode = mode_set;

            if graph.nodes.is_empty() || !graph.nodes.contains_key(&current_id) {
                let _ = tx.send(StreamEvent::Error("empty graph".into())).await;
                return;
            }

            if let Err(e) = graph
                .run_loop_inner(&mut state, &mut current_id, &run_ctx)
                .await
            {
                let _ = tx.send(StreamEvent::Error(e.to_string())).await;
            }
        });

        ReceiverStream::new(rx)
    }
}
