//! Structured logging for graph execution events.

use std::fmt::Debug;

/// Log node execution start.
pub fn log_node_start(node_id: &str) {
    tracing::debug!(node_id = node_id, "starting node execution");
}

/// Log the input state of a node execution.
pub fn log_node_state<S: Debug>(node_id: &str, state: &S) {
    tracing::debug!(node_id = node_id, state = ?state, "node input state");
}

/// Log node execution completion.
pub fn log_node_complete(node_id: &str, next: &crate::graph::Next) {
    tracing::debug!(node_id = node_id, ?next, "node execution complete");
}

/// Log graph execution start.
pub fn log_graph_start(run_name: Option<&str>) {
    tracing::info!(run_name = run_name.unwrap_or("-"), "starting graph execution");
}

/// Log graph execution completion.
pub fn log_graph_complete(steps: u32) {
    tracing::info!(steps, "graph execution complete");
}

/// Log graph execution error.
pub fn log_graph_error(error: &crate::error::AgentError) {
    tracing::error!(?error, "graph execution error");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logging_functions_do_not_panic() {
        log_node_start("planner");
        log_node_state("planner", &());
        log_node_complete("planner", &crate::graph::Next::Continue);
        log_graph_start(Some("test-run"));
        log_graph_complete(3);
        log_graph_error(&crate::error::AgentError::ExecutionFailed("x".into()));
    }
}
