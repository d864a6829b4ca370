//! Agent execution error types.
//!
//! Used by graph nodes, the LLM clients, and the compiled graph run loop.

use thiserror::Error;

/// Agent execution error.
///
/// Returned by `Node::run` and `CompiledStateGraph::invoke` when a step fails.
/// Model and tool failures are collapsed into `ExecutionFailed`; the run loop
/// raises `RecursionLimit` when a run exceeds its configured step budget.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Execution failed with a message (e.g. LLM call failed, tool error,
    /// structured output that did not parse).
    #[error("execution failed: {0}")]
    ExecutionFailed(String),

    /// The run executed more nodes than the configured recursion limit allows.
    ///
    /// Raised by the graph run loop before the next node would run. This is a
    /// fatal abort of the run, not a recoverable condition; it exists to stop
    /// an unbounded execute/replan cycle.
    #[error("recursion limit of {0} reached without hitting a stop condition")]
    RecursionLimit(u32),
}
