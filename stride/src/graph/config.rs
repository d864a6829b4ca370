//! Per-run configuration for graph execution.
//!
//! Passed to `CompiledStateGraph::invoke` / `stream`. The recursion limit
//! bounds how many nodes a single run may execute; exceeding it aborts the
//! run with [`AgentError::RecursionLimit`](crate::error::AgentError).

/// Default recursion limit when the config does not set one.
pub const DEFAULT_RECURSION_LIMIT: u32 = 25;

/// Configuration for one graph run.
///
/// All construction sites pass this explicitly; there is no process-wide
/// default beyond [`DEFAULT_RECURSION_LIMIT`].
#[derive(Clone, Debug, Default)]
pub struct RunnableConfig {
    /// Maximum node executions for the run. `None` uses [`DEFAULT_RECURSION_LIMIT`].
    pub recursion_limit: Option<u32>,
    /// Optional label included in run logs.
    pub run_name: Option<String>,
}

impl RunnableConfig {
    /// Config with the given recursion limit.
    pub fn with_recursion_limit(limit: u32) -> Self {
        Self {
            recursion_limit: Some(limit),
            run_name: None,
        }
    }

    /// The limit to enforce for a run under this config.
    pub fn effective_recursion_limit(&self) -> u32 {
        self.recursion_limit.unwrap_or(DEFAULT_RECURSION_LIMIT)
    }
}
