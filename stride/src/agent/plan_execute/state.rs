//! Shared state for the plan-and-execute workflow.

use serde::{Deserialize, Serialize};

/// One completed step: the step description and what the executor produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastStep {
    /// The step description as it appeared in the plan.
    pub step: String,
    /// The executor's result text for the step.
    pub result: String,
}

/// Shared state flowing through planner → agent → replan.
///
/// - `input` is the original objective; nothing writes it after creation.
/// - `plan` is replaced wholesale by the planner and the replanner.
/// - `past_steps` is append-only; the execute node adds exactly one entry per run.
/// - `response` is set at most once, by the replan node; once present the
///   conditional edge routes to END and no further mutation occurs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanExecute {
    /// Original objective, immutable after creation.
    pub input: String,
    /// Remaining steps, in execution order.
    pub plan: Vec<String>,
    /// Completed (step, result) pairs, oldest first.
    pub past_steps: Vec<PastStep>,
    /// Final answer; presence terminates the loop.
    pub response: Option<String>,
}

impl PlanExecute {
    /// Initial state for a run: only the objective populated.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            plan: vec![],
            past_steps: vec![],
            response: None,
        }
    }
}
