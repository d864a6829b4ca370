//! Plan-and-execute workflow: plan → execute → replan until a response.
//!
//! Given a natural-language objective, the planner produces an ordered step
//! list, the executor (a tool-using agent) carries out the first step, and
//! the replanner either emits the remaining steps or finishes with the final
//! answer. The loop is a [`StateGraph`](crate::graph::StateGraph) over
//! [`PlanExecute`] with one conditional branch, bounded by the run config's
//! recursion limit.
//!
//! # Main types
//!
//! - **[`PlanExecute`]**: shared state (`input`, `plan`, `past_steps`, `response`).
//! - **[`Plan`] / [`Act`]**: structured outputs of the planner and replanner.
//! - **[`PlanNode`] / [`ExecuteNode`] / [`ReplanNode`]**: the three state transitions.
//! - **[`should_end`]**: termination router wired as the conditional edge.
//! - **[`PlanExecuteRunner`]**: graph build, invoke, and streaming.
//! - **[`build_plan_execute_runner`]**: config-driven construction
//!   ([`PlanExecuteBuildConfig::from_env`] for env-based setup).

mod build;
mod execute_node;
mod output;
mod plan_node;
mod planner;
mod prompt;
mod replan_node;
mod runner;
mod state;

pub use build::{
    build_plan_execute_runner, BuildRunnerError, PlanExecuteBuildConfig, DEFAULT_MODEL,
};
pub use execute_node::ExecuteNode;
pub use output::{parse_act, parse_plan, Act, Plan};
pub use plan_node::PlanNode;
pub use planner::{Planner, Replanner};
pub use prompt::{format_plan, format_task, replanner_prompt, PLANNER_SYSTEM_PROMPT};
pub use replan_node::{should_end, ReplanNode, ShouldEndResult};
pub use runner::PlanExecuteRunner;
pub use state::{PastStep, PlanExecute};
