//! Agent module: the tool-using executor and the plan-and-execute workflow.
//!
//! [`react`](self::react) holds the executor nodes (Think, Act, Observe) and
//! graph builder; [`plan_execute`](self::plan_execute) holds the
//! planner/replanner, the workflow nodes, and the runner.

pub mod plan_execute;
pub mod react;

use thiserror::Error;

use crate::error::AgentError;
use crate::graph::CompilationError;

/// Error from building or running an agent graph.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("compilation failed: {0}")]
    Compilation(#[from] CompilationError),
    #[error("execution failed: {0}")]
    Execution(#[from] AgentError),
    #[error("run failed while streaming: {0}")]
    StreamFailed(String),
    #[error("stream ended without final state")]
    StreamEndedWithoutState,
}

pub use plan_execute::{
    build_plan_execute_runner, should_end, Act, ExecuteNode, PastStep, Plan, PlanExecute,
    PlanExecuteBuildConfig, PlanExecuteRunner, PlanNode, Planner, ReplanNode, Replanner,
    ShouldEndResult,
};
pub use react::{
    build_react_graph, run_agent, tools_condition, ActNode, HandleToolErrors, ObserveNode,
    ThinkNode, ToolsConditionResult, MAX_REACT_TURNS, REACT_SYSTEM_PROMPT,
};
