//! # Stride
//!
//! Plan-and-execute agents in Rust with a **state-in, state-out** design: one
//! shared state type flows through the nodes of a compiled graph, and each
//! node is a single async step.
//!
//! The flagship workflow is plan-and-execute
//! ([`agent::plan_execute`]): a planner turns an objective into an ordered
//! step list, a tool-using executor ([`agent::react`]) carries out the first
//! step, and a replanner decides whether to continue with the remaining steps
//! or finish with the final answer. The loop runs until the replanner
//! responds or the per-run recursion limit aborts it.
//!
//! ## Main modules
//!
//! - [`graph`]: [`StateGraph`], [`CompiledStateGraph`], [`Node`], [`Next`],
//!   conditional edges, [`RunnableConfig`] (recursion limit), streaming,
//!   [`RetryPolicy`], [`NodeMiddleware`], DOT/text visualization.
//! - [`agent`]: [`PlanExecuteRunner`], the plan/execute/replan nodes and
//!   [`should_end`]; the ReAct executor ([`ThinkNode`], [`ActNode`],
//!   [`ObserveNode`], [`run_agent`]).
//! - [`llm`]: [`LlmClient`] trait, [`ChatOpenAI`], [`MockLlm`].
//! - [`tool_source`] / [`tools`]: [`ToolSource`], [`ToolSpec`],
//!   [`ToolRegistry`], [`AggregateToolSource`], [`WebFetcherTool`].
//! - [`message`]: [`Message`] (System / User / Assistant).
//! - [`state`]: [`ReActState`], [`ToolCall`], [`ToolResult`].
//! - [`stream`]: [`StreamEvent`], [`StreamMode`] for graph runs.
//! - [`channels`]: [`StateUpdater`], [`ReplaceUpdater`], [`FieldBasedUpdater`].
//! - [`traits`]: the minimal [`Agent`] trait (usable directly as a graph node).
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use stride::{MockLlm, MockToolSource, PlanExecuteRunner, RunnableConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let planner_llm = Arc::new(MockLlm::with_no_tool_calls(r#"{"steps": ["answer"]}"#));
//! let executor_llm = Arc::new(MockLlm::with_no_tool_calls("the answer"));
//! let runner = PlanExecuteRunner::new(
//!     planner_llm,
//!     executor_llm,
//!     Box::new(MockToolSource::new()),
//!     Some(RunnableConfig::with_recursion_limit(10)),
//!     false,
//! )?;
//! let final_state = runner.invoke("Where does Asia's Richest Woman Live?").await?;
//! println!("{:?}", final_state.response);
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod channels;
pub mod error;
pub mod graph;
pub mod llm;
pub mod message;
pub mod state;
pub mod stream;
pub mod tool_source;
pub mod tools;
pub mod traits;

pub use agent::{
    build_plan_execute_runner, build_react_graph, run_agent, should_end, tools_condition, Act,
    ActNode, ExecuteNode, HandleToolErrors, ObserveNode, PastStep, Plan, PlanExecute,
    PlanExecuteBuildConfig, PlanExecuteRunner, PlanNode, Planner, ReplanNode, Replanner, RunError,
    ShouldEndResult, ThinkNode, ToolsConditionResult, MAX_REACT_TURNS, REACT_SYSTEM_PROMPT,
};
pub use channels::{BoxedStateUpdater, FieldBasedUpdater, ReplaceUpdater, StateUpdater};
pub use error::AgentError;
pub use graph::{
    generate_dot, generate_text, CompilationError, CompiledStateGraph, LoggingNodeMiddleware,
    NameNode, Next, Node, NodeMiddleware, RetryPolicy, RunContext, RunnableConfig, StateGraph,
    DEFAULT_RECURSION_LIMIT, END, START,
};
pub use llm::{ChatOpenAI, LlmClient, LlmResponse, LlmUsage, MockLlm, ToolChoiceMode};
pub use message::Message;
pub use state::{ReActState, ToolCall, ToolResult};
pub use stream::{StreamEvent, StreamMode};
pub use tool_source::{
    MockToolSource, ToolCallContent, ToolSource, ToolSourceError, ToolSpec, WebToolsSource,
};
pub use tools::{AggregateToolSource, Tool, ToolRegistry, WebFetcherTool, TOOL_WEB_FETCHER};
pub use traits::Agent;
