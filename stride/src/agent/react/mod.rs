//! ReAct executor: the tool-using agent behind the workflow's "agent" node.
//!
//! Three nodes form a loop: think (LLM turn) → act (run tool_calls) →
//! observe (merge results, loop or end). A conditional edge after think
//! routes straight to END when the LLM requested no tools.

mod act_node;
mod observe_node;
mod think_node;

pub use act_node::{ActNode, HandleToolErrors, DEFAULT_EXECUTION_ERROR_TEMPLATE};
pub use observe_node::{ObserveNode, MAX_REACT_TURNS};
pub use think_node::ThinkNode;

use std::collections::HashMap;
use std::sync::Arc;

use crate::graph::{CompilationError, CompiledStateGraph, StateGraph, END, START};
use crate::llm::LlmClient;
use crate::state::ReActState;
use crate::tool_source::ToolSource;

use super::RunError;

/// System prompt for the executor.
pub const REACT_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that can answer questions and help with tasks.";

/// Output of the [`tools_condition`] router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolsConditionResult {
    /// Route to the tool execution node.
    Tools,
    /// Route to END.
    End,
}

impl ToolsConditionResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tools => "tools",
            Self::End => END,
        }
    }
}

/// Conditional routing after think: tools pending → act, otherwise END.
pub fn tools_condition(state: &ReActState) -> ToolsConditionResult {
    if state.tool_calls.is_empty() {
        ToolsConditionResult::End
    } else {
        ToolsConditionResult::Tools
    }
}

/// Builds the executor graph: think → act → observe with a loop back to think.
///
/// Tool errors are turned into error-text results
/// (`HandleToolErrors::Always`) so the LLM can correct itself instead of
/// failing the whole workflow run.
pub fn build_react_graph(
    llm: Arc<dyn LlmClient>,
    tool_source: Box<dyn ToolSource>,
) -> Result<CompiledStateGraph<ReActState>, CompilationError> {
    let think = ThinkNode::new(llm);
    let act = ActNode::new(tool_source).with_handle_tool_errors(HandleToolErrors::Always(None));
    let observe = ObserveNode::with_loop();

    let think_path_map: HashMap<String, String> =
        [("tools".into(), "act".into()), (END.into(), END.into())]
            .into_iter()
            .collect();

    let mut graph = StateGraph::<ReActState>::new();
    graph
        .add_node("think", Arc::new(think))
        .add_node("act", Arc::new(act))
        .add_node("observe", Arc::new(observe))
        .add_edge(START, "think")
        .add_conditional_edges(
            "think",
            Arc::new(|state: &ReActState| tools_condition(state).as_str().to_string()),
            Some(think_path_map),
        )
        .add_edge("act", "observe")
        .add_edge("observe", "think");

    graph.compile()
}

/// Convenience path: run the executor once with a user query.
///
/// Builds the graph, seeds the state with the system prompt and query, and
/// returns the final state; read the reply with
/// [`ReActState::last_assistant_reply`]. Not used by the plan-and-execute
/// loop, which drives the compiled graph through [`ExecuteNode`](super::ExecuteNode).
pub async fn run_agent(
    llm: Arc<dyn LlmClient>,
    tool_source: Box<dyn ToolSource>,
    query: &str,
) -> Result<ReActState, RunError> {
    let compiled = build_react_graph(llm, tool_source)?;
    let state = ReActState::with_task(REACT_SYSTEM_PROMPT, query);
    let final_state = compiled.invoke(state, None).await?;
    Ok(final_state)
}
