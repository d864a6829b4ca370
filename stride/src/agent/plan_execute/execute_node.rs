//! Execute node: run the first plan step through the tool-using executor.

use async_trait::async_trait;

use crate::error::AgentError;
use crate::graph::{CompiledStateGraph, Next, Node};
use crate::state::ReActState;

use super::prompt::format_task;
use super::state::{PastStep, PlanExecute};

/// "agent" node: executes exactly `plan[0]` through the executor subgraph.
///
/// The executor runs as a graph-within-a-node: the compiled think/act/observe
/// graph is invoked with a fresh conversation framing the full plan and the
/// step to execute. Only `past_steps` grows; `plan` is never touched here,
/// since advancing the plan is the replanner's job.
///
/// An empty `plan` is invalid input and is rejected; the planner and
/// replanner are the only writers of `plan`, so reaching this node with
/// nothing to execute means the loop was wired or replanned incorrectly.
pub struct ExecuteNode {
    executor: CompiledStateGraph<ReActState>,
    system_prompt: String,
}

impl ExecuteNode {
    pub fn new(executor: CompiledStateGraph<ReActState>, system_prompt: impl Into<String>) -> Self {
        Self {
            executor,
            system_prompt: system_prompt.into(),
        }
    }
}

#[async_trait]
impl Node<PlanExecute> for ExecuteNode {
    fn id(&self) -> &str {
        "agent"
    }

    async fn run(&self, state: PlanExecute) -> Result<(PlanExecute, Next), AgentError> {
        if state.plan.is_empty() {
            return Err(AgentError::ExecutionFailed(
                "execute step requires a non-empty plan".to_string(),
            ));
        }

        let task = state.plan[0].clone();
        let task_formatted = format_task(&state.plan);

        let initial = ReActState::with_task(&self.system_prompt, &task_formatted);
        let final_state = self.executor.invoke(initial, None).await?;
        let result = final_state.last_assistant_reply().unwrap_or_default();

        let mut past_steps = state.past_steps;
        past_steps.push(PastStep { step: task, result });

        let new_state = PlanExecute {
            past_steps,
            ..state
        };
        Ok((new_state, Next::Continue))
    }
}
