//! Replan node and the termination router.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::graph::{Next, Node, END};
use crate::llm::LlmClient;

use super::output::Act;
use super::planner::Replanner;
use super::state::PlanExecute;

/// "replan" node: asks the [`Replanner`] to finish or continue.
///
/// `Act::Respond` sets `response`; `Act::Plan` replaces `plan` with the
/// remaining steps. Exactly one of the two happens per invocation.
///
/// The replanner is trusted to return only steps that still need doing; if it
/// ever returns a step that was already completed, the loop will repeat that
/// work. Nothing here guards against that, matching the behavior this
/// workflow was built around.
pub struct ReplanNode {
    replanner: Replanner,
}

impl ReplanNode {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self {
            replanner: Replanner::new(llm),
        }
    }
}

#[async_trait]
impl Node<PlanExecute> for ReplanNode {
    fn id(&self) -> &str {
        "replan"
    }

    async fn run(&self, state: PlanExecute) -> Result<(PlanExecute, Next), AgentError> {
        let act = self.replanner.replan(&state).await?;
        let new_state = match act {
            Act::Respond { response } => PlanExecute {
                response: Some(response),
                ..state
            },
            Act::Plan { steps } => PlanExecute {
                plan: steps,
                ..state
            },
        };
        Ok((new_state, Next::Continue))
    }
}

/// Output of the [`should_end`] router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShouldEndResult {
    /// Continue: route back to the executor.
    Agent,
    /// Terminate: route to END.
    End,
}

impl ShouldEndResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Agent => "agent",
            Self::End => END,
        }
    }
}

/// Termination router: END iff `response` is present and non-empty.
///
/// Pure function of state, no side effects; wired as the conditional edge
/// from "replan".
pub fn should_end(state: &PlanExecute) -> ShouldEndResult {
    match &state.response {
        Some(response) if !response.is_empty() => ShouldEndResult::End,
        _ => ShouldEndResult::Agent,
    }
}
