//! Plan node: turn the objective into the initial plan.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::graph::{Next, Node};
use crate::llm::LlmClient;

use super::planner::Planner;
use super::state::PlanExecute;

/// "planner" node: calls the [`Planner`] with the objective and replaces
/// `plan`. No other field is touched.
pub struct PlanNode {
    planner: Planner,
}

impl PlanNode {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self {
            planner: Planner::new(llm),
        }
    }
}

#[async_trait]
impl Node<PlanExecute> for PlanNode {
    fn id(&self) -> &str {
        "planner"
    }

    async fn run(&self, state: PlanExecute) -> Result<(PlanExecute, Next), AgentError> {
        let plan = self.planner.plan(&state.input).await?;
        let new_state = PlanExecute {
            plan: plan.steps,
            ..state
        };
        Ok((new_state, Next::Continue))
    }
}
