//! Planner and replanner: structured-output wrappers around an LLM client.

use std::sync::Arc;

use crate::error::AgentError;
use crate::llm::LlmClient;
use crate::message::Message;

use super::output::{parse_act, parse_plan, Act, Plan};
use super::prompt::{replanner_prompt, PLANNER_SYSTEM_PROMPT};
use super::state::PlanExecute;

/// Planner: turns an objective into an ordered [`Plan`].
///
/// Composes the fixed planner instruction with the objective, invokes the
/// model once, and validates the JSON reply. Model failures and replies that
/// do not parse both propagate to the caller; there is no retry here.
pub struct Planner {
    llm: Arc<dyn LlmClient>,
}

impl Planner {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Produces the initial plan for the objective.
    pub async fn plan(&self, objective: &str) -> Result<Plan, AgentError> {
        let messages = vec![
            Message::system(PLANNER_SYSTEM_PROMPT),
            Message::user(objective),
        ];
        let response = self.llm.invoke(&messages).await?;
        parse_plan(response.content.trim())
    }
}

/// Replanner: decides whether to finish or continue with remaining steps.
///
/// Renders the replanner template over the full state (objective, current
/// plan, completed steps) and validates the reply into an [`Act`].
pub struct Replanner {
    llm: Arc<dyn LlmClient>,
}

impl Replanner {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Produces the terminal-or-continue decision for the current state.
    pub async fn replan(&self, state: &PlanExecute) -> Result<Act, AgentError> {
        let messages = vec![Message::user(replanner_prompt(state))];
        let response = self.llm.invoke(&messages).await?;
        parse_act(response.content.trim())
    }
}
