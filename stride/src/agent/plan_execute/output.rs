//! Structured outputs of the planner and replanner.
//!
//! The prompts instruct the model to reply with JSON only; parsing validates
//! the shape against [`Plan`] or [`Act`]. A reply that does not parse is a
//! model-call failure, not something to silently repair.

use serde::{Deserialize, Serialize};

use crate::error::AgentError;

/// Ordered list of step descriptions; order is execution order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Steps to follow, in order.
    pub steps: Vec<String>,
}

/// Replanner decision: finish with an answer, or continue with remaining steps.
///
/// Serialized with an `action` tag so the model's JSON names the variant:
/// `{"action": "respond", "response": "..."}` or
/// `{"action": "plan", "steps": ["..."]}`. Consumers match exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Act {
    /// Terminal answer; the loop ends.
    Respond { response: String },
    /// Remaining steps only; the loop continues.
    Plan { steps: Vec<String> },
}

/// Strips an optional markdown code fence around a JSON reply.
///
/// Models regularly wrap JSON in ```json fences even when told not to; the
/// content inside is still validated strictly.
fn extract_json(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

/// Parses the planner's reply into a [`Plan`].
pub fn parse_plan(raw: &str) -> Result<Plan, AgentError> {
    let json = extract_json(raw);
    serde_json::from_str(json).map_err(|e| {
        AgentError::ExecutionFailed(format!(
            "planner returned invalid JSON: {} (reply: {})",
            e,
            truncate(raw, 200)
        ))
    })
}

/// Parses the replanner's reply into an [`Act`].
pub fn parse_act(raw: &str) -> Result<Act, AgentError> {
    let json = extract_json(raw);
    serde_json::from_str(json).map_err(|e| {
        AgentError::ExecutionFailed(format!(
            "replanner returned invalid JSON: {} (reply: {})",
            e,
            truncate(raw, 200)
        ))
    })
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", s.chars().take(max_len).collect::<String>())
    }
}
