//! Prompts for the planner, the replanner, and the executor task framing.

use super::state::PlanExecute;

/// System prompt for the planner.
///
/// Asks for a minimal ordered plan whose final step yields the final answer,
/// as JSON matching [`Plan`](super::Plan).
pub const PLANNER_SYSTEM_PROMPT: &str = r#"For the given objective, come up with a simple step by step plan. This plan should involve individual tasks, that if executed correctly will yield the correct answer. Do not add any superfluous steps. The result of the final step should be the final answer. Make sure that each step has all the information needed - do not skip steps.

Output format (JSON only, no extra text):
{"steps": ["step 1", "step 2"]}"#;

/// Renders the numbered plan the way the executor and the replanner see it.
pub fn format_plan(plan: &[String]) -> String {
    plan.iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the task message for the executor: the full plan for context plus
/// the instruction to execute step 1.
pub fn format_task(plan: &[String]) -> String {
    let plan_str = format_plan(plan);
    let task = &plan[0];
    format!(
        "For the following plan:\n{}\n\nYou are tasked with executing step 1, {}.",
        plan_str, task
    )
}

/// Renders the replanner prompt: objective, original plan, completed steps,
/// and the instruction to either respond or emit only the remaining steps,
/// as JSON matching [`Act`](super::Act).
pub fn replanner_prompt(state: &PlanExecute) -> String {
    let past_steps = state
        .past_steps
        .iter()
        .map(|p| format!("{}: {}", p.step, p.result))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        r#"For the given objective, come up with a simple step by step plan. This plan should involve individual tasks, that if executed correctly will yield the correct answer. Do not add any superfluous steps. The result of the final step should be the final answer. Make sure that each step has all the information needed - do not skip steps.

Your objective was this:
{}

Your original plan was this:
{}

You have currently done the follow steps:
{}

Update your plan accordingly. If no more steps are needed and you can return to the user, then respond with that. Otherwise, fill out the plan. Only add steps to the plan that still NEED to be done. Do not return previously done steps as part of the plan.

Output format (JSON only, no extra text), one of:
{{"action": "respond", "response": "final answer"}}
{{"action": "plan", "steps": ["remaining step"]}}"#,
        state.input,
        format_plan(&state.plan),
        past_steps
    )
}
