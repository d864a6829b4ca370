//! Plan-and-execute runner: graph build, initial state, invoke and stream.

use std::collections::HashMap;
use std::sync::Arc;

use tokio_stream::StreamExt;

use crate::agent::react::{build_react_graph, REACT_SYSTEM_PROMPT};
use crate::agent::RunError;
use crate::graph::{
    CompilationError, CompiledStateGraph, LoggingNodeMiddleware, RunnableConfig, StateGraph, END,
    START,
};
use crate::llm::LlmClient;
use crate::stream::{StreamEvent, StreamMode};
use crate::tool_source::ToolSource;

use super::execute_node::ExecuteNode;
use super::plan_node::PlanNode;
use super::replan_node::{should_end, ReplanNode};
use super::state::PlanExecute;

/// Holds the compiled workflow graph and drives runs over it.
///
/// Graph shape: START → planner → agent → replan, with a conditional edge
/// from replan back to agent (no response yet) or to END (response present).
pub struct PlanExecuteRunner {
    compiled: CompiledStateGraph<PlanExecute>,
    runnable_config: Option<RunnableConfig>,
}

impl PlanExecuteRunner {
    /// Wires and compiles the workflow graph.
    ///
    /// `planner_llm` serves the planner and replanner (plain completions);
    /// `executor_llm` serves the executor's think node and should have the
    /// tool specs from `tool_source` bound so the model can emit matching
    /// tool_calls. `verbose` wraps every node with enter/exit logging.
    pub fn new(
        planner_llm: Arc<dyn LlmClient>,
        executor_llm: Arc<dyn LlmClient>,
        tool_source: Box<dyn ToolSource>,
        runnable_config: Option<RunnableConfig>,
        verbose: bool,
    ) -> Result<Self, CompilationError> {
        let executor = build_react_graph(executor_llm, tool_source)?;

        let plan = PlanNode::new(Arc::clone(&planner_llm));
        let execute = ExecuteNode::new(executor, REACT_SYSTEM_PROMPT);
        let replan = ReplanNode::new(planner_llm);

        let replan_path_map: HashMap<String, String> =
            [("agent".into(), "agent".into()), (END.into(), END.into())]
                .into_iter()
                .collect();

        let mut graph = StateGraph::<PlanExecute>::new();
        graph
            .add_node("planner", Arc::new(plan))
            .add_node("agent", Arc::new(execute))
            .add_node("replan", Arc::new(replan))
            .add_edge(START, "planner")
            .add_edge("planner", "agent")
            .add_edge("agent", "replan")
            .add_conditional_edges(
                "replan",
                Arc::new(|state: &PlanExecute| should_end(state).as_str().to_string()),
                Some(replan_path_map),
            );

        let graph = if verbose {
            graph.with_middleware(Arc::new(LoggingNodeMiddleware::<PlanExecute>::default()))
        } else {
            graph
        };

        Ok(Self {
            compiled: graph.compile()?,
            runnable_config,
        })
    }

    /// The compiled graph (e.g. for visualization via `generate_dot`).
    pub fn compiled(&self) -> &CompiledStateGraph<PlanExecute> {
        &self.compiled
    }

    /// Runs the workflow to completion and returns the final state.
    ///
    /// The final state's `response` is the answer; a recursion-limit abort or
    /// any node failure surfaces as `RunError::Execution`.
    pub async fn invoke(&self, objective: &str) -> Result<PlanExecute, RunError> {
        let state = PlanExecute::new(objective);
        let final_state = self
            .compiled
            .invoke(state, self.runnable_config.clone())
            .await?;
        Ok(final_state)
    }

    /// Runs the workflow in streaming mode, forwarding every event to
    /// `on_event`, and returns the final state.
    ///
    /// The final state is taken from the last `Values` event. A run that
    /// aborts (node failure, recursion limit) ends with a terminal `Error`
    /// event, returned here as `RunError::StreamFailed`.
    pub async fn stream_with_callback<F>(
        &self,
        objective: &str,
        mut on_event: Option<F>,
    ) -> Result<PlanExecute, RunError>
    where
        F: FnMut(StreamEvent<PlanExecute>),
    {
        let state = PlanExecute::new(objective);
        let mut stream =
            self.compiled
                .stream(state, self.runnable_config.clone(), StreamMode::all());

        let mut final_state: Option<PlanExecute> = None;
        let mut failure: Option<String> = None;
        while let Some(event) = stream.next().await {
            if let Some(ref mut f) = on_event {
                f(event.clone());
            }
            match event {
                StreamEvent::Values(s) => final_state = Some(s),
                StreamEvent::Error(msg) => failure = Some(msg),
                _ => {}
            }
        }

        match failure {
            Some(msg) => Err(RunError::StreamFailed(msg)),
            None => final_state.ok_or(RunError::StreamEndedWithoutState),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{LlmResponse, MockLlm};
    use crate::tool_source::MockToolSource;

    fn runner_with_script(script: Vec<LlmResponse>) -> PlanExecuteRunner {
        // The executor answers each delegated step with plain text.
        let executor_llm = Arc::new(MockLlm::with_no_tool_calls("step result"));
        let planner_llm = Arc::new(MockLlm::from_responses(script));
        PlanExecuteRunner::new(
            planner_llm,
            executor_llm,
            Box::new(MockToolSource::new()),
            Some(RunnableConfig::with_recursion_limit(10)),
            false,
        )
        .expect("runner compiles")
    }

    /// **Scenario**: Two-step plan; first replan shrinks the plan, second
    /// responds. The run terminates with the response and two past steps.
    #[tokio::test]
    async fn invoke_runs_plan_execute_replan_to_response() {
        let runner = runner_with_script(vec![
            LlmResponse::text(r#"{"steps": ["identify the person", "find the city"]}"#),
            LlmResponse::text(r#"{"action": "plan", "steps": ["find the city"]}"#),
            LlmResponse::text(r#"{"action": "respond", "response": "Mumbai"}"#),
        ]);

        let final_state = runner.invoke("Where does Asia's Richest Woman Live?").await.unwrap();

        assert_eq!(final_state.response.as_deref(), Some("Mumbai"));
        assert_eq!(final_state.past_steps.len(), 2);
        assert_eq!(final_state.past_steps[0].step, "identify the person");
        assert_eq!(final_state.past_steps[1].step, "find the city");
    }

    /// **Scenario**: The plan shrinks monotonically across replan cycles.
    #[tokio::test]
    async fn plan_shrinks_across_iterations() {
        let runner = runner_with_script(vec![
            LlmResponse::text(r#"{"steps": ["a", "b", "c"]}"#),
            LlmResponse::text(r#"{"action": "plan", "steps": ["b", "c"]}"#),
            LlmResponse::text(r#"{"action": "plan", "steps": ["c"]}"#),
            LlmResponse::text(r#"{"action": "respond", "response": "done"}"#),
        ]);

        let mut plan_lengths = vec![];
        let final_state = runner
            .stream_with_callback(
                "objective",
                Some(|event: StreamEvent<PlanExecute>| {
                    if let StreamEvent::Updates { node_id, state } = event {
                        if node_id == "replan" && state.response.is_none() {
                            plan_lengths.push(state.plan.len());
                        }
                    }
                }),
            )
            .await
            .unwrap();

        assert_eq!(plan_lengths, vec![2, 1]);
        assert_eq!(final_state.response.as_deref(), Some("done"));
    }

    /// **Scenario**: A replanner that never responds hits the recursion limit;
    /// the abort is fatal and no response is produced.
    #[tokio::test]
    async fn never_ending_replan_hits_recursion_limit() {
        // Planner emits one step; every replan returns the same step again.
        let mut script = vec![LlmResponse::text(r#"{"steps": ["spin"]}"#)];
        for _ in 0..8 {
            script.push(LlmResponse::text(r#"{"action": "plan", "steps": ["spin"]}"#));
        }
        let runner = runner_with_script(script);

        let err = runner.invoke("objective").await.unwrap_err();
        match err {
            RunError::Execution(crate::error::AgentError::RecursionLimit(limit)) => {
                assert_eq!(limit, 10)
            }
            other => panic!("expected RecursionLimit abort, got {:?}", other),
        }
    }

    /// **Scenario**: The streaming path surfaces the recursion-limit abort
    /// as StreamFailed after a terminal Error event.
    #[tokio::test]
    async fn stream_surfaces_recursion_limit_failure() {
        let mut script = vec![LlmResponse::text(r#"{"steps": ["spin"]}"#)];
        for _ in 0..8 {
            script.push(LlmResponse::text(r#"{"action": "plan", "steps": ["spin"]}"#));
        }
        let runner = runner_with_script(script);

        let mut saw_error_event = false;
        let err = runner
            .stream_with_callback(
                "objective",
                Some(|event: StreamEvent<PlanExecute>| {
                    if matches!(event, StreamEvent::Error(_)) {
                        saw_error_event = true;
                    }
                }),
            )
            .await
            .unwrap_err();

        assert!(saw_error_event);
        match err {
            RunError::StreamFailed(msg) => assert!(msg.contains("recursion limit"), "{}", msg),
            other => panic!("expected StreamFailed, got {:?}", other),
        }
    }

    /// **Scenario**: Once the response is set, the run stops; no further
    /// plan/past_steps mutation is observable after the terminal update.
    #[tokio::test]
    async fn response_terminates_run_immediately() {
        let runner = runner_with_script(vec![
            LlmResponse::text(r#"{"steps": ["only step"]}"#),
            LlmResponse::text(r#"{"action": "respond", "response": "answer"}"#),
        ]);

        let mut events_after_response = 0;
        let mut response_seen = false;
        let final_state = runner
            .stream_with_callback(
                "objective",
                Some(|event: StreamEvent<PlanExecute>| {
                    if let StreamEvent::Updates { state, .. } = &event {
                        if response_seen {
                            events_after_response += 1;
                        }
                        if state.response.is_some() {
                            response_seen = true;
                        }
                    }
                }),
            )
            .await
            .unwrap();

        assert_eq!(events_after_response, 0);
        assert_eq!(final_state.response.as_deref(), Some("answer"));
        assert_eq!(final_state.past_steps.len(), 1);
    }
}
