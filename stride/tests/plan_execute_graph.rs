//! Integration tests for the plan-and-execute workflow through the public API.
//!
//! All runs use scripted mock LLMs: one script for the planner/replanner, a
//! separate mock for the executor. Scenarios cover the testable properties of
//! the loop: termination on response, monotonic plan shrink, append-only
//! past_steps, tool use inside a step, and the recursion-limit abort.

use std::sync::Arc;

use stride::{
    AgentError, LlmResponse, MockLlm, MockToolSource, PastStep, PlanExecute, PlanExecuteRunner,
    RunError, RunnableConfig, StreamEvent, ToolCall,
};

fn runner(
    planner_script: Vec<LlmResponse>,
    executor_llm: MockLlm,
    limit: u32,
) -> PlanExecuteRunner {
    PlanExecuteRunner::new(
        Arc::new(MockLlm::from_responses(planner_script)),
        Arc::new(executor_llm),
        Box::new(MockToolSource::with_answer("Savitri Jindal")),
        Some(RunnableConfig::with_recursion_limit(limit)),
        false,
    )
    .expect("runner compiles")
}

/// **Scenario**: The reference objective runs one execute/replan cycle per
/// step and terminates with a non-empty response.
#[tokio::test]
async fn full_loop_terminates_with_response() {
    let runner = runner(
        vec![
            LlmResponse::text(
                r#"{"steps": ["identify Asia's richest woman", "find where she lives"]}"#,
            ),
            LlmResponse::text(r#"{"action": "plan", "steps": ["find where she lives"]}"#),
            LlmResponse::text(r#"{"action": "respond", "response": "Mumbai, India"}"#),
        ],
        MockLlm::with_no_tool_calls("step answer"),
        10,
    );

    let out = runner
        .invoke("Where does Asia's Richest Woman Live?")
        .await
        .unwrap();

    assert_eq!(out.response.as_deref(), Some("Mumbai, India"));
    assert_eq!(out.input, "Where does Asia's Richest Woman Live?");
    assert_eq!(
        out.past_steps,
        vec![
            PastStep {
                step: "identify Asia's richest woman".into(),
                result: "step answer".into(),
            },
            PastStep {
                step: "find where she lives".into(),
                result: "step answer".into(),
            },
        ]
    );
}

/// **Scenario**: A step that needs a tool runs the full executor round; the
/// tool's output shows up in the step result the replanner sees.
#[tokio::test]
async fn executor_step_can_use_tools() {
    let executor_llm = MockLlm::from_responses(vec![
        LlmResponse {
            content: "Searching.".into(),
            tool_calls: vec![ToolCall {
                name: "get_time".into(),
                arguments: "{}".into(),
                id: Some("call-1".into()),
            }],
            usage: None,
        },
        LlmResponse::text("Found: Savitri Jindal"),
    ]);

    let runner = runner(
        vec![
            LlmResponse::text(r#"{"steps": ["look it up"]}"#),
            LlmResponse::text(r#"{"action": "respond", "response": "Savitri Jindal"}"#),
        ],
        executor_llm,
        10,
    );

    let out = runner.invoke("Who is Asia's richest woman?").await.unwrap();

    assert_eq!(out.past_steps.len(), 1);
    assert_eq!(out.past_steps[0].result, "Found: Savitri Jindal");
    assert_eq!(out.response.as_deref(), Some("Savitri Jindal"));
}

/// **Scenario**: Streaming emits a planner update, then alternating agent and
/// replan updates, and the plan never grows between replans.
#[tokio::test]
async fn stream_updates_follow_node_order_and_plan_shrinks() {
    let runner = runner(
        vec![
            LlmResponse::text(r#"{"steps": ["a", "b"]}"#),
            LlmResponse::text(r#"{"action": "plan", "steps": ["b"]}"#),
            LlmResponse::text(r#"{"action": "respond", "response": "done"}"#),
        ],
        MockLlm::with_no_tool_calls("result"),
        10,
    );

    let mut node_order = vec![];
    let mut plan_lengths = vec![];
    let out = runner
        .stream_with_callback(
            "objective",
            Some(|event: StreamEvent<PlanExecute>| {
                if let StreamEvent::Updates { node_id, state } = event {
                    node_order.push(node_id);
                    plan_lengths.push(state.plan.len());
                }
            }),
        )
        .await
        .unwrap();

    assert_eq!(
        node_order,
        vec!["planner", "agent", "replan", "agent", "replan"]
    );
    // planner: 2; agent leaves plan alone: 2; replan shrinks: 1; agent: 1.
    // The final replan responds without touching the plan.
    assert_eq!(plan_lengths, vec![2, 2, 1, 1, 1]);
    assert_eq!(out.response.as_deref(), Some("done"));
}

/// **Scenario**: An empty remaining plan with no response routes back to the
/// executor, which rejects the empty plan: the explicit behavior for the
/// unguarded edge case.
#[tokio::test]
async fn empty_remaining_plan_without_response_fails_in_executor() {
    let runner = runner(
        vec![
            LlmResponse::text(r#"{"steps": ["only step"]}"#),
            LlmResponse::text(r#"{"action": "plan", "steps": []}"#),
        ],
        MockLlm::with_no_tool_calls("result"),
        10,
    );

    let err = runner.invoke("objective").await.unwrap_err();
    match err {
        RunError::Execution(AgentError::ExecutionFailed(msg)) => {
            assert!(msg.contains("non-empty plan"), "{}", msg)
        }
        other => panic!("expected ExecutionFailed, got {:?}", other),
    }
}

/// **Scenario**: A replanner that keeps returning work aborts at the limit
/// without ever producing a response.
#[tokio::test]
async fn runaway_replanner_aborts_at_recursion_limit() {
    let mut script = vec![LlmResponse::text(r#"{"steps": ["spin"]}"#)];
    for _ in 0..10 {
        script.push(LlmResponse::text(r#"{"action": "plan", "steps": ["spin"]}"#));
    }
    let runner = runner(script, MockLlm::with_no_tool_calls("result"), 7);

    let err = runner.invoke("objective").await.unwrap_err();
    assert!(matches!(
        err,
        RunError::Execution(AgentError::RecursionLimit(7))
    ));
}

/// **Scenario**: A planner failure (invalid JSON) propagates out of the run
/// uncaught, with no retry and no partial recovery.
#[tokio::test]
async fn planner_failure_propagates() {
    let runner = runner(
        vec![LlmResponse::text("no json here")],
        MockLlm::with_no_tool_calls("unused"),
        10,
    );

    let err = runner.invoke("objective").await.unwrap_err();
    match err {
        RunError::Execution(AgentError::ExecutionFailed(msg)) => {
            assert!(msg.contains("invalid JSON"), "{}", msg)
        }
        other => panic!("expected ExecutionFailed, got {:?}", other),
    }
}
