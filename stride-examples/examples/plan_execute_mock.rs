//! Example: the full plan/execute/replan loop offline, with mock LLMs.
//!
//! Shows the loop mechanics without any API key: a scripted planner produces
//! a two-step plan, the replanner shrinks it and then responds, and the mock
//! executor answers each delegated step.
//!
//! Run: `cargo run -p stride-examples --example plan_execute_mock`

use std::sync::Arc;

use stride::{
    generate_text, LlmResponse, MockLlm, MockToolSource, PlanExecute, PlanExecuteRunner,
    RunnableConfig, StreamEvent,
};

#[tokio::main]
async fn main() {
    let planner_llm = Arc::new(MockLlm::from_responses(vec![
        LlmResponse::text(r#"{"steps": ["identify Asia's richest woman", "find where she lives"]}"#),
        LlmResponse::text(r#"{"action": "plan", "steps": ["find where she lives"]}"#),
        LlmResponse::text(r#"{"action": "respond", "response": "She lives in Mumbai, India."}"#),
    ]));
    let executor_llm = Arc::new(MockLlm::with_no_tool_calls(
        "Savitri Jindal, according to the search results.",
    ));

    let runner = PlanExecuteRunner::new(
        planner_llm,
        executor_llm,
        Box::new(MockToolSource::new()),
        Some(RunnableConfig::with_recursion_limit(10)),
        true,
    )
    .expect("runner compiles");

    println!("{}", generate_text(runner.compiled()));

    let final_state = runner
        .stream_with_callback(
            "Where does Asia's Richest Woman Live?",
            Some(|event: StreamEvent<PlanExecute>| {
                if let StreamEvent::Updates { node_id, state } = event {
                    println!("[{}] plan={:?} response={:?}", node_id, state.plan, state.response);
                }
            }),
        )
        .await
        .expect("run succeeds");

    println!("{}", final_state.response.unwrap_or_default());
}
