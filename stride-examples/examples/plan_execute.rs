//! Example: plan-and-execute workflow against a real OpenAI-compatible API.
//!
//! Loads env (existing env > .env > ~/.config/stride/config.toml), builds the
//! runner with the web fetcher tool, streams the run, and prints each
//! intermediate state followed by the final response.
//!
//! Requires `OPENAI_API_KEY` (and optionally `OPENAI_BASE_URL`, `MODEL`).
//!
//! Run: `cargo run -p stride-examples --example plan_execute -- "Where does Asia's Richest Woman Live?"`

use std::env;

use stride::agent::plan_execute::{build_plan_execute_runner, PlanExecuteBuildConfig};
use stride::{PlanExecute, StreamEvent};

#[tokio::main]
async fn main() {
    env_config::load_and_apply("stride", None).expect("load config");

    let objective = env::args()
        .nth(1)
        .unwrap_or_else(|| "Where does Asia's Richest Woman Live?".to_string());

    let mut config = PlanExecuteBuildConfig::from_env();
    if config.recursion_limit.is_none() {
        config.recursion_limit = Some(10);
    }

    let runner = build_plan_execute_runner(&config)
        .await
        .expect("build runner");

    let result = runner
        .stream_with_callback(
            &objective,
            Some(|event: StreamEvent<PlanExecute>| {
                if let StreamEvent::Updates { node_id, state } = event {
                    match node_id.as_str() {
                        "planner" | "replan" if state.response.is_none() => {
                            println!("plan: {:?}", state.plan)
                        }
                        "agent" => {
                            if let Some(last) = state.past_steps.last() {
                                println!("step done: {} -> {}", last.step, last.result);
                            }
                        }
                        _ => {}
                    }
                }
            }),
        )
        .await;

    match result {
        Ok(final_state) => match final_state.response {
            Some(response) => println!("{}", response),
            None => println!("run ended without a response"),
        },
        Err(e) => eprintln!("run failed: {}", e),
    }
}
