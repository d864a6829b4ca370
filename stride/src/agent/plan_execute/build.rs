//! Config-driven builder for the plan-and-execute runner.
//!
//! Collects everything the runner needs (provider credentials, model name,
//! recursion limit) in one explicit struct, constructs the two LLM handles
//! and the tool source, and wires the runner. No hidden globals: the config
//! is read once, at startup, by whoever calls [`build_plan_execute_runner`].

use std::sync::Arc;

use async_openai::config::OpenAIConfig;
use thiserror::Error;

use crate::graph::{CompilationError, RunnableConfig};
use crate::llm::ChatOpenAI;
use crate::tool_source::{ToolSourceError, WebToolsSource};

use super::runner::PlanExecuteRunner;

/// Model used when neither the config nor the environment names one.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Configuration for building a plan-and-execute runner.
#[derive(Clone, Debug, Default)]
pub struct PlanExecuteBuildConfig {
    /// API key; when `None`, the client falls back to `OPENAI_API_KEY`.
    pub openai_api_key: Option<String>,
    /// Custom API base URL (OpenAI-compatible providers).
    pub openai_base_url: Option<String>,
    /// Model name; defaults to [`DEFAULT_MODEL`].
    pub model: Option<String>,
    /// Sampling temperature for both LLM handles.
    pub temperature: Option<f32>,
    /// Per-run node execution budget; `None` uses the graph default.
    pub recursion_limit: Option<u32>,
    /// Wrap every node with enter/exit logging.
    pub verbose: bool,
}

impl PlanExecuteBuildConfig {
    /// Builds config from environment variables.
    pub fn from_env() -> Self {
        Self {
            openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
            openai_base_url: std::env::var("OPENAI_BASE_URL").ok(),
            model: std::env::var("MODEL")
                .or_else(|_| std::env::var("OPENAI_MODEL"))
                .ok(),
            temperature: std::env::var("TEMPERATURE")
                .ok()
                .and_then(|s| s.parse().ok()),
            recursion_limit: std::env::var("RECURSION_LIMIT")
                .ok()
                .and_then(|s| s.parse().ok()),
            verbose: std::env::var("VERBOSE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(false),
        }
    }
}

/// Error from building the runner.
#[derive(Debug, Error)]
pub enum BuildRunnerError {
    #[error("tool source error: {0}")]
    ToolSource(#[from] ToolSourceError),
    #[error("compilation failed: {0}")]
    Compilation(#[from] CompilationError),
}

/// Builds a runner with OpenAI-backed planner/replanner and a web-tool executor.
///
/// The executor's LLM handle gets the tool specs bound so the model can emit
/// matching tool_calls; the planner/replanner handle stays tool-free.
pub async fn build_plan_execute_runner(
    config: &PlanExecuteBuildConfig,
) -> Result<PlanExecuteRunner, BuildRunnerError> {
    let model = config.model.clone().unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let mut openai_config = OpenAIConfig::new();
    if let Some(key) = &config.openai_api_key {
        openai_config = openai_config.with_api_key(key);
    }
    if let Some(base) = &config.openai_base_url {
        openai_config = openai_config.with_api_base(base);
    }

    let tool_source = WebToolsSource::new().await;

    let mut executor_llm =
        ChatOpenAI::new_with_tool_source(openai_config.clone(), model.as_str(), &tool_source)
            .await?;
    let mut planner_llm = ChatOpenAI::with_config(openai_config, model.as_str());
    if let Some(t) = config.temperature {
        executor_llm = executor_llm.with_temperature(t);
        planner_llm = planner_llm.with_temperature(t);
    }

    let runnable_config = RunnableConfig {
        recursion_limit: config.recursion_limit,
        run_name: Some("plan-execute".to_string()),
    };

    let runner = PlanExecuteRunner::new(
        Arc::new(planner_llm),
        Arc::new(executor_llm),
        Box::new(tool_source),
        Some(runnable_config),
        config.verbose,
    )?;
    Ok(runner)
}
