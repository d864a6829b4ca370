//! Run context passed into nodes for streaming-aware execution.

use std::collections::HashSet;
use std::fmt::Debug;

use tokio::sync::mpsc;

use crate::stream::{StreamEvent, StreamMode};

use super::RunnableConfig;

/// Run context passed into nodes and the run loop.
///
/// Holds the run config, an optional stream sender, and the enabled stream
/// modes. Built once per run by `invoke` / `stream`.
#[derive(Clone)]
pub struct RunContext<S>
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Config for the current run (recursion limit, run name).
    pub config: RunnableConfig,
    /// Optional sender for streaming events.
    pub stream_tx: Option<mpsc::Sender<StreamEvent<S>>>,
    /// Enabled stream modes (Values, Updates, Tasks, Debug).
    pub stream_mode: HashSet<StreamMode>,
}

impl<S> RunContext<S>
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Creates a context with no streaming attached.
    pub fn new(config: RunnableConfig) -> Self {
        Self {
            config,
            stream_tx: None,
            stream_mode: HashSet::new(),
        }
    }

    /// True when `mode` (or Debug) is enabled and a sender is attached.
    pub fn emits(&self, mode: StreamMode) -> bool {
        self.stream_tx.is_some()
            && (self.stream_mode.contains(&mode) || self.stream_mode.contains(&StreamMode::Debug))
    }

    /// Sends an event if a sender is attached; mode checks are the caller's job.
    pub(super) async fn send(&self, event: StreamEvent<S>) {
        if let Some(tx) = &self.stream_tx {
            let _ = tx.send(event).await;
        }
    }
}
