//! Streaming types for graph runs.
//!
//! [`CompiledStateGraph::stream`](crate::graph::CompiledStateGraph::stream)
//! emits a [`StreamEvent`] after each node completes; [`StreamMode`] selects
//! which kinds of events are sent. The event stream is how a driver observes
//! intermediate state without waiting for the final result.

use std::collections::HashSet;
use std::fmt::Debug;

/// Stream mode selector: which kinds of events to emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StreamMode {
    /// Emit the full state after each node completes.
    Values,
    /// Emit per-node updates with the node id and the state after the node ran.
    Updates,
    /// Emit task start/end events for each node execution.
    Tasks,
    /// Emit everything (tasks plus values and updates).
    Debug,
}

impl StreamMode {
    /// All modes; used by runners that forward every event to a callback.
    pub fn all() -> HashSet<StreamMode> {
        HashSet::from([
            StreamMode::Values,
            StreamMode::Updates,
            StreamMode::Tasks,
            StreamMode::Debug,
        ])
    }
}

/// One event in a streamed graph run.
///
/// `Error` is terminal: the run loop sends it when a node fails or the
/// recursion limit is hit, then closes the stream. A successful run ends with
/// the channel closing after the last node's events.
#[derive(Clone, Debug)]
pub enum StreamEvent<S>
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Full state after a node completed (mode: Values).
    Values(S),
    /// State after the named node completed (mode: Updates).
    Updates {
        /// Node that produced the update.
        node_id: String,
        /// State after the update was applied.
        state: S,
    },
    /// A node is about to run (mode: Tasks).
    TaskStart { node_id: String },
    /// A node finished; `Err` carries the failure message (mode: Tasks).
    TaskEnd {
        node_id: String,
        result: Result<(), String>,
    },
    /// The run aborted; no further events follow.
    Error(String),
}
