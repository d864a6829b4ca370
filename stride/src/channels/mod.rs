//! State update strategies for graph execution.
//!
//! After each node runs, the graph merges the node's output into the current
//! state through a [`StateUpdater`]. The default ([`ReplaceUpdater`]) replaces
//! the state wholesale, which is the state-in, state-out contract. A
//! [`FieldBasedUpdater`] can implement per-field semantics instead (append to
//! a list, keep a field immutable, and so on).

use std::fmt::Debug;
use std::sync::Arc;

/// Boxed updater stored by the graph. Shared so compiled graphs stay `Clone`.
pub type BoxedStateUpdater<S> = Arc<dyn StateUpdater<S>>;

/// Controls how a node's output is merged into the current state.
///
/// Called by the compiled graph run loop after every node execution.
pub trait StateUpdater<S>: Send + Sync + Debug
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Merges `update` (the node's return value) into `current`.
    fn apply_update(&self, current: &mut S, update: &S);
}

/// Default updater: the node's return value replaces the entire state.
#[derive(Debug, Clone, Default)]
pub struct ReplaceUpdater;

impl<S> StateUpdater<S> for ReplaceUpdater
where
    S: Clone + Send + Sync + Debug + 'static,
{
    fn apply_update(&self, current: &mut S, update: &S) {
        *current = update.clone();
    }
}

/// Updater that delegates the merge to a closure, for per-field semantics.
///
/// ```rust
/// use stride::channels::FieldBasedUpdater;
///
/// #[derive(Clone, Debug)]
/// struct MyState { log: Vec<String>, count: i32 }
///
/// let updater = FieldBasedUpdater::new(|current: &mut MyState, update: &MyState| {
///     current.log.extend(update.log.iter().cloned());
///     current.count = update.count;
/// });
/// # let _ = updater;
/// ```
pub struct FieldBasedUpdater<S, F>
where
    S: Clone + Send + Sync + Debug + 'static,
    F: Fn(&mut S, &S) + Send + Sync + 'static,
{
    updater_fn: F,
    _marker: std::marker::PhantomData<S>,
}

impl<S, F> FieldBasedUpdater<S, F>
where
    S: Clone + Send + Sync + Debug + 'static,
    F: Fn(&mut S, &S) + Send + Sync + 'static,
{
    /// Creates an updater from a merge closure.
    pub fn new(updater_fn: F) -> Self {
        Self {
            updater_fn,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<S, F> Debug for FieldBasedUpdater<S, F>
where
    S: Clone + Send + Sync + Debug + 'static,
    F: Fn(&mut S, &S) + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldBasedUpdater")
            .field("updater_fn", &"<fn>")
            .finish()
    }
}

impl<S, F> StateUpdater<S> for FieldBasedUpdater<S, F>
where
    S: Clone + Send + Sync + Debug + 'static,
    F: Fn(&mut S, &S) + Send + Sync + 'static,
{
    fn apply_update(&self, current: &mut S, update: &S) {
        (self.updater_fn)(current, update)
    }
}
