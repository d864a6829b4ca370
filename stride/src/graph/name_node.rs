//! Name node: a no-op node that only has a name.
//!
//! Implements `Node<S>` for any state type; passes state through unchanged.
//! Useful as a placeholder in graph construction and in tests.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::AgentError;

use super::{Next, Node};

/// A node that does nothing except expose a name.
pub struct NameNode {
    name: String,
}

impl NameNode {
    /// Creates a name node with the given id (returned by `Node::id`).
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait]
impl<S> Node<S> for NameNode
where
    S: Clone + Send + Sync + Debug + 'static,
{
    fn id(&self) -> &str {
        &self.name
    }

    async fn run(&self, state: S) -> Result<(S, Next), AgentError> {
        Ok((state, Next::Continue))
    }
}
