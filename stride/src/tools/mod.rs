//! Tools: callable units the executor can invoke, plus their registry.
//!
//! [`Tool`] is one callable; [`ToolRegistry`] holds the complete set;
//! [`AggregateToolSource`] adapts a registry to the `ToolSource` trait the
//! executor consumes. [`WebFetcherTool`] is the built-in HTTP tool.

mod aggregate_source;
mod registry;
mod r#trait;
pub mod web;

pub use aggregate_source::AggregateToolSource;
pub use r#trait::Tool;
pub use registry::ToolRegistry;
pub use web::{WebFetcherTool, TOOL_WEB_FETCHER};
