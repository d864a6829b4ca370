//! State types shared by the executor graph.

mod react_state;

pub use react_state::{ReActState, ToolCall, ToolResult};
