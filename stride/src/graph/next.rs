//! Next-step result from a graph node: continue the chain, jump, or end.

/// Next step after running a node.
///
/// - **Continue**: follow the node's outgoing edge (or END if it has none).
/// - **Node(id)**: jump to the given node (e.g. observe → think in a loop).
/// - **End**: stop; the current state is the final result.
///
/// Returned by `Node::run`; consumed by the compiled graph run loop. When the
/// node has conditional edges, the router decides instead and the node's
/// `Next` is ignored.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Next {
    /// Follow the node's outgoing edge; if there is none, equivalent to End.
    Continue,
    /// Run the node with the given id next.
    Node(String),
    /// Stop and return the current state.
    End,
}
