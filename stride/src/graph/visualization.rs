//! Graph visualization utilities.
//!
//! Exports the compiled graph structure to Graphviz DOT or plain text for
//! debugging. Conditional edges render as dashed edges to each path-map
//! target (or a single dashed edge to a `?` placeholder for mapless routers).

use std::fmt::Write;

use super::{CompiledStateGraph, NextEntry, END, START};

/// Generate a Graphviz DOT representation of the graph.
pub fn generate_dot<S>(graph: &CompiledStateGraph<S>) -> String
where
    S: std::fmt::Debug,
{
    let mut dot = String::from("digraph {\n");
    dot.push_str("  rankdir=LR;\n");
    dot.push_str("  node [shape=box];\n\n");

    dot.push_str(&format!("  \"{}\" [label=\"START\", style=bold];\n", START));
    dot.push_str(&format!("  \"{}\" [label=\"END\", style=bold];\n", END));

    let mut node_ids: Vec<&String> = graph.nodes.keys().collect();
    node_ids.sort();
    for node_id in &node_ids {
        dot.push_str(&format!("  \"{}\";\n", node_id));
    }
    dot.push('\n');

    dot.push_str(&format!(
        "  \"{}\" -> \"{}\";\n",
        START, graph.first_node_id
    ));

    let mut froms: Vec<&String> = graph.next_map.keys().collect();
    froms.sort();
    for from in froms {
        match &graph.next_map[from] {
            NextEntry::Unconditional(to) => {
                dot.push_str(&format!("  \"{}\" -> \"{}\";\n", from, to));
            }
            NextEntry::Conditional(router) => match &router.path_map {
                Some(map) => {
                    let mut targets: Vec<&String> = map.values().collect();
                    targets.sort();
                    targets.dedup();
                    for to in targets {
                        dot.push_str(&format!("  \"{}\" -> \"{}\" [style=dashed];\n", from, to));
                    }
                }
                None => {
                    dot.push_str(&format!("  \"{}\" -> \"?\" [style=dashed];\n", from));
                }
            },
        }
    }

    dot.push_str("}\n");
    dot
}

/// Generate a simple text representation of the graph structure.
pub fn generate_text<S>(graph: &CompiledStateGraph<S>) -> String
where
    S: std::fmt::Debug,
{
    let mut text = String::new();
    writeln!(text, "Graph structure:").unwrap();
    writeln!(text, "Nodes: {}", graph.nodes.len()).unwrap();
    writeln!(text, "\nEdges:").unwrap();
    writeln!(text, "  {} -> {}", START, graph.first_node_id).unwrap();

    let mut froms: Vec<&String> = graph.next_map.keys().collect();
    froms.sort();
    for from in froms {
        match &graph.next_map[from] {
            NextEntry::Unconditional(to) => {
                writeln!(text, "  {} -> {}", from, to).unwrap();
            }
            NextEntry::Conditional(router) => match &router.path_map {
                Some(map) => {
                    let mut targets: Vec<&String> = map.values().collect();
                    targets.sort();
                    targets.dedup();
                    for to in targets {
                        writeln!(text, "  {} -> {} (conditional)", from, to).unwrap();
                    }
                }
                None => {
                    writeln!(text, "  {} -> ? (conditional)", from).unwrap();
                }
            },
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{NameNode, StateGraph};
    use std::sync::Arc;

    fn branching_graph() -> CompiledStateGraph<String> {
        let mut graph = StateGraph::<String>::new();
        graph.add_node("planner", Arc::new(NameNode::new("planner")));
        graph.add_node("agent", Arc::new(NameNode::new("agent")));
        graph.add_node("replan", Arc::new(NameNode::new("replan")));
        graph.add_edge(START, "planner");
        graph.add_edge("planner", "agent");
        graph.add_edge("agent", "replan");
        graph.add_conditional_edges(
            "replan",
            Arc::new(|_: &String| END.to_string()),
            Some(
                [
                    ("agent".to_string(), "agent".to_string()),
                    (END.to_string(), END.to_string()),
                ]
                .into_iter()
                .collect(),
            ),
        );
        graph.compile().expect("graph compiles")
    }

    /// **Scenario**: DOT output contains every node, the START edge, and dashed conditional edges.
    #[test]
    fn generate_dot_renders_nodes_and_conditional_edges() {
        let compiled = branching_graph();
        let dot = generate_dot(&compiled);

        assert!(dot.contains("digraph"));
        assert!(dot.contains("planner"));
        assert!(dot.contains("agent"));
        assert!(dot.contains("replan"));
        assert!(dot.contains(&format!("\"{}\" -> \"planner\"", START)));
        assert!(dot.contains("[style=dashed]"));
    }

    /// **Scenario**: Text output lists conditional edges with a marker.
    #[test]
    fn generate_text_lists_conditional_edges() {
        let compiled = branching_graph();
        let text = generate_text(&compiled);

        assert!(text.contains("Graph structure"));
        assert!(text.contains(&format!("{} -> planner", START)));
        assert!(text.contains("(conditional)"));
    }
}
