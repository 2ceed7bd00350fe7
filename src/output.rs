use crate::types::CallGraph;
use hashbrown::HashSet;
use petgraph::visit::EdgeRef;

/// Returns a call tree in DOT format.
///
/// Nodes are labelled `dfs(index, sum)` and edges carry the sign choice
/// that produced the child (`+v` or `-v`).
///
/// Nodes whose id is in `highlighted` (those on a path to a leaf that
/// hits the target) are filled orange, the rest lightblue.
///
/// Intended to be used with `dot`.
pub fn draw_call_tree(graph: &CallGraph, highlighted: &HashSet<usize>) -> String {
    let mut output = String::from("digraph {\n");
    output.push_str("  rankdir=TB;\n");
    output.push_str("  node [shape=box, style=filled];\n");

    // Add call nodes
    for node_idx in graph.node_indices() {
        let node = graph.node_weight(node_idx).unwrap();
        let color = if highlighted.contains(&node.id) {
            "orange"
        } else {
            "lightblue"
        };
        output.push_str(&format!(
            "  {} [label=\"{}\", fillcolor={}];\n",
            node.id, node, color
        ));
    }

    // Add call edges
    for edge in graph.edge_references() {
        let parent = graph.node_weight(edge.source()).unwrap();
        let child = graph.node_weight(edge.target()).unwrap();
        output.push_str(&format!(
            "  {} -> {} [label=\"{}\"];\n",
            parent.id,
            child.id,
            edge.weight()
        ));
    }
    output.push_str("}\n");
    output
}

/// Writes the call tree to a file in DOT format.
///
/// File and rendering-side failures surface as [`std::io::Error`].
pub fn to_dot_file(
    graph: &CallGraph,
    highlighted: &HashSet<usize>,
    path: &str,
) -> std::io::Result<()> {
    let dot_str = draw_call_tree(graph, highlighted);
    to_file(&dot_str, path)
}

/// Writes a string to a file.
pub fn to_file(content: &str, path: &str) -> std::io::Result<()> {
    std::fs::write(path, content)
}
