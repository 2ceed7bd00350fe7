use dot::{Edges, GraphWalk, Labeller, Nodes};

use crate::call_tree::CallTree;
use crate::types::Branch;

type Node = usize;

#[derive(Debug, Clone)]
struct Edge {
    source: Node,
    target: Node,
    branch: Branch,
}

struct Graph<'a> {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    parent: Vec<Option<usize>>,
    tree: &'a CallTree,
}

impl<'a> Labeller<'a, Node, Edge> for Graph<'a> {
    fn graph_id(&self) -> dot::Id<'_> {
        dot::Id::new("G").unwrap()
    }

    fn node_id(&self, n: &Node) -> dot::Id<'_> {
        dot::Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label(&self, n: &Node) -> dot::LabelText<'a> {
        let node = &self.tree.nodes[*n];
        dot::LabelText::label(format!(
            "{}\nid:{} i:{} sum:{}\np:{}{}",
            node,
            node.id,
            node.index,
            node.sum,
            if self.parent[*n].is_some() {
                self.parent[*n].unwrap().to_string()
            } else {
                "Root".to_string()
            },
            if self.tree.matching_leaves.contains(n) {
                " hit"
            } else {
                ""
            }
        ))
    }

    fn edge_label(&self, e: &Edge) -> dot::LabelText<'a> {
        dot::LabelText::label(format!("{}", e.branch))
    }
}

impl<'a> GraphWalk<'a, Node, Edge> for Graph<'a> {
    fn nodes(&self) -> Nodes<'_, Node> {
        self.nodes.iter().cloned().collect()
    }

    fn edges(&self) -> Edges<'_, Edge> {
        self.edges.as_slice().into()
    }

    fn source(&self, e: &Edge) -> Node {
        e.source
    }

    fn target(&self, e: &Edge) -> Node {
        e.target
    }
}

/// Renders the enumeration internals of a call tree in DOT format.
///
/// Each node shows its id, sequence index, running sum and parent id,
/// matching leaves are tagged `hit`. Meant for eyeballing small trees.
pub fn draw(tree: &CallTree) -> String {
    let mut parent = vec![None; tree.nodes.len()];
    let mut graph = Graph {
        nodes: (0..tree.nodes.len()).collect(),
        edges: Vec::new(),
        parent: Vec::new(),
        tree,
    };

    for e in &tree.edges {
        parent[e.child] = Some(e.parent);
        graph.edges.push(Edge {
            source: e.parent,
            target: e.child,
            branch: e.branch,
        });
    }
    graph.parent = parent;

    let mut buffer = std::io::Cursor::new(Vec::new());
    dot::render(&graph, &mut buffer).unwrap();
    String::from_utf8(buffer.into_inner()).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call_tree::build_call_tree;

    #[test]
    fn test_draw_internals() {
        let tree = build_call_tree(&[1], 1);
        let rendered = draw(&tree);
        assert!(rendered.contains("digraph G"));
        assert!(rendered.contains("p:Root"));
        // the +1 leaf hits the target
        assert!(rendered.contains("hit"));
        assert_eq!(rendered.matches("->").count(), 2);
    }
}
