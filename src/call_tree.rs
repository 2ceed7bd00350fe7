use hashbrown::{HashMap, HashSet};

use crate::types::{Branch, CallGraph};

/// One recorded invocation of the recursive step.
///
/// `id` is the pre-order visit number, `index` the position in the input
/// sequence (0..=N) and `sum` the running signed sum so far.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CallNode {
    pub id: usize,
    pub index: usize,
    pub sum: i64,
}

impl std::fmt::Display for CallNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "dfs({}, {})", self.index, self.sum)
    }
}

/// A caller -> callee link between two [`CallNode`]s, by id.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CallEdge {
    pub parent: usize,
    pub child: usize,
    /// Which sign choice produced the child.
    pub branch: Branch,
}

/// This struct holds everything recorded during one enumeration pass.
///
/// Nodes and edges are stored in creation order. The walk is a pre-order
/// traversal of a full binary tree of depth N, with the add subtree fully
/// preceding the subtract subtree at every level, so for a sequence of
/// length N there are exactly 2^(N+1) - 1 nodes and 2^(N+1) - 2 edges.
#[derive(Debug)]
pub struct CallTree {
    pub nodes: Vec<CallNode>,
    pub edges: Vec<CallEdge>,
    /// Ids of leaves whose sum equals `target`, in creation order.
    pub matching_leaves: Vec<usize>,
    pub target: i64,
}

/// Builds the call tree of the brute-force target-sum DFS over `sequence`.
///
/// Every combination of adding or subtracting each element is visited
/// unconditionally. The target never prunes or terminates the walk, it
/// only marks the leaves whose sum equals it.
///
/// Cost is exponential in the sequence length by design, the caller is
/// responsible for bounding the input.
pub fn build_call_tree(sequence: &[i64], target: i64) -> CallTree {
    let mut tree = CallTree {
        nodes: Vec::new(),
        edges: Vec::new(),
        matching_leaves: Vec::new(),
        target,
    };
    dfs(sequence, 0, 0, None, &mut tree);
    tree
}

impl CallTree {
    /// Number of sign assignments whose sum equals the target.
    pub fn ways(&self) -> usize {
        self.matching_leaves.len()
    }

    /// Converts the recorded lists into a petgraph graph.
    ///
    /// Node ids equal petgraph's node indices, since nodes are inserted
    /// in creation order.
    pub fn to_graph(&self) -> CallGraph {
        let mut graph = CallGraph::with_capacity(self.nodes.len(), self.edges.len());
        let indices: Vec<_> = self.nodes.iter().map(|n| graph.add_node(*n)).collect();
        for e in &self.edges {
            graph.add_edge(indices[e.parent], indices[e.child], e.branch);
        }
        graph
    }

    /// Ids of all nodes lying on a path from the root to a matching leaf.
    ///
    /// Each matching leaf is backtracked to the root through the parent
    /// links. Empty when no leaf matches the target.
    pub fn highlighted(&self) -> HashSet<usize> {
        let parent_of: HashMap<usize, usize> =
            self.edges.iter().map(|e| (e.child, e.parent)).collect();

        let mut highlighted = HashSet::new();
        for &leaf in &self.matching_leaves {
            let mut cur = leaf;
            while let Some(&p) = parent_of.get(&cur) {
                highlighted.insert(cur);
                cur = p;
            }
            highlighted.insert(cur);
        }
        highlighted
    }
}

/// Helper that performs the enumeration in a recursive manner.
///
/// Ids are assigned from the length of the node list, so numbering is
/// scoped to one [`build_call_tree`] call.
fn dfs(
    sequence: &[i64],
    index: usize,
    sum: i64,
    parent: Option<(usize, Branch)>,
    tree: &mut CallTree,
) {
    let id = tree.nodes.len();
    tree.nodes.push(CallNode { id, index, sum });

    if let Some((parent_id, branch)) = parent {
        tree.edges.push(CallEdge {
            parent: parent_id,
            child: id,
            branch,
        });
    }

    if index == sequence.len() {
        if sum == tree.target {
            tree.matching_leaves.push(id);
        }
        return;
    }

    let v = sequence[index];
    dfs(sequence, index + 1, sum + v, Some((id, Branch::Add(v))), tree);
    dfs(sequence, index + 1, sum - v, Some((id, Branch::Sub(v))), tree);
}
