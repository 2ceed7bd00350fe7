use crate::call_tree::CallNode;

/// Sign choice taken for one sequence element on the way to a child call.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Branch {
    Add(i64),
    Sub(i64),
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Branch::Add(v) => write!(f, "+{}", v),
            Branch::Sub(v) => write!(f, "-{}", v),
        }
    }
}

/// Wrapper for petgraph's graph type.
pub type CallGraph = petgraph::graph::DiGraph<CallNode, Branch>;
