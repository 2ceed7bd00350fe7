// #![warn(missing_docs)]

//! # recursion_trees
//!
//! A Rust library for visualizing the recursion tree of the
//! brute-force "target sum" search: every way of adding or
//! subtracting each element of a sequence, one node per call.
//!
//! Based on [`petgraph`](https://docs.rs/petgraph).

pub mod call_tree;
pub mod debugging;
pub mod input;
pub mod output;
pub mod types;

#[cfg(test)]
mod testing;

pub use call_tree::CallTree;
pub use call_tree::build_call_tree;
pub use types::Branch;
pub use types::CallGraph;
