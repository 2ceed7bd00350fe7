//! Dumps enumeration internals, `cargo run --example debug | dot -Tsvg > internals.svg`

use recursion_trees::build_call_tree;
use recursion_trees::debugging::draw;

fn main() {
    let tree = build_call_tree(&[2, -3], 1);
    print!("{}", draw(&tree));
}
