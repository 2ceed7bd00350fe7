//! I use it with `cargo run --example draw | dot -Tsvg > tree.svg`

use recursion_trees::build_call_tree;
use recursion_trees::output::draw_call_tree;

fn main() {
    let sequence = [1, 1, 1];
    let target = 1;

    let tree = build_call_tree(&sequence, target);
    eprintln!("ways to reach {}: {}", target, tree.ways());

    print!("{}", draw_call_tree(&tree.to_graph(), &tree.highlighted()));
}
