//! Example of parsing the text input format before drawing.
//! Usage: `cargo run --example input | dot -Tsvg > tree.svg`

use recursion_trees::build_call_tree;
use recursion_trees::input::from_str;
use recursion_trees::output::draw_call_tree;

fn main() {
    let input = "
            1,2,1
            2
            ";

    let (sequence, target) = from_str(input);
    let tree = build_call_tree(&sequence, target);

    print!("{}", draw_call_tree(&tree.to_graph(), &tree.highlighted()));
}
