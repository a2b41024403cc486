use std::fmt::Write;

use crate::node::Node;

/// Renders the graph in Graphviz DOT form, one node statement per
/// entity and one edge per parent reference.
pub fn to_dot(nodes: &[Node]) -> String {
    let mut out = String::from("digraph lineage {\n");
    for node in nodes {
        let _ = writeln!(
            out,
            "    \"{}\" [label=\"{}\", type=\"{}\"];",
            escape(&node.id),
            escape(&node.value),
            node.node_type
        );
    }
    for node in nodes {
        for parent in node.parents.values() {
            let _ = writeln!(out, "    \"{}\" -> \"{}\";", escape(&node.id), escape(&parent.id));
        }
    }
    out.push_str("}\n");
    out
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
