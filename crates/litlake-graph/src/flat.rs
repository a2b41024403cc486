use anyhow::{Context, Result};
use serde::Serialize;

use crate::node::{Node, NodeType, ParentReference};

/// Serialized view of a [`Node`]: parents flattened into a list, in
/// key order.
#[derive(Serialize)]
struct FlatNode<'a> {
    id: &'a str,
    #[serde(rename = "type")]
    node_type: NodeType,
    value: &'a str,
    parents: Vec<&'a ParentReference>,
}

impl<'a> From<&'a Node> for FlatNode<'a> {
    fn from(node: &'a Node) -> Self {
        Self {
            id: &node.id,
            node_type: node.node_type,
            value: &node.value,
            parents: node.parents.values().collect(),
        }
    }
}

/// Renders the node list as a single-line JSON array with every
/// non-ASCII character escaped, so the output survives consumers that
/// assume a single-byte encoding.
pub fn render_flat_json(nodes: &[Node]) -> Result<String> {
    let flat: Vec<FlatNode<'_>> = nodes.iter().map(FlatNode::from).collect();
    let json = serde_json::to_string(&flat).context("serializing lineage graph")?;
    Ok(escape_non_ascii(&json))
}

fn escape_non_ascii(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii() {
            out.push(ch);
        } else {
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                out.push_str(&format!("\\u{unit:04x}"));
            }
        }
    }
    out
}
