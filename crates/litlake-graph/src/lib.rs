pub mod dot;
pub mod flat;
pub mod graph;
pub mod node;

pub use dot::to_dot;
pub use graph::{LineageGraph, MentionRow};
pub use node::{Namespace, Node, NodeType, ParentReference};
