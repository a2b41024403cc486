use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Entity kinds in the lineage graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    ClinicalTrial,
    Pubmed,
    Journal,
    Drug,
}

impl NodeType {
    /// Candidate processing order for one mention row.
    pub const ALL: [NodeType; 4] = [
        NodeType::ClinicalTrial,
        NodeType::Pubmed,
        NodeType::Journal,
        NodeType::Drug,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::ClinicalTrial => "CLINICAL_TRIAL",
            NodeType::Pubmed => "PUBMED",
            NodeType::Journal => "JOURNAL",
            NodeType::Drug => "DRUG",
        }
    }

    /// The types a node of this type draws parent references from.
    /// JOURNAL lists both publication kinds; the row's
    /// `publication_type` picks one at runtime.
    pub fn dependencies(&self) -> &'static [NodeType] {
        match self {
            NodeType::ClinicalTrial | NodeType::Pubmed => &[NodeType::Drug],
            NodeType::Journal => &[NodeType::ClinicalTrial, NodeType::Pubmed],
            NodeType::Drug => &[NodeType::Journal],
        }
    }

    /// Membership namespace for node creation. CLINICAL_TRIAL and
    /// PUBMED share one namespace, since both identify publications.
    pub fn namespace(&self) -> Namespace {
        match self {
            NodeType::ClinicalTrial | NodeType::Pubmed => Namespace::Publication,
            NodeType::Journal => Namespace::Journal,
            NodeType::Drug => Namespace::Drug,
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "CLINICAL_TRIAL" => Ok(NodeType::ClinicalTrial),
            "PUBMED" => Ok(NodeType::Pubmed),
            "JOURNAL" => Ok(NodeType::Journal),
            "DRUG" => Ok(NodeType::Drug),
            other => Err(format!("Unknown node type: {other}")),
        }
    }
}

/// Node-creation namespaces; see [`NodeType::namespace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Namespace {
    Publication,
    Journal,
    Drug,
}

/// Identity of a parent reference within one node.
pub type ParentKey = (NodeType, String);

/// One parent edge, tagged with the relationship type and an optional
/// publication date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParentReference {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub date: Option<String>,
}

impl ParentReference {
    pub fn key(&self) -> ParentKey {
        (self.node_type, self.id.clone())
    }
}

/// One graph entity.
///
/// Parents are keyed by `(type, id)`: re-adding a reference with the
/// same key neither duplicates it nor updates the stored date.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: String,
    pub node_type: NodeType,
    pub value: String,
    pub parents: BTreeMap<ParentKey, ParentReference>,
}

impl Node {
    pub fn new(id: impl Into<String>, node_type: NodeType, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            node_type,
            value: value.into(),
            parents: BTreeMap::new(),
        }
    }

    /// First write wins; a later reference with the same `(type, id)`
    /// is dropped even when its date differs.
    pub fn add_parent(&mut self, reference: ParentReference) {
        self.parents.entry(reference.key()).or_insert(reference);
    }
}
