use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use litlake_ingest::render_any;
use litlake_model::LitlakeError;
use polars::prelude::{AnyValue, Column, DataFrame};
use tracing::{debug, info};

use crate::node::{Namespace, Node, NodeType, ParentReference};
use crate::{dot, flat};

/// One flattened mention fact from the business area: a publication,
/// the journal it appeared in, and the drug it mentions.
#[derive(Debug, Clone)]
pub struct MentionRow {
    pub publication_id: String,
    pub publication_type: NodeType,
    pub journal_id: String,
    pub journal_name: String,
    pub drug_id: String,
    pub drug: String,
    pub publication_date: Option<String>,
    pub functional_id: String,
}

/// Lineage graph built incrementally from mention rows.
///
/// Each row contributes one candidate node per [`NodeType`], in fixed
/// order. The first encounter of an entity id within its namespace
/// creates the node; every later encounter attaches a parent reference
/// instead.
#[derive(Debug, Default)]
pub struct LineageGraph {
    nodes: Vec<Node>,
    members: BTreeMap<(Namespace, String), usize>,
}

impl LineageGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes in creation order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn process_row(&mut self, row: &MentionRow) {
        for node_type in NodeType::ALL {
            let key = (node_type.namespace(), id_for(row, node_type).to_string());
            match self.members.get(&key) {
                None => {
                    let node = Node::new(key.1.clone(), node_type, value_for(row, node_type));
                    self.members.insert(key, self.nodes.len());
                    self.nodes.push(node);
                }
                Some(&index) => {
                    let found_type = self.nodes[index].node_type;
                    let reference = parent_reference(row, found_type);
                    self.nodes[index].add_parent(reference);
                }
            }
        }
    }

    /// Feeds every row of a mention table through [`Self::process_row`].
    pub fn ingest_frame(&mut self, frame: &DataFrame) -> Result<()> {
        let columns = MentionColumns::locate(frame)?;
        for row in 0..frame.height() {
            let mention = columns.mention_row(row)?;
            self.process_row(&mention);
        }
        debug!(
            rows = frame.height(),
            nodes = self.nodes.len(),
            "ingested mention table"
        );
        Ok(())
    }

    pub fn to_flat_json(&self) -> Result<String> {
        flat::render_flat_json(&self.nodes)
    }

    pub fn write_flat_json(&self, path: &Path) -> Result<()> {
        let json = self.to_flat_json()?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), nodes = self.nodes.len(), "wrote flat json");
        Ok(())
    }

    pub fn to_dot(&self) -> String {
        dot::to_dot(&self.nodes)
    }

    pub fn write_dot(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_dot()).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "wrote dot export");
        Ok(())
    }
}

fn id_for(row: &MentionRow, node_type: NodeType) -> &str {
    match node_type {
        NodeType::ClinicalTrial | NodeType::Pubmed => &row.publication_id,
        NodeType::Journal => &row.journal_id,
        NodeType::Drug => &row.drug_id,
    }
}

fn value_for(row: &MentionRow, node_type: NodeType) -> &str {
    match node_type {
        NodeType::ClinicalTrial | NodeType::Pubmed => &row.functional_id,
        NodeType::Journal => &row.journal_name,
        NodeType::Drug => &row.drug,
    }
}

/// Builds the parent reference this row contributes to an existing
/// node of `node_type`. JOURNAL resolves its dependency from the
/// row's publication type; the date is carried for JOURNAL parents
/// always, and for DRUG parents only on the PUBMED path.
fn parent_reference(row: &MentionRow, node_type: NodeType) -> ParentReference {
    let dependencies = node_type.dependencies();
    let dependency = if dependencies.len() > 1 {
        row.publication_type
    } else {
        dependencies[0]
    };
    let date = match node_type {
        NodeType::Journal => row.publication_date.clone(),
        NodeType::Drug if row.publication_type == NodeType::Pubmed => {
            row.publication_date.clone()
        }
        _ => None,
    };
    ParentReference {
        id: id_for(row, dependency).to_string(),
        node_type: dependency,
        date,
    }
}

struct MentionColumns<'a> {
    publication_id: &'a Column,
    publication_type: &'a Column,
    journal_id: &'a Column,
    journal_name: &'a Column,
    drug_id: &'a Column,
    drug: &'a Column,
    publication_date: &'a Column,
    functional_id: &'a Column,
}

impl<'a> MentionColumns<'a> {
    fn locate(frame: &'a DataFrame) -> Result<Self> {
        Ok(Self {
            publication_id: mention_column(frame, "publication_id")?,
            publication_type: mention_column(frame, "publication_type")?,
            journal_id: mention_column(frame, "journal_id")?,
            journal_name: mention_column(frame, "journal_name")?,
            drug_id: mention_column(frame, "drug_id")?,
            drug: mention_column(frame, "drug")?,
            publication_date: mention_column(frame, "publication_date")?,
            functional_id: mention_column(frame, "functional_id")?,
        })
    }

    fn mention_row(&self, row: usize) -> Result<MentionRow> {
        Ok(MentionRow {
            publication_id: required(self.publication_id, row)?,
            publication_type: required(self.publication_type, row)?
                .parse()
                .map_err(anyhow::Error::msg)?,
            journal_id: required(self.journal_id, row)?,
            journal_name: required(self.journal_name, row)?,
            drug_id: required(self.drug_id, row)?,
            drug: required(self.drug, row)?,
            publication_date: text_at(self.publication_date, row),
            functional_id: required(self.functional_id, row)?,
        })
    }
}

fn mention_column<'a>(frame: &'a DataFrame, name: &str) -> Result<&'a Column> {
    frame
        .column(name)
        .map_err(|_| LitlakeError::missing_column(name, "mention").into())
}

fn text_at(column: &Column, row: usize) -> Option<String> {
    render_any(&column.get(row).unwrap_or(AnyValue::Null))
}

fn required(column: &Column, row: usize) -> Result<String> {
    text_at(column, row).ok_or_else(|| anyhow!("null {} in mention row {row}", column.name()))
}
