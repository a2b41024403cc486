use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of a schema column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    String,
    Integer,
    Date,
}

impl ColumnType {
    /// Name used verbatim in coercion reject reasons
    /// (`Column pubmed_id cannot be converted to integer`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::String => "string",
            ColumnType::Integer => "integer",
            ColumnType::Date => "date",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One column of a target schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    pub column_type: ColumnType,
    /// Required columns reject null values.
    pub required: bool,
    /// Functional-key columns reject every row whose value repeats.
    pub functional_key: bool,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, column_type: ColumnType, required: bool) -> Self {
        Self {
            name: name.into(),
            column_type,
            required,
            functional_key: false,
        }
    }

    /// Mark this column as a functional key.
    #[must_use]
    pub fn functional_key(mut self) -> Self {
        self.functional_key = true;
        self
    }
}

/// Ordered set of column specs describing a dataset's target shape.
///
/// Validation canonicalizes the order by column name, so two schemas that
/// declare the same columns in a different order validate identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    columns: Vec<ColumnSpec>,
}

impl Schema {
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Copy of this schema with columns in canonical (name-sorted) order.
    pub fn sorted_by_name(&self) -> Schema {
        let mut columns = self.columns.clone();
        columns.sort_by(|a, b| a.name.cmp(&b.name));
        Schema { columns }
    }

    /// Column names in canonical order.
    pub fn sorted_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.columns.iter().map(|c| c.name.clone()).collect();
        names.sort();
        names
    }

    /// Functional-key columns in canonical order.
    pub fn functional_keys(&self) -> Vec<&ColumnSpec> {
        let mut keys: Vec<&ColumnSpec> = self
            .columns
            .iter()
            .filter(|column| column.functional_key)
            .collect();
        keys.sort_by(|a, b| a.name.cmp(&b.name));
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_sorts_by_name() {
        let schema = Schema::new(vec![
            ColumnSpec::new("title", ColumnType::String, true),
            ColumnSpec::new("date", ColumnType::Date, true),
            ColumnSpec::new("journal", ColumnType::String, false),
        ]);
        assert_eq!(schema.sorted_names(), vec!["date", "journal", "title"]);
    }

    #[test]
    fn functional_keys_filter_and_sort() {
        let schema = Schema::new(vec![
            ColumnSpec::new("drug", ColumnType::String, true),
            ColumnSpec::new("atccode", ColumnType::String, true).functional_key(),
        ]);
        let keys = schema.functional_keys();
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].name, "atccode");
    }
}
