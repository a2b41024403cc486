use thiserror::Error;

#[derive(Debug, Error)]
pub enum LitlakeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("column {column} is missing from the {table} table")]
    MissingColumn { column: String, table: String },
    #[error("external rejects are missing the reject_reason column")]
    MissingRejectReason,
    #[error("{0}")]
    Message(String),
}

impl LitlakeError {
    pub fn missing_column(column: impl Into<String>, table: impl Into<String>) -> Self {
        LitlakeError::MissingColumn {
            column: column.into(),
            table: table.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LitlakeError>;
