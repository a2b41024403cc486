use anyhow::Result;
use litlake_model::{AreaKind, DataFormat, DatasetId, DatasetKind, Schema};
use polars::prelude::DataFrame;

/// One source table a job extracts, addressed within the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceRef {
    pub area: AreaKind,
    pub kind: DatasetKind,
    pub format: DataFormat,
}

impl SourceRef {
    pub fn new(area: AreaKind, kind: DatasetKind, format: DataFormat) -> Self {
        Self { area, kind, format }
    }
}

/// Outcome of a job's reshaping step, before validation.
pub struct Transformed {
    /// Candidate table for the target schema.
    pub frame: DataFrame,
    /// Rows the transform itself rejected, already carrying a
    /// `reject_reason` column.
    pub rejects: Option<DataFrame>,
}

impl Transformed {
    pub fn clean(frame: DataFrame) -> Self {
        Self {
            frame,
            rejects: None,
        }
    }
}

/// A dataset-producing pipeline step.
///
/// Implementors declare where their sources live and what schema the
/// target must satisfy; the runner extracts, calls [`transform`],
/// validates, assigns technical ids and persists.
///
/// [`transform`]: DatasetJob::transform
pub trait DatasetJob {
    fn target(&self) -> DatasetId;

    /// Source tables in extraction order; `transform` receives the
    /// frames in the same order.
    fn sources(&self) -> Vec<SourceRef>;

    fn schema(&self) -> Schema;

    fn transform(&self, sources: &[DataFrame]) -> Result<Transformed>;
}
