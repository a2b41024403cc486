use std::path::Path;

use anyhow::Result;
use litlake_model::DataFormat;
use polars::prelude::DataFrame;

use crate::{read_csv, read_ipc, read_json};

/// Reads a table in the given on-disk format.
pub fn read_table(path: &Path, format: DataFormat) -> Result<DataFrame> {
    match format {
        DataFormat::Csv => read_csv(path),
        DataFormat::Json => read_json(path),
        DataFormat::Ipc => read_ipc(path),
    }
}
