use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{CsvReadOptions, DataFrame, SerReader};
use tracing::debug;

/// Reads a CSV file with a header row into a `DataFrame`.
///
/// Column dtypes are inferred, so an all-digit column arrives as Int64
/// and a mixed column as String; downstream validation owns coercion to
/// the declared schema.
pub fn read_csv(path: &Path) -> Result<DataFrame> {
    let frame = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| format!("opening CSV file {}", path.display()))?
        .finish()
        .with_context(|| format!("reading CSV file {}", path.display()))?;
    debug!(path = %path.display(), rows = frame.height(), "loaded csv table");
    Ok(frame)
}
