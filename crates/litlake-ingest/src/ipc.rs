use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{DataFrame, IpcReader, SerReader};
use tracing::debug;

/// Reads an Arrow IPC file written by an earlier pipeline stage.
pub fn read_ipc(path: &Path) -> Result<DataFrame> {
    let file =
        File::open(path).with_context(|| format!("opening IPC file {}", path.display()))?;
    let frame = IpcReader::new(file)
        .finish()
        .with_context(|| format!("reading IPC file {}", path.display()))?;
    debug!(path = %path.display(), rows = frame.height(), "loaded ipc table");
    Ok(frame)
}
