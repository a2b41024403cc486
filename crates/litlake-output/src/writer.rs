use std::fs::{self, File};
use std::path::Path;

use anyhow::{Context, Result};
use litlake_model::{DataFormat, DataStore, DatasetId};
use polars::prelude::{CsvWriter, DataFrame, IpcWriter, SerWriter};
use tracing::info;

/// Persists a validated dataset and its reject sibling.
///
/// Every dataset lands twice: Arrow IPC for the downstream jobs and
/// CSV for inspection. Rejects always get a file, even when empty, so
/// a missing reject file means the job never ran.
pub fn write_outputs(
    store: &DataStore,
    dataset: DatasetId,
    accepted: &mut DataFrame,
    rejected: &mut DataFrame,
) -> Result<()> {
    let dir = store.area_dir(dataset.area);
    fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

    write_ipc(
        &store.dataset_path(dataset.area, dataset.kind, DataFormat::Ipc),
        accepted,
    )?;
    write_csv(
        &store.dataset_path(dataset.area, dataset.kind, DataFormat::Csv),
        accepted,
    )?;
    write_ipc(
        &store.rejected_path(dataset.area, dataset.kind, DataFormat::Ipc),
        rejected,
    )?;
    write_csv(
        &store.rejected_path(dataset.area, dataset.kind, DataFormat::Csv),
        rejected,
    )?;

    info!(
        dataset = %dataset,
        accepted = accepted.height(),
        rejected = rejected.height(),
        "wrote dataset"
    );
    Ok(())
}

fn write_ipc(path: &Path, frame: &mut DataFrame) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    IpcWriter::new(file)
        .finish(frame)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn write_csv(path: &Path, frame: &mut DataFrame) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(file)
        .include_header(true)
        .finish(frame)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
