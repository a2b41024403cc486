use anyhow::{Context, Result};
use litlake_core::{SchemaValidator, assign_technical_ids};
use litlake_ingest::read_table;
use litlake_model::{AreaKind, DataStore, DatasetId};
use litlake_output::write_outputs;
use tracing::{info, info_span};

use crate::job::DatasetJob;
use crate::registry::JobRegistry;

/// Row counts from one completed job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobReport {
    pub dataset: DatasetId,
    pub accepted: usize,
    pub rejected: usize,
}

/// Extract, transform, validate, assign ids, persist.
///
/// Data-level rejects are part of a successful run; `Err` means the
/// job could not produce its outputs at all (unreadable source,
/// schema/source mismatch).
pub fn run_job(store: &DataStore, job: &dyn DatasetJob) -> Result<JobReport> {
    let target = job.target();
    let span = info_span!("job", dataset = %target);
    let _guard = span.enter();

    let mut frames = Vec::new();
    for dep in job.sources() {
        let path = store.dataset_path(dep.area, dep.kind, dep.format);
        let frame = read_table(&path, dep.format)
            .with_context(|| format!("extracting {}/{} for {target}", dep.area, dep.kind))?;
        frames.push(frame);
    }

    let transformed = job.transform(&frames)?;
    let validated = SchemaValidator::new(target.area).validate(
        &transformed.frame,
        transformed.rejects.as_ref(),
        &job.schema(),
    )?;

    let mut accepted = assign_technical_ids(&validated.accepted, &target)?;
    let mut rejected = validated.rejected;
    write_outputs(store, target, &mut accepted, &mut rejected)?;

    let report = JobReport {
        dataset: target,
        accepted: accepted.height(),
        rejected: rejected.height(),
    };
    info!(
        accepted = report.accepted,
        rejected = report.rejected,
        "job finished"
    );
    Ok(report)
}

pub fn run_area(
    store: &DataStore,
    registry: &JobRegistry,
    area: AreaKind,
) -> Result<Vec<JobReport>> {
    registry
        .jobs_for_area(area)
        .map(|job| run_job(store, job))
        .collect()
}

pub fn run_all(store: &DataStore, registry: &JobRegistry) -> Result<Vec<JobReport>> {
    registry.jobs().map(|job| run_job(store, job)).collect()
}
