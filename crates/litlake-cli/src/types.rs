//! Result types shared between the drivers and the summary printer.

use std::path::PathBuf;

use litlake_transform::JobReport;

/// Outcome of one `litlake pipeline` invocation.
pub struct PipelineResult {
    pub data_root: PathBuf,
    /// One report per executed job, in execution order.
    pub reports: Vec<JobReport>,
    /// Present on full runs only; area-limited runs skip the graph
    /// stage.
    pub graph: Option<GraphOutputs>,
}

/// Where the lineage graph landed and how big it is.
pub struct GraphOutputs {
    pub nodes: usize,
    pub flat_json: PathBuf,
    pub dot: PathBuf,
}
