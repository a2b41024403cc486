pub mod job;
pub mod jobs;
pub mod pipeline;
pub mod registry;

pub use job::{DatasetJob, SourceRef, Transformed};
pub use pipeline::{JobReport, run_all, run_area, run_job};
pub use registry::JobRegistry;
