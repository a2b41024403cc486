//! Library components of the litlake CLI: logging setup and the
//! pipeline/graph drivers the binary dispatches to.

pub mod logging;
pub mod runner;
pub mod types;
