//! The eight dataset jobs, one module per target area.

pub mod business;
pub mod optimized;
pub mod refined;

pub use business::BusinessMention;
pub use optimized::{OptimizedDrugs, OptimizedJournal, OptimizedPublication};
pub use refined::{RefinedClinicalTrial, RefinedDrugs, RefinedJournal, RefinedPubmed};

use anyhow::{Result, anyhow};
use litlake_ingest::render_any;
use litlake_model::LitlakeError;
use polars::prelude::{AnyValue, DataFrame};

/// Positional source lookup. The runner passes frames in `sources()`
/// order, so a miss is a wiring error, not bad data.
pub(crate) fn source<'a>(sources: &'a [DataFrame], index: usize) -> Result<&'a DataFrame> {
    sources
        .get(index)
        .ok_or_else(|| anyhow!("missing source table at position {index}"))
}

/// Renders one column to text, null-preserving.
pub(crate) fn text_column(
    frame: &DataFrame,
    name: &str,
    table: &str,
) -> Result<Vec<Option<String>>> {
    let column = frame
        .column(name)
        .map_err(|_| LitlakeError::missing_column(name, table))?;
    Ok((0..frame.height())
        .map(|row| render_any(&column.get(row).unwrap_or(AnyValue::Null)))
        .collect())
}
