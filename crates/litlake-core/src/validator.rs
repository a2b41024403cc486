use std::collections::BTreeMap;

use anyhow::Result;
use litlake_ingest::{format_numeric, render_any};
use litlake_model::{AreaKind, Cell, ColumnType, LitlakeError, Schema};
use polars::prelude::{AnyValue, DataFrame};
use tracing::debug;

use crate::dates::parse_date_dayfirst;
use crate::frame::{concat_union, drop_all_null_columns, project_columns, reject_frame, typed_frame};
use crate::text::clean_text;

/// Outcome of one validation pass.
#[derive(Debug)]
pub struct Validated {
    pub accepted: DataFrame,
    pub rejected: DataFrame,
}

/// Validates candidate tables against a declared schema.
///
/// Rows split into an accepted table, typed per the schema, and a
/// rejected table, all-textual with a `reject_reason` column first.
/// Row-level failures are data, not errors; `Err` is reserved for
/// configuration problems (a schema column missing from the candidate,
/// external rejects without a reason column).
pub struct SchemaValidator {
    area: AreaKind,
}

impl SchemaValidator {
    pub fn new(area: AreaKind) -> Self {
        Self { area }
    }

    pub fn validate(
        &self,
        frame: &DataFrame,
        external_rejects: Option<&DataFrame>,
        schema: &Schema,
    ) -> Result<Validated> {
        let schema = schema.sorted_by_name();
        let names = schema.sorted_names();
        let candidate = project_columns(frame, &names, "candidate")?;

        let mut accepted_rows: Vec<Vec<Cell>> = Vec::new();
        let mut rejected_rows: Vec<(String, Vec<Option<String>>)> = Vec::new();
        let columns = candidate.get_columns();
        for row in 0..candidate.height() {
            let raw: Vec<AnyValue> = columns
                .iter()
                .map(|column| column.get(row).unwrap_or(AnyValue::Null))
                .collect();
            match self.check_row(&schema, &raw) {
                Ok(cells) => accepted_rows.push(cells),
                Err(reason) => rejected_rows.push((reason, raw.iter().map(render_any).collect())),
            }
        }

        let mut rejected = reject_frame(&schema, &rejected_rows)?;
        if let Some(external) = external_rejects {
            rejected = merge_external_rejects(&rejected, external)?;
        }

        let (accepted_rows, duplicate_rows) = split_duplicate_keys(&schema, accepted_rows);
        if !duplicate_rows.is_empty() {
            let duplicates = reject_frame(&schema, &duplicate_rows)?;
            rejected = concat_union(&[rejected, duplicates])?;
        }

        let accepted = typed_frame(&schema, &accepted_rows)?;
        debug!(
            area = %self.area,
            accepted = accepted.height(),
            rejected = rejected.height(),
            "validated table"
        );
        Ok(Validated { accepted, rejected })
    }

    /// Checks one row against the schema, left to right in canonical
    /// column order; the first failing column decides the reason.
    fn check_row(&self, schema: &Schema, raw: &[AnyValue]) -> Result<Vec<Cell>, String> {
        let mut cells = Vec::with_capacity(raw.len());
        for (spec, value) in schema.columns().iter().zip(raw) {
            let value = self.normalize(value);
            if value.is_null() {
                if spec.required {
                    return Err(format!("Column {} should not be empty", spec.name));
                }
                cells.push(Cell::Null);
                continue;
            }
            match coerce(&value, spec.column_type) {
                Some(cell) => cells.push(cell),
                None => {
                    return Err(format!(
                        "Column {} cannot be converted to {}",
                        spec.name,
                        spec.column_type.as_str()
                    ));
                }
            }
        }
        Ok(cells)
    }

    /// Maps a raw value into the working representation; refined-area
    /// text additionally goes through [`clean_text`], where an
    /// empty-after-cleaning value becomes null.
    fn normalize(&self, value: &AnyValue) -> RawValue {
        let value = raw_value(value);
        if self.area == AreaKind::Refined
            && let RawValue::Text(text) = &value
        {
            return match clean_text(text) {
                Some(clean) => RawValue::Text(clean),
                None => RawValue::Null,
            };
        }
        value
    }
}

/// Untyped value as extracted, reduced to the shapes coercion cares
/// about.
enum RawValue {
    Null,
    Text(String),
    Int(i64),
    Float(f64),
}

impl RawValue {
    fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }
}

fn raw_value(value: &AnyValue) -> RawValue {
    match value {
        AnyValue::Null => RawValue::Null,
        AnyValue::String(text) => RawValue::Text((*text).to_string()),
        AnyValue::StringOwned(text) => RawValue::Text(text.to_string()),
        AnyValue::Int8(number) => RawValue::Int(i64::from(*number)),
        AnyValue::Int16(number) => RawValue::Int(i64::from(*number)),
        AnyValue::Int32(number) => RawValue::Int(i64::from(*number)),
        AnyValue::Int64(number) => RawValue::Int(*number),
        AnyValue::UInt8(number) => RawValue::Int(i64::from(*number)),
        AnyValue::UInt16(number) => RawValue::Int(i64::from(*number)),
        AnyValue::UInt32(number) => RawValue::Int(i64::from(*number)),
        AnyValue::UInt64(number) => RawValue::Int(*number as i64),
        AnyValue::Float32(number) => float_value(f64::from(*number)),
        AnyValue::Float64(number) => float_value(*number),
        other => RawValue::Text(other.to_string()),
    }
}

/// NaN means missing at the extraction boundary.
fn float_value(value: f64) -> RawValue {
    if value.is_nan() {
        RawValue::Null
    } else {
        RawValue::Float(value)
    }
}

fn coerce(value: &RawValue, column_type: ColumnType) -> Option<Cell> {
    match column_type {
        ColumnType::String => match value {
            RawValue::Text(text) => Some(Cell::Str(text.clone())),
            RawValue::Int(number) => Some(Cell::Str(number.to_string())),
            RawValue::Float(number) => Some(Cell::Str(format_numeric(*number))),
            RawValue::Null => None,
        },
        ColumnType::Integer => match value {
            RawValue::Int(number) => Some(Cell::Int(*number)),
            RawValue::Float(number) if number.is_finite() => {
                Some(Cell::Int(number.trunc() as i64))
            }
            RawValue::Text(text) => text.trim().parse::<i64>().ok().map(Cell::Int),
            _ => None,
        },
        ColumnType::Date => match value {
            RawValue::Text(text) => parse_date_dayfirst(text).map(Cell::Date),
            _ => None,
        },
    }
}

/// Moves every accepted row whose value repeats on a functional-key
/// column into the duplicate list, one key column at a time in
/// canonical order. All colliding rows go, not just the extras.
fn split_duplicate_keys(
    schema: &Schema,
    rows: Vec<Vec<Cell>>,
) -> (Vec<Vec<Cell>>, Vec<(String, Vec<Option<String>>)>) {
    let names = schema.sorted_names();
    let mut accepted = rows;
    let mut duplicates = Vec::new();
    for key in schema.functional_keys() {
        let Some(index) = names.iter().position(|name| name == &key.name) else {
            continue;
        };
        let mut counts: BTreeMap<Cell, usize> = BTreeMap::new();
        for row in &accepted {
            *counts.entry(row[index].clone()).or_insert(0) += 1;
        }
        let (colliding, kept): (Vec<_>, Vec<_>) = accepted
            .into_iter()
            .partition(|row| counts.get(&row[index]).copied().unwrap_or(0) > 1);
        accepted = kept;
        for row in colliding {
            duplicates.push((
                format!("Duplicate value on column {}", key.name),
                row.iter().map(Cell::render).collect(),
            ));
        }
    }
    (accepted, duplicates)
}

/// Aligns externally-produced rejects with the validator's reject
/// frame and concatenates them below it. The external table must
/// already carry a `reject_reason`; all-null columns are dropped from
/// both sides first.
fn merge_external_rejects(rejected: &DataFrame, external: &DataFrame) -> Result<DataFrame> {
    if external.column("reject_reason").is_err() {
        return Err(LitlakeError::MissingRejectReason.into());
    }
    let names: Vec<String> = rejected
        .get_column_names_str()
        .into_iter()
        .map(String::from)
        .collect();
    let external = project_columns(external, &names, "external rejects")?;
    let internal = drop_all_null_columns(rejected)?;
    let external = drop_all_null_columns(&external)?;
    concat_union(&[internal, external])
}
