use anyhow::{Context, Result};
use litlake_model::{Cell, ColumnType, LitlakeError, Schema};
use polars::prelude::{Column, DataFrame, DataType, IntoColumn, NamedFrom, Series};

/// Projects `frame` onto `names` in order. A missing column is a
/// configuration error, reported against `table`.
pub fn project_columns(frame: &DataFrame, names: &[String], table: &str) -> Result<DataFrame> {
    let mut columns = Vec::with_capacity(names.len());
    for name in names {
        let column = frame
            .column(name)
            .map_err(|_| LitlakeError::missing_column(name, table))?;
        columns.push(column.clone());
    }
    DataFrame::new(columns).context("assembling projected frame")
}

/// Builds the typed accepted frame for `schema` from validated rows:
/// integer columns as Int64, string and date columns as strings (dates
/// in their canonical ISO rendering).
pub fn typed_frame(schema: &Schema, rows: &[Vec<Cell>]) -> Result<DataFrame> {
    let sorted = schema.sorted_by_name();
    let columns: Vec<Column> = sorted
        .columns()
        .iter()
        .enumerate()
        .map(|(index, spec)| {
            let name = spec.name.as_str();
            match spec.column_type {
                ColumnType::Integer => {
                    let values: Vec<Option<i64>> = rows
                        .iter()
                        .map(|row| match row[index] {
                            Cell::Int(value) => Some(value),
                            _ => None,
                        })
                        .collect();
                    Series::new(name.into(), values).into_column()
                }
                ColumnType::String | ColumnType::Date => {
                    let values: Vec<Option<String>> =
                        rows.iter().map(|row| row[index].render()).collect();
                    Series::new(name.into(), values).into_column()
                }
            }
        })
        .collect();
    DataFrame::new(columns).context("assembling typed frame")
}

/// Builds the textual reject frame: `reject_reason` first, then the
/// schema columns in canonical order, all strings.
pub fn reject_frame(schema: &Schema, rows: &[(String, Vec<Option<String>>)]) -> Result<DataFrame> {
    let sorted = schema.sorted_by_name();
    let mut columns: Vec<Column> = Vec::with_capacity(sorted.len() + 1);
    let reasons: Vec<String> = rows.iter().map(|(reason, _)| reason.clone()).collect();
    columns.push(Series::new("reject_reason".into(), reasons).into_column());
    for (index, spec) in sorted.columns().iter().enumerate() {
        let values: Vec<Option<String>> = rows.iter().map(|(_, row)| row[index].clone()).collect();
        columns.push(Series::new(spec.name.as_str().into(), values).into_column());
    }
    DataFrame::new(columns).context("assembling reject frame")
}

/// Drops every column whose values are all null. On an empty frame this
/// drops everything, leaving a zero-column frame.
pub fn drop_all_null_columns(frame: &DataFrame) -> Result<DataFrame> {
    let columns: Vec<Column> = frame
        .get_columns()
        .iter()
        .filter(|column| column.null_count() < column.len())
        .cloned()
        .collect();
    DataFrame::new(columns).context("dropping all-null columns")
}

/// Concatenates frames vertically, aligning the union of their columns.
/// A column missing from a frame is null-filled; a column whose dtype
/// differs across frames is cast to String on every side.
pub fn concat_union(frames: &[DataFrame]) -> Result<DataFrame> {
    let frames: Vec<&DataFrame> = frames.iter().filter(|frame| frame.width() > 0).collect();
    if frames.is_empty() {
        return Ok(DataFrame::empty());
    }

    let mut union: Vec<(String, DataType)> = Vec::new();
    for frame in &frames {
        for column in frame.get_columns() {
            let name = column.name().as_str();
            match union.iter_mut().find(|(seen, _)| seen.as_str() == name) {
                None => union.push((name.to_string(), column.dtype().clone())),
                Some((_, dtype)) => {
                    if dtype != column.dtype() {
                        *dtype = DataType::String;
                    }
                }
            }
        }
    }

    let mut aligned: Vec<DataFrame> = Vec::with_capacity(frames.len());
    for frame in &frames {
        let mut columns: Vec<Column> = Vec::with_capacity(union.len());
        for (name, dtype) in &union {
            let column = match frame.column(name) {
                Ok(column) if column.dtype() == dtype => column.clone(),
                Ok(column) => column
                    .cast(dtype)
                    .with_context(|| format!("casting column {name} for concatenation"))?,
                Err(_) => Column::full_null(name.as_str().into(), frame.height(), dtype),
            };
            columns.push(column);
        }
        aligned.push(DataFrame::new(columns).context("aligning frame columns")?);
    }

    let mut parts = aligned.into_iter();
    let mut result = parts.next().unwrap_or_else(DataFrame::empty);
    for part in parts {
        result
            .vstack_mut(&part)
            .context("concatenating aligned frames")?;
    }
    Ok(result)
}
