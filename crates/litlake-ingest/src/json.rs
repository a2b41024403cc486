use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result, bail};
use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use serde_json::Value;
use tracing::debug;

/// Reads a JSON array of flat objects into a `DataFrame`.
///
/// Columns are the union of the object keys. A column whose every
/// present value is an integer becomes Int64, anything else a string
/// column; missing keys and JSON nulls become null.
pub fn read_json(path: &Path) -> Result<DataFrame> {
    let file =
        File::open(path).with_context(|| format!("opening JSON file {}", path.display()))?;
    let records: Vec<Value> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing JSON file {}", path.display()))?;

    let mut names: Vec<String> = Vec::new();
    for record in &records {
        let Value::Object(fields) = record else {
            bail!("JSON table {} must be an array of objects", path.display());
        };
        for key in fields.keys() {
            if !names.iter().any(|name| name == key) {
                names.push(key.clone());
            }
        }
    }

    let columns: Vec<Column> = names
        .iter()
        .map(|name| build_column(name, &records))
        .collect();
    let frame = DataFrame::new(columns)
        .with_context(|| format!("assembling JSON table {}", path.display()))?;
    debug!(path = %path.display(), rows = frame.height(), "loaded json table");
    Ok(frame)
}

fn build_column(name: &str, records: &[Value]) -> Column {
    let cells: Vec<&Value> = records
        .iter()
        .map(|record| record.get(name).unwrap_or(&Value::Null))
        .collect();
    let integral = cells
        .iter()
        .filter(|value| !value.is_null())
        .all(|value| value.is_i64());
    if integral {
        let values: Vec<Option<i64>> = cells.iter().map(|value| value.as_i64()).collect();
        Series::new(name.into(), values).into()
    } else {
        let values: Vec<Option<String>> = cells.iter().map(|value| render_value(value)).collect();
        Series::new(name.into(), values).into()
    }
}

fn render_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
