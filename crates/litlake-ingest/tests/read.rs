//! Integration tests for the table readers.

use std::fs::{self, File};

use polars::prelude::{DataFrame, DataType, IntoColumn, IpcWriter, NamedFrom, SerWriter, Series};

use litlake_ingest::{read_csv, read_ipc, read_json, read_table, render_any};
use litlake_model::DataFormat;

fn cell(frame: &DataFrame, column: &str, row: usize) -> Option<String> {
    let value = frame
        .column(column)
        .expect("column")
        .get(row)
        .expect("row in range");
    render_any(&value)
}

#[test]
fn csv_reads_header_and_infers_types() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("drugs.csv");
    fs::write(
        &path,
        "atccode,drug,count\nA04AD,DIPHENHYDRAMINE,3\n,EPINEPHRINE,\nR01AD,,5\n",
    )
    .expect("write csv");

    let frame = read_csv(&path).expect("read csv");
    assert_eq!(frame.height(), 3);
    assert_eq!(frame.width(), 3);
    assert_eq!(
        frame.column("count").expect("count").dtype(),
        &DataType::Int64
    );
    assert_eq!(cell(&frame, "atccode", 0), Some("A04AD".to_string()));
    assert_eq!(cell(&frame, "atccode", 1), None);
    assert_eq!(cell(&frame, "drug", 2), None);
    assert_eq!(cell(&frame, "count", 1), None);
    assert_eq!(cell(&frame, "count", 2), Some("5".to_string()));
}

#[test]
fn json_builds_union_of_keys() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("pubmed.json");
    fs::write(
        &path,
        r#"[
            {"id": 9, "title": "Gold nanoparticles", "journal": "Science"},
            {"id": 10, "title": "Clinical implications", "journal": null},
            {"title": "Missing id", "journal": "Nature"}
        ]"#,
    )
    .expect("write json");

    let frame = read_json(&path).expect("read json");
    assert_eq!(frame.height(), 3);
    assert_eq!(frame.width(), 3);
    assert_eq!(frame.column("id").expect("id").dtype(), &DataType::Int64);
    assert_eq!(cell(&frame, "id", 0), Some("9".to_string()));
    assert_eq!(cell(&frame, "id", 2), None);
    assert_eq!(cell(&frame, "journal", 1), None);
    assert_eq!(cell(&frame, "journal", 2), Some("Nature".to_string()));
}

#[test]
fn json_mixed_column_becomes_string() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("mixed.json");
    fs::write(&path, r#"[{"id": 1}, {"id": "a"}]"#).expect("write json");

    let frame = read_json(&path).expect("read json");
    assert_eq!(frame.column("id").expect("id").dtype(), &DataType::String);
    assert_eq!(cell(&frame, "id", 0), Some("1".to_string()));
    assert_eq!(cell(&frame, "id", 1), Some("a".to_string()));
}

#[test]
fn json_rejects_non_object_rows() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("bad.json");
    fs::write(&path, "[1, 2]").expect("write json");
    assert!(read_json(&path).is_err());
}

#[test]
fn ipc_round_trips_a_frame() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("journal.ipc");

    let mut frame = DataFrame::new(vec![
        Series::new("journal_id".into(), vec!["science", "nature"]).into_column(),
        Series::new("name".into(), vec!["Science", "Nature"]).into_column(),
    ])
    .expect("build frame");
    let file = File::create(&path).expect("create ipc");
    IpcWriter::new(file).finish(&mut frame).expect("write ipc");

    let loaded = read_ipc(&path).expect("read ipc");
    assert_eq!(loaded.height(), 2);
    assert_eq!(cell(&loaded, "name", 1), Some("Nature".to_string()));
}

#[test]
fn read_table_dispatches_on_format() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("trials.csv");
    fs::write(&path, "id,journal\nNCT01967433,Science\n").expect("write csv");

    let frame = read_table(&path, DataFormat::Csv).expect("read table");
    assert_eq!(frame.height(), 1);
    assert_eq!(cell(&frame, "id", 0), Some("NCT01967433".to_string()));
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("absent.csv");
    assert!(read_csv(&path).is_err());
}
