//! End-to-end runs of the CLI drivers over a small data root.

use std::fs;
use std::path::Path;

use litlake_cli::runner::{build_graph, run_pipeline};
use litlake_model::{AreaKind, DataStore};

const CLINICAL_TRIAL_CSV: &str = "\
id,scientific_title,date,journal
NCT100,Tetracycline in context,1 January 2020,Journal of emergency nursing
NCT200,Epinephrine outcomes,1 January 2020,Journal of emergency nursing
";

const DRUGS_CSV: &str = "\
atccode,drug
S03AA,TETRACYCLINE
A01AD,EPINEPHRINE
";

const PUBMED_CSV: &str = "\
id,title,date,journal
1,Tetracycline and epinephrine together,01/01/2020,Journal of emergency nursing
";

const PUBMED_JSON: &str = r#"[
  {"id": 2, "title": "Epinephrine rescue", "date": "01/01/2020", "journal": "Psychopharmacology"}
]"#;

fn write_fixtures(root: &Path) {
    let raw = root.join("raw");
    fs::create_dir_all(&raw).unwrap();
    fs::write(raw.join("clinical_trial.csv"), CLINICAL_TRIAL_CSV).unwrap();
    fs::write(raw.join("drugs.csv"), DRUGS_CSV).unwrap();
    fs::write(raw.join("pubmed.csv"), PUBMED_CSV).unwrap();
    fs::write(raw.join("pubmed.json"), PUBMED_JSON).unwrap();
}

#[test]
fn full_run_produces_reports_and_graph() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());

    let result = run_pipeline(dir.path(), None).unwrap();
    let counts: Vec<(String, usize, usize)> = result
        .reports
        .iter()
        .map(|report| (report.dataset.to_string(), report.accepted, report.rejected))
        .collect();
    assert_eq!(
        counts,
        [
            ("refined/clinical_trial".to_string(), 2, 0),
            ("refined/drugs".to_string(), 2, 0),
            ("refined/pubmed".to_string(), 2, 0),
            ("refined/journal".to_string(), 2, 0),
            ("optimized/drugs".to_string(), 2, 0),
            ("optimized/journal".to_string(), 2, 0),
            ("optimized/publication".to_string(), 4, 0),
            ("business/mention".to_string(), 5, 0),
        ]
    );

    // 4 publications, 2 journals, 2 drugs.
    let graph = result.graph.expect("full runs build the graph");
    assert_eq!(graph.nodes, 8);
    assert!(graph.dot.is_file());

    let raw = fs::read(&graph.flat_json).unwrap();
    assert!(raw.is_ascii());
    let parsed: serde_json::Value = serde_json::from_slice(&raw).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), graph.nodes);

    let dot = fs::read_to_string(&graph.dot).unwrap();
    assert!(dot.starts_with("digraph lineage {"));
}

#[test]
fn area_run_skips_the_graph_stage() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());

    let result = run_pipeline(dir.path(), Some(AreaKind::Refined)).unwrap();
    assert_eq!(result.reports.len(), 4);
    assert!(result.graph.is_none());
    assert!(!dir.path().join("flat_result.json").exists());
}

#[test]
fn graph_output_paths_can_be_overridden() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    run_pipeline(dir.path(), None).unwrap();

    let store = DataStore::new(dir.path());
    let json_out = dir.path().join("exports/nodes.json");
    let dot_out = dir.path().join("exports/nodes.dot");
    fs::create_dir_all(dir.path().join("exports")).unwrap();
    let outputs = build_graph(&store, Some(json_out.clone()), Some(dot_out.clone())).unwrap();

    assert_eq!(outputs.flat_json, json_out);
    assert_eq!(outputs.dot, dot_out);
    assert!(json_out.is_file());
    assert!(dot_out.is_file());
    assert_eq!(outputs.nodes, 8);
}
