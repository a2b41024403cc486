//! Lineage graph construction from mention rows, plus the flat JSON
//! and DOT exports.

use litlake_graph::{LineageGraph, MentionRow, NodeType};
use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};

fn mention_row(
    publication_id: &str,
    publication_type: NodeType,
    journal_id: &str,
    drug_id: &str,
    publication_date: Option<&str>,
) -> MentionRow {
    MentionRow {
        publication_id: publication_id.to_string(),
        publication_type,
        journal_id: journal_id.to_string(),
        journal_name: format!("Journal {journal_id}"),
        drug_id: drug_id.to_string(),
        drug: format!("Drug {drug_id}"),
        publication_date: publication_date.map(str::to_string),
        functional_id: format!("F-{publication_id}"),
    }
}

fn mention_frame(rows: &[MentionRow]) -> DataFrame {
    let text = |name: &str, values: Vec<Option<String>>| {
        Series::new(name.into(), values).into_column()
    };
    DataFrame::new(vec![
        text(
            "publication_id",
            rows.iter().map(|r| Some(r.publication_id.clone())).collect(),
        ),
        text(
            "publication_type",
            rows.iter()
                .map(|r| Some(r.publication_type.to_string()))
                .collect(),
        ),
        text(
            "journal_id",
            rows.iter().map(|r| Some(r.journal_id.clone())).collect(),
        ),
        text(
            "journal_name",
            rows.iter().map(|r| Some(r.journal_name.clone())).collect(),
        ),
        text(
            "drug_id",
            rows.iter().map(|r| Some(r.drug_id.clone())).collect(),
        ),
        text("drug", rows.iter().map(|r| Some(r.drug.clone())).collect()),
        text(
            "publication_date",
            rows.iter().map(|r| r.publication_date.clone()).collect(),
        ),
        text(
            "functional_id",
            rows.iter().map(|r| Some(r.functional_id.clone())).collect(),
        ),
    ])
    .unwrap()
}

#[test]
fn first_row_creates_all_candidates_and_one_drug_parent() {
    let mut graph = LineageGraph::new();
    graph.process_row(&mention_row("P1", NodeType::ClinicalTrial, "J1", "D1", None));

    assert_eq!(graph.node_count(), 3);
    let publication = &graph.nodes()[0];
    assert_eq!(publication.id, "P1");
    assert_eq!(publication.node_type, NodeType::ClinicalTrial);
    assert_eq!(publication.value, "F-P1");
    // The PUBMED candidate of the same row finds the publication the
    // CLINICAL_TRIAL candidate just created and attaches its drug.
    assert_eq!(publication.parents.len(), 1);
    let parent = publication.parents.values().next().unwrap();
    assert_eq!(parent.id, "D1");
    assert_eq!(parent.node_type, NodeType::Drug);
    assert_eq!(parent.date, None);
    assert!(graph.nodes()[1].parents.is_empty());
    assert!(graph.nodes()[2].parents.is_empty());
}

#[test]
fn repeated_rows_attach_parents_to_existing_nodes() {
    let mut graph = LineageGraph::new();
    let row = mention_row("P1", NodeType::ClinicalTrial, "J1", "D1", Some("2021-03-04"));
    graph.process_row(&row);
    graph.process_row(&row);

    assert_eq!(graph.node_count(), 3);
    let journal = &graph.nodes()[1];
    assert_eq!(journal.parents.len(), 1);
    let parent = journal.parents.values().next().unwrap();
    assert_eq!(parent.id, "P1");
    assert_eq!(parent.node_type, NodeType::ClinicalTrial);
    assert_eq!(parent.date.as_deref(), Some("2021-03-04"));

    let drug = &graph.nodes()[2];
    assert_eq!(drug.parents.len(), 1);
    let parent = drug.parents.values().next().unwrap();
    assert_eq!(parent.id, "J1");
    assert_eq!(parent.node_type, NodeType::Journal);
    assert_eq!(parent.date, None);
}

#[test]
fn journals_collect_one_parent_per_publication() {
    let mut graph = LineageGraph::new();
    let first = mention_row("P1", NodeType::Pubmed, "J1", "D1", Some("2020-01-01"));
    let second = mention_row("P2", NodeType::Pubmed, "J1", "D1", Some("2020-02-02"));
    graph.process_row(&first);
    graph.process_row(&second);
    graph.process_row(&first);

    assert_eq!(graph.node_count(), 4);
    let journal = &graph.nodes()[1];
    assert_eq!(journal.parents.len(), 2);
    let ids: Vec<&str> = journal.parents.values().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["P1", "P2"]);
}

#[test]
fn drug_parents_carry_dates_only_from_pubmed_rows() {
    let mut graph = LineageGraph::new();
    let trial = mention_row("P1", NodeType::ClinicalTrial, "J1", "D1", Some("2020-01-01"));
    graph.process_row(&trial);
    graph.process_row(&trial);
    let drug = &graph.nodes()[2];
    assert_eq!(drug.parents.values().next().unwrap().date, None);

    let mut graph = LineageGraph::new();
    let article = mention_row("P2", NodeType::Pubmed, "J2", "D2", Some("2020-06-07"));
    graph.process_row(&article);
    graph.process_row(&article);
    let drug = &graph.nodes()[2];
    assert_eq!(
        drug.parents.values().next().unwrap().date.as_deref(),
        Some("2020-06-07")
    );
}

#[test]
fn parent_dates_keep_the_first_attached_value() {
    let mut graph = LineageGraph::new();
    graph.process_row(&mention_row("P1", NodeType::Pubmed, "J1", "D1", Some("2020-01-01")));
    graph.process_row(&mention_row("P1", NodeType::Pubmed, "J1", "D1", Some("2021-06-15")));
    graph.process_row(&mention_row("P1", NodeType::Pubmed, "J1", "D1", Some("2023-12-31")));

    // The first row only creates the journal; the second attaches the
    // parent, and the third cannot overwrite its date.
    let journal = &graph.nodes()[1];
    assert_eq!(journal.parents.len(), 1);
    assert_eq!(
        journal.parents.values().next().unwrap().date.as_deref(),
        Some("2021-06-15")
    );
}

#[test]
fn publication_ids_share_one_namespace_across_types() {
    let mut graph = LineageGraph::new();
    graph.process_row(&mention_row("P1", NodeType::ClinicalTrial, "J1", "D1", None));
    graph.process_row(&mention_row("P1", NodeType::Pubmed, "J2", "D2", Some("2022-02-02")));

    assert_eq!(graph.node_count(), 5);
    let publications: Vec<_> = graph.nodes().iter().filter(|n| n.id == "P1").collect();
    assert_eq!(publications.len(), 1);
    assert_eq!(publications[0].node_type, NodeType::ClinicalTrial);
}

#[test]
fn flat_json_lists_nodes_with_their_parents() {
    let mut graph = LineageGraph::new();
    graph.process_row(&MentionRow {
        publication_id: "P1".to_string(),
        publication_type: NodeType::ClinicalTrial,
        journal_id: "J1".to_string(),
        journal_name: "Science".to_string(),
        drug_id: "D1".to_string(),
        drug: "EPINEPHRINE".to_string(),
        publication_date: None,
        functional_id: "NCT123".to_string(),
    });

    insta::assert_snapshot!(
        graph.to_flat_json().unwrap(),
        @r#"[{"id":"P1","type":"CLINICAL_TRIAL","value":"NCT123","parents":[{"id":"D1","type":"DRUG","date":null}]},{"id":"J1","type":"JOURNAL","value":"Science","parents":[]},{"id":"D1","type":"DRUG","value":"EPINEPHRINE","parents":[]}]"#
    );
}

#[test]
fn flat_json_is_pure_ascii() {
    let mut graph = LineageGraph::new();
    let mut row = mention_row("P1", NodeType::Pubmed, "J1", "D1", Some("2020-01-01"));
    row.journal_name = "Hôpitaux Universitaires de Genève".to_string();
    graph.process_row(&row);

    let json = graph.to_flat_json().unwrap();
    assert!(json.is_ascii());
    assert!(json.contains("H\\u00f4pitaux"));
    assert!(json.contains("Gen\\u00e8ve"));
}

#[test]
fn ingest_frame_reads_mention_columns() {
    let rows = vec![
        mention_row("P1", NodeType::ClinicalTrial, "J1", "D1", Some("2021-01-01")),
        mention_row("P2", NodeType::Pubmed, "J1", "D1", None),
    ];
    let frame = mention_frame(&rows);

    let mut graph = LineageGraph::new();
    graph.ingest_frame(&frame).unwrap();

    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.nodes()[0].value, "F-P1");
    assert_eq!(graph.nodes()[1].value, "Journal J1");
    let journal = &graph.nodes()[1];
    assert_eq!(journal.parents.len(), 1);
    assert_eq!(
        journal.parents.values().next().unwrap().node_type,
        NodeType::Pubmed
    );
}

#[test]
fn unknown_publication_type_is_an_error() {
    let rows = vec![mention_row("P1", NodeType::ClinicalTrial, "J1", "D1", None)];
    let mut frame = mention_frame(&rows);
    frame
        .replace(
            "publication_type",
            Series::new("publication_type".into(), vec!["BOGUS"]),
        )
        .unwrap();

    let mut graph = LineageGraph::new();
    let err = graph.ingest_frame(&frame).unwrap_err();
    assert!(err.to_string().contains("Unknown node type: BOGUS"));
}

#[test]
fn missing_mention_column_is_an_error() {
    let rows = vec![mention_row("P1", NodeType::ClinicalTrial, "J1", "D1", None)];
    let mut frame = mention_frame(&rows);
    frame.drop_in_place("drug").unwrap();

    let mut graph = LineageGraph::new();
    let err = graph.ingest_frame(&frame).unwrap_err();
    assert!(
        err.to_string()
            .contains("column drug is missing from the mention table")
    );
}

#[test]
fn exports_write_their_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut graph = LineageGraph::new();
    graph.process_row(&mention_row("P1", NodeType::ClinicalTrial, "J1", "D1", None));

    let json_path = dir.path().join("flat_result.json");
    graph.write_flat_json(&json_path).unwrap();
    let json = std::fs::read_to_string(&json_path).unwrap();
    assert!(json.starts_with('['));

    let dot_path = dir.path().join("graph.dot");
    graph.write_dot(&dot_path).unwrap();
    let dot = std::fs::read_to_string(&dot_path).unwrap();
    assert!(dot.contains("\"P1\" -> \"D1\";"));
}
