//! Optimized to business job: the drug mention fact table.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::Result;
use litlake_model::{AreaKind, ColumnSpec, ColumnType, DataFormat, DatasetId, DatasetKind, Schema};
use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};

use crate::job::{DatasetJob, SourceRef, Transformed};
use crate::jobs::{source, text_column};

/// Cross joins drugs against publications on a word-level title
/// match. Every drug contributes at least one row: drugs mentioned
/// nowhere emit a row with null publication fields, which downstream
/// validation then rejects.
pub struct BusinessMention;

impl DatasetJob for BusinessMention {
    fn target(&self) -> DatasetId {
        DatasetId::new(AreaKind::Business, DatasetKind::Mention)
    }

    fn sources(&self) -> Vec<SourceRef> {
        vec![
            SourceRef::new(AreaKind::Optimized, DatasetKind::Drugs, DataFormat::Ipc),
            SourceRef::new(AreaKind::Optimized, DatasetKind::Journal, DataFormat::Ipc),
            SourceRef::new(AreaKind::Optimized, DatasetKind::Publication, DataFormat::Ipc),
        ]
    }

    fn schema(&self) -> Schema {
        Schema::new(vec![
            ColumnSpec::new("title", ColumnType::String, true),
            ColumnSpec::new("publication_type", ColumnType::String, true),
            ColumnSpec::new("publication_date", ColumnType::String, true),
            ColumnSpec::new("journal_name", ColumnType::String, true),
            ColumnSpec::new("drug", ColumnType::String, true),
            ColumnSpec::new("drug_id", ColumnType::String, true),
            ColumnSpec::new("publication_id", ColumnType::String, true),
            ColumnSpec::new("journal_id", ColumnType::String, true),
            ColumnSpec::new("functional_id", ColumnType::String, true),
        ])
    }

    fn transform(&self, sources: &[DataFrame]) -> Result<Transformed> {
        let drugs = source(sources, 0)?;
        let journals = source(sources, 1)?;
        let publications = source(sources, 2)?;

        let journal_names = journal_names(journals)?;
        let records = publication_records(publications)?;
        let drug_ids = text_column(drugs, "id", "optimized drugs")?;
        let drug_names = text_column(drugs, "drug", "optimized drugs")?;

        let mut rows = MentionRows::default();
        // Dedup on (drug, publication, journal); null fields compare
        // equal within the key.
        let mut seen: BTreeSet<(Option<String>, Option<String>, Option<String>)> = BTreeSet::new();

        for (drug_id, drug) in drug_ids.iter().zip(&drug_names) {
            let mut matched = false;
            if let Some(drug_name) = drug.as_deref() {
                for record in &records {
                    if !record.tokens.contains(drug_name) {
                        continue;
                    }
                    matched = true;
                    let key = (drug.clone(), record.id.clone(), record.journal_id.clone());
                    if seen.insert(key) {
                        rows.push_match(record, drug_id.clone(), drug.clone(), &journal_names);
                    }
                }
            }
            if !matched && seen.insert((drug.clone(), None, None)) {
                rows.push_unmatched(drug_id.clone(), drug.clone());
            }
        }

        Ok(Transformed::clean(rows.into_frame()?))
    }
}

/// Journal technical id to display name.
fn journal_names(frame: &DataFrame) -> Result<BTreeMap<String, String>> {
    let ids = text_column(frame, "id", "optimized journal")?;
    let names = text_column(frame, "name", "optimized journal")?;
    let mut index = BTreeMap::new();
    for (id, name) in ids.into_iter().zip(names) {
        if let (Some(id), Some(name)) = (id, name) {
            index.entry(id).or_insert(name);
        }
    }
    Ok(index)
}

struct PublicationRecord {
    id: Option<String>,
    title: Option<String>,
    /// Uppercased title words, split on single spaces.
    tokens: BTreeSet<String>,
    date: Option<String>,
    journal_id: Option<String>,
    publication_type: Option<String>,
    functional_id: Option<String>,
}

fn publication_records(frame: &DataFrame) -> Result<Vec<PublicationRecord>> {
    let table = "optimized publication";
    let ids = text_column(frame, "id", table)?;
    let titles = text_column(frame, "title", table)?;
    let dates = text_column(frame, "date", table)?;
    let journal_ids = text_column(frame, "journal_id", table)?;
    let publication_types = text_column(frame, "publication_type", table)?;
    let functional_ids = text_column(frame, "functional_id", table)?;

    Ok((0..frame.height())
        .map(|row| {
            let title = titles[row].clone();
            let tokens = title
                .as_deref()
                .map(|value| {
                    value
                        .to_uppercase()
                        .split(' ')
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();
            PublicationRecord {
                id: ids[row].clone(),
                title,
                tokens,
                date: dates[row].clone(),
                journal_id: journal_ids[row].clone(),
                publication_type: publication_types[row].clone(),
                functional_id: functional_ids[row].clone(),
            }
        })
        .collect())
}

#[derive(Default)]
struct MentionRows {
    titles: Vec<Option<String>>,
    publication_types: Vec<Option<String>>,
    publication_dates: Vec<Option<String>>,
    journal_names: Vec<Option<String>>,
    drugs: Vec<Option<String>>,
    drug_ids: Vec<Option<String>>,
    publication_ids: Vec<Option<String>>,
    journal_ids: Vec<Option<String>>,
    functional_ids: Vec<Option<String>>,
}

impl MentionRows {
    fn push_match(
        &mut self,
        record: &PublicationRecord,
        drug_id: Option<String>,
        drug: Option<String>,
        journal_names: &BTreeMap<String, String>,
    ) {
        let journal_name = record
            .journal_id
            .as_deref()
            .and_then(|id| journal_names.get(id))
            .cloned();
        self.titles.push(record.title.clone());
        self.publication_types.push(record.publication_type.clone());
        self.publication_dates.push(record.date.clone());
        self.journal_names.push(journal_name);
        self.drugs.push(drug);
        self.drug_ids.push(drug_id);
        self.publication_ids.push(record.id.clone());
        self.journal_ids.push(record.journal_id.clone());
        self.functional_ids.push(record.functional_id.clone());
    }

    fn push_unmatched(&mut self, drug_id: Option<String>, drug: Option<String>) {
        self.titles.push(None);
        self.publication_types.push(None);
        self.publication_dates.push(None);
        self.journal_names.push(None);
        self.drugs.push(drug);
        self.drug_ids.push(drug_id);
        self.publication_ids.push(None);
        self.journal_ids.push(None);
        self.functional_ids.push(None);
    }

    fn into_frame(self) -> Result<DataFrame> {
        Ok(DataFrame::new(vec![
            Series::new("title".into(), self.titles).into_column(),
            Series::new("publication_type".into(), self.publication_types).into_column(),
            Series::new("publication_date".into(), self.publication_dates).into_column(),
            Series::new("journal_name".into(), self.journal_names).into_column(),
            Series::new("drug".into(), self.drugs).into_column(),
            Series::new("drug_id".into(), self.drug_ids).into_column(),
            Series::new("publication_id".into(), self.publication_ids).into_column(),
            Series::new("journal_id".into(), self.journal_ids).into_column(),
            Series::new("functional_id".into(), self.functional_ids).into_column(),
        ])?)
    }
}
