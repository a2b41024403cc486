//! Refined to optimized jobs: journal resolution and the unified
//! publication table.

use std::collections::BTreeMap;

use anyhow::Result;
use litlake_core::functional_key;
use litlake_model::{AreaKind, ColumnSpec, ColumnType, DataFormat, DatasetId, DatasetKind, Schema};
use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};

use crate::job::{DatasetJob, SourceRef, Transformed};
use crate::jobs::{source, text_column};

pub struct OptimizedDrugs;

impl DatasetJob for OptimizedDrugs {
    fn target(&self) -> DatasetId {
        DatasetId::new(AreaKind::Optimized, DatasetKind::Drugs)
    }

    fn sources(&self) -> Vec<SourceRef> {
        vec![SourceRef::new(
            AreaKind::Refined,
            DatasetKind::Drugs,
            DataFormat::Ipc,
        )]
    }

    fn schema(&self) -> Schema {
        Schema::new(vec![
            ColumnSpec::new("atccode", ColumnType::String, true).functional_key(),
            ColumnSpec::new("drug", ColumnType::String, true),
        ])
    }

    fn transform(&self, sources: &[DataFrame]) -> Result<Transformed> {
        Ok(Transformed::clean(source(sources, 0)?.clone()))
    }
}

pub struct OptimizedJournal;

impl DatasetJob for OptimizedJournal {
    fn target(&self) -> DatasetId {
        DatasetId::new(AreaKind::Optimized, DatasetKind::Journal)
    }

    fn sources(&self) -> Vec<SourceRef> {
        vec![SourceRef::new(
            AreaKind::Refined,
            DatasetKind::Journal,
            DataFormat::Ipc,
        )]
    }

    fn schema(&self) -> Schema {
        Schema::new(vec![
            ColumnSpec::new("journal_id", ColumnType::String, true).functional_key(),
            ColumnSpec::new("name", ColumnType::String, true),
        ])
    }

    fn transform(&self, sources: &[DataFrame]) -> Result<Transformed> {
        // Validation projects onto the schema, which drops the refined
        // technical id column.
        Ok(Transformed::clean(source(sources, 0)?.clone()))
    }
}

/// Clinical trials and pubmed articles merge into one publication
/// table, with the journal name resolved to the journal's technical
/// id. Publications naming an unknown journal are rejected with
/// `Journal not found`; journals matching no publication are dropped.
pub struct OptimizedPublication;

impl DatasetJob for OptimizedPublication {
    fn target(&self) -> DatasetId {
        DatasetId::new(AreaKind::Optimized, DatasetKind::Publication)
    }

    fn sources(&self) -> Vec<SourceRef> {
        vec![
            SourceRef::new(AreaKind::Refined, DatasetKind::ClinicalTrial, DataFormat::Ipc),
            SourceRef::new(AreaKind::Refined, DatasetKind::Pubmed, DataFormat::Ipc),
            SourceRef::new(AreaKind::Optimized, DatasetKind::Journal, DataFormat::Ipc),
        ]
    }

    fn schema(&self) -> Schema {
        Schema::new(vec![
            ColumnSpec::new("title", ColumnType::String, true),
            ColumnSpec::new("date", ColumnType::Date, true),
            ColumnSpec::new("journal_id", ColumnType::String, true),
            ColumnSpec::new("publication_type", ColumnType::String, true),
            ColumnSpec::new("functional_id", ColumnType::String, true),
        ])
    }

    fn transform(&self, sources: &[DataFrame]) -> Result<Transformed> {
        let trials = source(sources, 0)?;
        let articles = source(sources, 1)?;
        let journals = source(sources, 2)?;

        let journal_index = journal_index(journals)?;
        let mut accepted = PublicationRows::default();
        let mut rejected = PublicationRejects::default();

        collect_publications(
            trials,
            &CLINICAL_TRIAL_SOURCE,
            &journal_index,
            &mut accepted,
            &mut rejected,
        )?;
        collect_publications(
            articles,
            &PUBMED_SOURCE,
            &journal_index,
            &mut accepted,
            &mut rejected,
        )?;

        Ok(Transformed {
            frame: accepted.into_frame()?,
            rejects: rejected.into_frame()?,
        })
    }
}

struct PublicationSource {
    table: &'static str,
    publication_type: &'static str,
    title_column: &'static str,
    functional_column: &'static str,
}

const CLINICAL_TRIAL_SOURCE: PublicationSource = PublicationSource {
    table: "refined clinical_trial",
    publication_type: "CLINICAL_TRIAL",
    title_column: "scientific_title",
    functional_column: "clinical_trial_id",
};

const PUBMED_SOURCE: PublicationSource = PublicationSource {
    table: "refined pubmed",
    publication_type: "PUBMED",
    title_column: "title",
    functional_column: "pubmed_id",
};

/// Functional journal slug to technical id, first occurrence wins.
fn journal_index(journals: &DataFrame) -> Result<BTreeMap<String, String>> {
    let ids = text_column(journals, "id", "optimized journal")?;
    let slugs = text_column(journals, "journal_id", "optimized journal")?;
    let mut index = BTreeMap::new();
    for (slug, id) in slugs.into_iter().zip(ids) {
        if let (Some(slug), Some(id)) = (slug, id) {
            index.entry(slug).or_insert(id);
        }
    }
    Ok(index)
}

fn collect_publications(
    frame: &DataFrame,
    from: &PublicationSource,
    journal_index: &BTreeMap<String, String>,
    accepted: &mut PublicationRows,
    rejected: &mut PublicationRejects,
) -> Result<()> {
    let titles = text_column(frame, from.title_column, from.table)?;
    let dates = text_column(frame, "date", from.table)?;
    let journals = text_column(frame, "journal", from.table)?;
    let functional_ids = text_column(frame, from.functional_column, from.table)?;

    for row in 0..frame.height() {
        let journal = journals[row].clone();
        let slug = journal.as_deref().map(|name| functional_key(&[name]));
        match slug.as_deref().and_then(|key| journal_index.get(key)) {
            Some(technical_id) => accepted.push(
                titles[row].clone(),
                dates[row].clone(),
                Some(technical_id.clone()),
                from.publication_type,
                functional_ids[row].clone(),
            ),
            None => rejected.push(
                titles[row].clone(),
                dates[row].clone(),
                slug,
                from.publication_type,
                functional_ids[row].clone(),
                journal,
            ),
        }
    }
    Ok(())
}

#[derive(Default)]
struct PublicationRows {
    titles: Vec<Option<String>>,
    dates: Vec<Option<String>>,
    journal_ids: Vec<Option<String>>,
    publication_types: Vec<Option<String>>,
    functional_ids: Vec<Option<String>>,
}

impl PublicationRows {
    fn push(
        &mut self,
        title: Option<String>,
        date: Option<String>,
        journal_id: Option<String>,
        publication_type: &str,
        functional_id: Option<String>,
    ) {
        self.titles.push(title);
        self.dates.push(date);
        self.journal_ids.push(journal_id);
        self.publication_types.push(Some(publication_type.to_string()));
        self.functional_ids.push(functional_id);
    }

    fn into_frame(self) -> Result<DataFrame> {
        Ok(DataFrame::new(vec![
            Series::new("title".into(), self.titles).into_column(),
            Series::new("date".into(), self.dates).into_column(),
            Series::new("journal_id".into(), self.journal_ids).into_column(),
            Series::new("publication_type".into(), self.publication_types).into_column(),
            Series::new("functional_id".into(), self.functional_ids).into_column(),
        ])?)
    }
}

/// Reject rows keep the unresolved slug in `journal_id` and the raw
/// journal name alongside.
#[derive(Default)]
struct PublicationRejects {
    rows: PublicationRows,
    journals: Vec<Option<String>>,
}

impl PublicationRejects {
    fn push(
        &mut self,
        title: Option<String>,
        date: Option<String>,
        slug: Option<String>,
        publication_type: &str,
        functional_id: Option<String>,
        journal: Option<String>,
    ) {
        self.rows
            .push(title, date, slug, publication_type, functional_id);
        self.journals.push(journal);
    }

    fn into_frame(self) -> Result<Option<DataFrame>> {
        let PublicationRejects { rows, journals } = self;
        if rows.titles.is_empty() {
            return Ok(None);
        }
        let reasons = vec!["Journal not found".to_string(); journals.len()];
        let mut frame = rows.into_frame()?;
        frame.insert_column(0, Series::new("reject_reason".into(), reasons))?;
        frame.with_column(Series::new("journal".into(), journals))?;
        Ok(Some(frame))
    }
}
