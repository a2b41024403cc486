//! Raw to refined jobs: the first typed, validated edition of each
//! source table.

use std::collections::BTreeSet;

use anyhow::Result;
use litlake_core::{concat_union, functional_key};
use litlake_model::{AreaKind, ColumnSpec, ColumnType, DataFormat, DatasetId, DatasetKind, Schema};
use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};

use crate::job::{DatasetJob, SourceRef, Transformed};
use crate::jobs::{source, text_column};

pub struct RefinedClinicalTrial;

impl DatasetJob for RefinedClinicalTrial {
    fn target(&self) -> DatasetId {
        DatasetId::new(AreaKind::Refined, DatasetKind::ClinicalTrial)
    }

    fn sources(&self) -> Vec<SourceRef> {
        vec![SourceRef::new(
            AreaKind::Raw,
            DatasetKind::ClinicalTrial,
            DataFormat::Csv,
        )]
    }

    fn schema(&self) -> Schema {
        Schema::new(vec![
            ColumnSpec::new("clinical_trial_id", ColumnType::String, true),
            ColumnSpec::new("scientific_title", ColumnType::String, true),
            ColumnSpec::new("date", ColumnType::Date, true),
            ColumnSpec::new("journal", ColumnType::String, true),
        ])
    }

    fn transform(&self, sources: &[DataFrame]) -> Result<Transformed> {
        let mut frame = source(sources, 0)?.clone();
        frame.rename("id", "clinical_trial_id".into())?;
        Ok(Transformed::clean(frame))
    }
}

pub struct RefinedDrugs;

impl DatasetJob for RefinedDrugs {
    fn target(&self) -> DatasetId {
        DatasetId::new(AreaKind::Refined, DatasetKind::Drugs)
    }

    fn sources(&self) -> Vec<SourceRef> {
        vec![SourceRef::new(
            AreaKind::Raw,
            DatasetKind::Drugs,
            DataFormat::Csv,
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

/// Pubmed arrives split across a CSV file and a JSON file; the job
/// unions them before validation.
pub struct RefinedPubmed;

impl DatasetJob for RefinedPubmed {
    fn target(&self) -> DatasetId {
        DatasetId::new(AreaKind::Refined, DatasetKind::Pubmed)
    }

    fn sources(&self) -> Vec<SourceRef> {
        vec![
            SourceRef::new(AreaKind::Raw, DatasetKind::Pubmed, DataFormat::Csv),
            SourceRef::new(AreaKind::Raw, DatasetKind::Pubmed, DataFormat::Json),
        ]
    }

    fn schema(&self) -> Schema {
        Schema::new(vec![
            ColumnSpec::new("pubmed_id", ColumnType::Integer, true).functional_key(),
            ColumnSpec::new("title", ColumnType::String, true),
            ColumnSpec::new("date", ColumnType::Date, true),
            ColumnSpec::new("journal", ColumnType::String, true),
        ])
    }

    fn transform(&self, sources: &[DataFrame]) -> Result<Transformed> {
        let csv = source(sources, 0)?;
        let json = source(sources, 1)?;
        let mut frame = concat_union(&[csv.clone(), json.clone()])?;
        frame.rename("id", "pubmed_id".into())?;
        Ok(Transformed::clean(frame))
    }
}

/// Journals are not a source of their own; the job derives them from
/// the journal columns of the refined publication tables.
pub struct RefinedJournal;

impl DatasetJob for RefinedJournal {
    fn target(&self) -> DatasetId {
        DatasetId::new(AreaKind::Refined, DatasetKind::Journal)
    }

    fn sources(&self) -> Vec<SourceRef> {
        vec![
            SourceRef::new(AreaKind::Refined, DatasetKind::ClinicalTrial, DataFormat::Ipc),
            SourceRef::new(AreaKind::Refined, DatasetKind::Pubmed, DataFormat::Ipc),
        ]
    }

    fn schema(&self) -> Schema {
        Schema::new(vec![
            ColumnSpec::new("journal_id", ColumnType::String, true).functional_key(),
            ColumnSpec::new("name", ColumnType::String, true),
        ])
    }

    fn transform(&self, sources: &[DataFrame]) -> Result<Transformed> {
        let trials = source(sources, 0)?;
        let articles = source(sources, 1)?;
        let mut names = text_column(trials, "journal", "refined clinical_trial")?;
        names.extend(text_column(articles, "journal", "refined pubmed")?);

        // One row per distinct derived key, first occurrence wins.
        let mut seen = BTreeSet::new();
        let mut journal_ids = Vec::new();
        let mut kept = Vec::new();
        for name in names {
            let key = name.as_deref().map(|value| functional_key(&[value]));
            if seen.insert(key.clone()) {
                journal_ids.push(key);
                kept.push(name);
            }
        }

        let frame = DataFrame::new(vec![
            Series::new("journal_id".into(), journal_ids).into_column(),
            Series::new("name".into(), kept).into_column(),
        ])?;
        Ok(Transformed::clean(frame))
    }
}
