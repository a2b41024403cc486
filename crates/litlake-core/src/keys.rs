use anyhow::{Context, Result};
use litlake_model::DatasetId;
use polars::prelude::{DataFrame, NamedFrom, Series};
use tracing::warn;

/// Builds the functional key for an entity: parts joined with a single
/// space, lowercased, every space replaced with an underscore.
pub fn functional_key(parts: &[&str]) -> String {
    parts.join(" ").to_lowercase().replace(' ', "_")
}

/// Inserts synthetic technical ids `{AREA}.{DATA_TYPE}_{i}` as the
/// first column, replacing any pre-existing `id` column.
pub fn assign_technical_ids(frame: &DataFrame, dataset: &DatasetId) -> Result<DataFrame> {
    let mut frame = match frame.drop("id") {
        Ok(dropped) => {
            warn!(dataset = %dataset, "replacing existing id column");
            dropped
        }
        Err(_) => frame.clone(),
    };
    let ids: Vec<String> = (0..frame.height())
        .map(|index| format!("{}_{index}", dataset.id_prefix()))
        .collect();
    frame
        .insert_column(0, Series::new("id".into(), ids))
        .with_context(|| format!("inserting technical ids for {dataset}"))?;
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use litlake_ingest::render_any;
    use litlake_model::{AreaKind, DatasetKind};
    use polars::prelude::IntoColumn;

    use super::*;

    fn id_at(frame: &DataFrame, row: usize) -> Option<String> {
        let value = frame.column("id").unwrap().get(row).unwrap();
        render_any(&value)
    }

    #[test]
    fn functional_key_slugs() {
        assert_eq!(
            functional_key(&["Journal of emergency nursing"]),
            "journal_of_emergency_nursing"
        );
        assert_eq!(functional_key(&["Science"]), "science");
        assert_eq!(
            functional_key(&["Hôpitaux Universitaires de Genève"]),
            "hôpitaux_universitaires_de_genève"
        );
    }

    #[test]
    fn technical_ids_are_sequential_and_first() {
        let frame = DataFrame::new(vec![
            Series::new("atccode".into(), vec!["A04AD", "R01AD"]).into_column(),
        ])
        .unwrap();
        let dataset = DatasetId::new(AreaKind::Refined, DatasetKind::Drugs);
        let with_ids = assign_technical_ids(&frame, &dataset).unwrap();
        assert_eq!(with_ids.get_column_names_str(), vec!["id", "atccode"]);
        assert_eq!(id_at(&with_ids, 0), Some("REFINED.DRUGS_0".to_string()));
        assert_eq!(id_at(&with_ids, 1), Some("REFINED.DRUGS_1".to_string()));
    }

    #[test]
    fn existing_id_column_is_replaced() {
        let frame = DataFrame::new(vec![
            Series::new("id".into(), vec!["old_0", "old_1"]).into_column(),
            Series::new("drug".into(), vec!["EPINEPHRINE", "ISOPRENALINE"]).into_column(),
        ])
        .unwrap();
        let dataset = DatasetId::new(AreaKind::Optimized, DatasetKind::Drugs);
        let with_ids = assign_technical_ids(&frame, &dataset).unwrap();
        assert_eq!(with_ids.get_column_names_str(), vec!["id", "drug"]);
        assert_eq!(id_at(&with_ids, 0), Some("OPTIMIZED.DRUGS_0".to_string()));
    }
}
