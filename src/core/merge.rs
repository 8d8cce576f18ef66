use crate::domain::model::{NormalizedRecord, UnifiedDataset};

/// Concatenate the per-year record batches into one dataset. No dedup, no
/// sorting; aggregation does not depend on record order.
pub fn merge(batches: Vec<Vec<NormalizedRecord>>) -> UnifiedDataset {
    let mut records = Vec::with_capacity(batches.iter().map(Vec::len).sum());
    for batch in batches {
        records.extend(batch);
    }
    UnifiedDataset::new(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::YearTag;

    fn record(port: &str, cargo: f64, year: YearTag) -> NormalizedRecord {
        NormalizedRecord {
            port: port.to_string(),
            cargo,
            year,
        }
    }

    #[test]
    fn test_merge_concatenates_in_batch_order() {
        let dataset = merge(vec![
            vec![record("Santos", 1.0, YearTag::Y2020)],
            vec![],
            vec![
                record("Itaqui", 2.0, YearTag::Y2021),
                record("Santos", 3.0, YearTag::Y2021),
            ],
        ]);

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.records()[0].port, "Santos");
        assert_eq!(dataset.records()[1].port, "Itaqui");
        assert_eq!(dataset.records()[2].year, YearTag::Y2021);
    }

    #[test]
    fn test_merge_keeps_duplicates() {
        let dataset = merge(vec![
            vec![record("Santos", 1.0, YearTag::Y2020)],
            vec![record("Santos", 1.0, YearTag::Y2020)],
        ]);

        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn test_merge_of_nothing_is_empty() {
        assert!(merge(Vec::new()).is_empty());
    }
}
