use crate::domain::model::{UnifiedDataset, YearTag, YearlyAggregate};
use crate::utils::error::{EtlError, Result};
use std::collections::{BTreeMap, BTreeSet};

/// Distinct port names in ascending order, for the selection surface.
pub fn list_ports(dataset: &UnifiedDataset) -> Vec<String> {
    let ports: BTreeSet<&str> = dataset
        .records()
        .iter()
        .map(|record| record.port.as_str())
        .collect();
    ports.into_iter().map(str::to_owned).collect()
}

/// Nationwide cargo sums per year, always computed over the full dataset.
pub fn totals_by_year(dataset: &UnifiedDataset) -> BTreeMap<YearTag, f64> {
    let mut totals = BTreeMap::new();
    for record in dataset.records() {
        *totals.entry(record.year).or_insert(0.0) += record.cargo;
    }
    totals
}

/// Yearly sums for one port joined with the nationwide totals, ordered by
/// year. Years where the port has no records produce no row; a port matching
/// nothing yields an empty result rather than an error.
pub fn aggregate_for_port(dataset: &UnifiedDataset, port: &str) -> Result<Vec<YearlyAggregate>> {
    let mut port_totals: BTreeMap<YearTag, f64> = BTreeMap::new();
    for record in dataset.records().iter().filter(|record| record.port == port) {
        *port_totals.entry(record.year).or_insert(0.0) += record.cargo;
    }

    if port_totals.is_empty() {
        return Ok(Vec::new());
    }

    let totals = totals_by_year(dataset);
    let mut aggregates = Vec::with_capacity(port_totals.len());
    for (year, port_cargo) in port_totals {
        let total_cargo = totals.get(&year).copied().unwrap_or(0.0);
        // The port's own cargo is part of the total, so a zero total for a
        // year the port appears in is a data anomaly, not a valid ratio.
        if total_cargo <= 0.0 {
            return Err(EtlError::DivisionAnomaly {
                year,
                port: port.to_string(),
                port_cargo,
            });
        }
        aggregates.push(YearlyAggregate {
            year,
            port_cargo,
            total_cargo,
            percentage: port_cargo / total_cargo * 100.0,
        });
    }

    Ok(aggregates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::NormalizedRecord;

    fn record(port: &str, cargo: f64, year: YearTag) -> NormalizedRecord {
        NormalizedRecord {
            port: port.to_string(),
            cargo,
            year,
        }
    }

    fn sample_dataset() -> UnifiedDataset {
        UnifiedDataset::new(vec![
            record("Santos", 100.0, YearTag::Y2020),
            record("Itaqui", 900.0, YearTag::Y2020),
            record("Santos", 300.0, YearTag::Y2021),
            record("Itaqui", 1200.0, YearTag::Y2021),
        ])
    }

    #[test]
    fn test_list_ports_is_sorted_and_deduplicated() {
        let dataset = UnifiedDataset::new(vec![
            record("Santos", 1.0, YearTag::Y2020),
            record("Itaqui", 1.0, YearTag::Y2020),
            record("Santos", 2.0, YearTag::Y2021),
            record("Paranaguá", 3.0, YearTag::Y2021),
        ]);

        assert_eq!(list_ports(&dataset), vec!["Itaqui", "Paranaguá", "Santos"]);
    }

    #[test]
    fn test_totals_by_year_sums_every_port() {
        let totals = totals_by_year(&sample_dataset());

        assert_eq!(totals.len(), 2);
        assert_eq!(totals[&YearTag::Y2020], 1000.0);
        assert_eq!(totals[&YearTag::Y2021], 1500.0);
    }

    #[test]
    fn test_aggregate_for_port_joins_against_nationwide_totals() {
        let aggregates = aggregate_for_port(&sample_dataset(), "Santos").unwrap();

        assert_eq!(
            aggregates,
            vec![
                YearlyAggregate {
                    year: YearTag::Y2020,
                    port_cargo: 100.0,
                    total_cargo: 1000.0,
                    percentage: 10.0,
                },
                YearlyAggregate {
                    year: YearTag::Y2021,
                    port_cargo: 300.0,
                    total_cargo: 1500.0,
                    percentage: 20.0,
                },
            ]
        );
    }

    #[test]
    fn test_port_cargo_sums_match_the_records() {
        let dataset = UnifiedDataset::new(vec![
            record("Santos", 10.0, YearTag::Y2020),
            record("Santos", 15.0, YearTag::Y2020),
            record("Itaqui", 25.0, YearTag::Y2020),
        ]);

        let aggregates = aggregate_for_port(&dataset, "Santos").unwrap();
        assert_eq!(aggregates.len(), 1);
        assert_eq!(aggregates[0].port_cargo, 25.0);
        assert_eq!(aggregates[0].total_cargo, 50.0);
        assert_eq!(aggregates[0].percentage, 50.0);
    }

    #[test]
    fn test_years_without_port_records_yield_no_row() {
        // Santos only shipped in 2020; 2021 exists in the dataset but must
        // not show up zero-filled.
        let dataset = UnifiedDataset::new(vec![
            record("Santos", 10.0, YearTag::Y2020),
            record("Itaqui", 20.0, YearTag::Y2021),
        ]);

        let aggregates = aggregate_for_port(&dataset, "Santos").unwrap();
        assert_eq!(aggregates.len(), 1);
        assert_eq!(aggregates[0].year, YearTag::Y2020);
    }

    #[test]
    fn test_unknown_port_yields_empty_result() {
        let aggregates = aggregate_for_port(&sample_dataset(), "Suape").unwrap();
        assert!(aggregates.is_empty());
    }

    #[test]
    fn test_percentage_stays_within_bounds() {
        let aggregates = aggregate_for_port(&sample_dataset(), "Itaqui").unwrap();
        for aggregate in aggregates {
            assert!(aggregate.percentage >= 0.0);
            assert!(aggregate.percentage <= 100.0);
        }
    }

    #[test]
    fn test_zero_total_is_a_division_anomaly() {
        // Every 2020 record carries zero cargo, so the yearly total is zero
        // while Santos still appears in the numerator.
        let dataset = UnifiedDataset::new(vec![record("Santos", 0.0, YearTag::Y2020)]);

        let error = aggregate_for_port(&dataset, "Santos").unwrap_err();
        match error {
            EtlError::DivisionAnomaly { year, port, .. } => {
                assert_eq!(year, YearTag::Y2020);
                assert_eq!(port, "Santos");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_port_match_is_exact() {
        let dataset = UnifiedDataset::new(vec![
            record("Santos", 10.0, YearTag::Y2020),
            record("santos", 20.0, YearTag::Y2020),
        ]);

        let aggregates = aggregate_for_port(&dataset, "Santos").unwrap();
        assert_eq!(aggregates[0].port_cargo, 10.0);
    }
}
