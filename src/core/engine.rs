use crate::config::schema::SchemaConfig;
use crate::core::aggregate::aggregate_for_port;
use crate::core::format::format_row;
use crate::core::merge::merge;
use crate::core::normalize::normalize;
use crate::domain::model::{PortReport, UnifiedDataset, YearTag};
use crate::domain::ports::TableSource;
use crate::utils::error::Result;

/// Runs the load -> normalize -> merge pipeline over every supported year
/// and answers per-port report requests against the resulting dataset.
pub struct EtlEngine<S: TableSource> {
    source: S,
    schema: SchemaConfig,
}

impl<S: TableSource> EtlEngine<S> {
    pub fn new(source: S, schema: SchemaConfig) -> Self {
        Self { source, schema }
    }

    /// Eagerly load all four sheets, normalize each with its column map, and
    /// merge them into one dataset. Any sheet failure aborts the run.
    pub fn build_dataset(&self) -> Result<UnifiedDataset> {
        let mut batches = Vec::with_capacity(YearTag::ALL.len());
        for year in YearTag::ALL {
            let table = self.source.load_year(year)?;
            tracing::debug!("Loaded sheet '{}' with {} rows", year, table.rows.len());

            let records = normalize(&table, self.schema.columns_for(year))?;
            tracing::debug!("Normalized {} records for {}", records.len(), year);
            batches.push(records);
        }

        let dataset = merge(batches);
        tracing::info!("Unified dataset holds {} records", dataset.len());
        Ok(dataset)
    }

    /// Full report for one port, or `None` when the selection matches no
    /// record. Callers treat `None` as "no data", not as a failure.
    pub fn report_for_port(&self, dataset: &UnifiedDataset, port: &str) -> Result<Option<PortReport>> {
        let aggregates = aggregate_for_port(dataset, port)?;
        if aggregates.is_empty() {
            tracing::info!("No records for port '{}'", port);
            return Ok(None);
        }

        let rows = aggregates.iter().map(format_row).collect();
        Ok(Some(PortReport {
            port: port.to_string(),
            aggregates,
            rows,
        }))
    }
}
