use crate::config::schema::ColumnMap;
use crate::domain::model::{NormalizedRecord, RawValue, RawYearTable};
use crate::utils::error::{EtlError, Result};

/// Rename the source columns to the canonical shape and tag every row with
/// the table's year.
///
/// A missing port or cargo column is fatal. Rows that cannot become a valid
/// record (blank port, non-numeric or negative cargo) are skipped with a
/// warning so one stray row does not abort the whole sheet.
pub fn normalize(table: &RawYearTable, columns: &ColumnMap) -> Result<Vec<NormalizedRecord>> {
    let port_idx = find_column(table, &columns.port)?;
    let cargo_idx = find_column(table, &columns.cargo)?;

    let mut records = Vec::with_capacity(table.rows.len());
    for (row_idx, row) in table.rows.iter().enumerate() {
        if row.iter().all(RawValue::is_empty) {
            continue;
        }

        let port = match row.get(port_idx).map(|cell| cell.as_text().unwrap_or("").trim()) {
            Some(port) if !port.is_empty() => port.to_string(),
            _ => {
                tracing::warn!(
                    "Sheet '{}' row {}: blank port name, row skipped",
                    table.year,
                    row_idx + 2
                );
                continue;
            }
        };

        let cargo = match row.get(cargo_idx).and_then(RawValue::as_number) {
            Some(cargo) if cargo >= 0.0 => cargo,
            Some(cargo) => {
                tracing::warn!(
                    "Sheet '{}' row {}: negative cargo {} for '{}', row skipped",
                    table.year,
                    row_idx + 2,
                    cargo,
                    port
                );
                continue;
            }
            None => {
                tracing::warn!(
                    "Sheet '{}' row {}: unusable cargo cell for '{}', row skipped",
                    table.year,
                    row_idx + 2,
                    port
                );
                continue;
            }
        };

        records.push(NormalizedRecord {
            port,
            cargo,
            year: table.year,
        });
    }

    Ok(records)
}

fn find_column(table: &RawYearTable, name: &str) -> Result<usize> {
    table
        .headers
        .iter()
        .position(|header| header.trim() == name)
        .ok_or_else(|| EtlError::SchemaMismatch {
            year: table.year,
            column: name.to_string(),
            found: table.headers.clone(),
        })
}
