use crate::domain::model::PortReport;
use crate::utils::error::{EtlError, Result};

pub const CSV_HEADERS: [&str; 4] = ["Ano", "Carga do Porto", "Carga Total", "Percentual"];

/// Render the formatted table as CSV. The percentage field carries the
/// pt-BR decimal comma, so fields go through a real CSV writer for quoting.
pub fn csv_report(report: &PortReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADERS)?;
    for row in &report.rows {
        writer.write_record([&row.year, &row.port_cargo, &row.total_cargo, &row.percentage])?;
    }

    let bytes = writer.into_inner().map_err(|e| EtlError::ProcessingError {
        message: format!("CSV buffer flush failed: {}", e),
    })?;
    String::from_utf8(bytes).map_err(|e| EtlError::ProcessingError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

/// Raw aggregates as pretty JSON, for chart consumers that need the numbers
/// rather than the formatted strings.
pub fn json_aggregates(report: &PortReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(&report.aggregates)?)
}
