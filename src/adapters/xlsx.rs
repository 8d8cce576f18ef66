use calamine::{open_workbook, Data, Reader, Xlsx};
use std::path::PathBuf;

use crate::domain::model::{RawValue, RawYearTable, YearTag};
use crate::domain::ports::TableSource;
use crate::utils::error::{EtlError, Result};

/// Reads the consolidated workbook, one sheet per year, sheets named by the
/// year label. The first row of each sheet is its header row.
pub struct XlsxSource {
    path: PathBuf,
}

impl XlsxSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl TableSource for XlsxSource {
    fn load_year(&self, year: YearTag) -> Result<RawYearTable> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path)?;

        let available = workbook.sheet_names().to_vec();
        if !available.iter().any(|name| name == year.label()) {
            return Err(EtlError::MissingSheet { year, available });
        }

        let range = workbook.worksheet_range(year.label())?;

        let mut sheet_rows = range.rows();
        let headers = sheet_rows
            .next()
            .map(|row| row.iter().map(cell_to_string).collect())
            .unwrap_or_default();
        let rows = sheet_rows
            .map(|row| row.iter().map(cell_to_raw).collect())
            .collect();

        Ok(RawYearTable { year, headers, rows })
    }
}

fn cell_to_string(cell: &Data) -> String {
    cell.to_string().trim().to_string()
}

fn cell_to_raw(cell: &Data) -> RawValue {
    match cell {
        Data::Empty => RawValue::Empty,
        Data::String(s) => RawValue::Text(s.clone()),
        Data::Float(f) => RawValue::Number(*f),
        Data::Int(i) => RawValue::Number(*i as f64),
        // Dates, durations, and cell errors only ever show up in stray cells
        // here; carry their display form and let normalization warn.
        other => {
            let text = other.to_string();
            if text.is_empty() {
                RawValue::Empty
            } else {
                RawValue::Text(text)
            }
        }
    }
}
