use crate::domain::model::{RawYearTable, YearTag};
use crate::utils::error::Result;

/// Source of per-year sheets (xlsx workbook, in-memory fixture, ...).
pub trait TableSource {
    fn load_year(&self, year: YearTag) -> Result<RawYearTable>;
}

/// Sink for report artifacts.
pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}
