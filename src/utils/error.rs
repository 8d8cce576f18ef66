use crate::domain::model::YearTag;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Workbook error: {0}")]
    WorkbookError(#[from] calamine::XlsxError),

    #[error("Sheet '{year}' not found in workbook (available sheets: {available:?})")]
    MissingSheet { year: YearTag, available: Vec<String> },

    #[error("Sheet '{year}' is missing required column '{column}' (found: {found:?})")]
    SchemaMismatch {
        year: YearTag,
        column: String,
        found: Vec<String>,
    },

    #[error("Total cargo for {year} is zero while port '{port}' reports {port_cargo}")]
    DivisionAnomaly {
        year: YearTag,
        port: String,
        port_cargo: f64,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

pub type Result<T> = std::result::Result<T, EtlError>;
