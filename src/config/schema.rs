use crate::domain::model::YearTag;
use crate::utils::error::{EtlError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Source-side column names mapped onto the canonical row shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMap {
    pub port: String,
    pub cargo: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        // Column names used by the consolidated ANTAQ workbook.
        Self {
            port: "Porto".to_string(),
            cargo: "Carga Movimentada".to_string(),
        }
    }
}

/// Column mapping for the whole workbook. All four sheets share the same
/// names today; `overrides` keyed by year label absorbs future drift without
/// a code change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaConfig {
    #[serde(default)]
    pub columns: ColumnMap,
    #[serde(default)]
    pub overrides: HashMap<String, ColumnMap>,
}

impl SchemaConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| EtlError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn columns_for(&self, year: YearTag) -> &ColumnMap {
        self.overrides.get(year.label()).unwrap_or(&self.columns)
    }
}
