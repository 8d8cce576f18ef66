pub mod schema;

use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "portuaria-etl")]
#[command(about = "Yearly cargo totals and nationwide shares for Brazilian ports (2020-2023)")]
pub struct CliConfig {
    /// Consolidated workbook with one sheet per year
    #[arg(long, default_value = "movimentacaoportuaria2020_2023.xlsx")]
    pub input: String,

    /// Port or terminal to report on; omit to list the available ports
    #[arg(long)]
    pub port: Option<String>,

    /// TOML file overriding the source column names
    #[arg(long)]
    pub schema: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_file_extension("input", &self.input, &["xlsx"])?;
        validate_non_empty_string("output_path", &self.output_path)?;
        if let Some(schema) = &self.schema {
            validate_path("schema", schema)?;
            validate_file_extension("schema", schema, &["toml"])?;
        }
        Ok(())
    }
}
