use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar years covered by the consolidated workbook, one sheet each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum YearTag {
    #[serde(rename = "2020")]
    Y2020,
    #[serde(rename = "2021")]
    Y2021,
    #[serde(rename = "2022")]
    Y2022,
    #[serde(rename = "2023")]
    Y2023,
}

impl YearTag {
    pub const ALL: [YearTag; 4] = [YearTag::Y2020, YearTag::Y2021, YearTag::Y2022, YearTag::Y2023];

    /// Label used for sheet names, config keys, and display.
    pub fn label(&self) -> &'static str {
        match self {
            YearTag::Y2020 => "2020",
            YearTag::Y2021 => "2021",
            YearTag::Y2022 => "2022",
            YearTag::Y2023 => "2023",
        }
    }
}

impl fmt::Display for YearTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cell value as handed over by a table source.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Text(String),
    Number(f64),
    Empty,
}

impl RawValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Numeric view of the cell; text cells are parsed leniently.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RawValue::Number(n) => Some(*n),
            RawValue::Text(s) => s.trim().parse().ok(),
            RawValue::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            RawValue::Empty => true,
            RawValue::Text(s) => s.trim().is_empty(),
            RawValue::Number(_) => false,
        }
    }
}

/// One year's sheet before normalization: header row plus data rows.
#[derive(Debug, Clone)]
pub struct RawYearTable {
    pub year: YearTag,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<RawValue>>,
}

/// Canonical row shape shared by every year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub port: String,
    pub cargo: f64,
    pub year: YearTag,
}

/// All years merged into one in-memory dataset, rebuilt on every run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnifiedDataset {
    records: Vec<NormalizedRecord>,
}

impl UnifiedDataset {
    pub fn new(records: Vec<NormalizedRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[NormalizedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Yearly cargo for a selected port joined against the nationwide total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyAggregate {
    pub year: YearTag,
    pub port_cargo: f64,
    pub total_cargo: f64,
    pub percentage: f64,
}

/// [`YearlyAggregate`] with every numeric field rendered for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedRow {
    pub year: String,
    pub port_cargo: String,
    pub total_cargo: String,
    pub percentage: String,
}

/// Everything the presentation side needs for one port: raw numbers for
/// charting and formatted rows for the table.
#[derive(Debug, Clone)]
pub struct PortReport {
    pub port: String,
    pub aggregates: Vec<YearlyAggregate>,
    pub rows: Vec<FormattedRow>,
}
