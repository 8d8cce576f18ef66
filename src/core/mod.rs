pub mod aggregate;
pub mod engine;
pub mod format;
pub mod merge;
pub mod normalize;

pub use crate::domain::model::{
    FormattedRow, NormalizedRecord, PortReport, RawValue, RawYearTable, UnifiedDataset, YearTag,
    YearlyAggregate,
};
pub use crate::domain::ports::{Storage, TableSource};
pub use crate::utils::error::Result;
