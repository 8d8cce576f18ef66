pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::storage::LocalStorage;
pub use adapters::xlsx::XlsxSource;
pub use config::schema::SchemaConfig;
pub use config::CliConfig;
pub use core::engine::EtlEngine;
pub use utils::error::{EtlError, Result};
