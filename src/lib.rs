pub mod config;
pub mod error;
pub mod generate;
pub mod list;
pub mod models;
pub mod names;
pub mod output;
pub mod slug;

// Re-export main types
pub use config::{CliConfig, PathsConfig};
pub use error::ListError;
pub use generate::{GenerateSummary, generate};
pub use list::{Entry, NameList, Query};
pub use models::Row;
pub use output::{CsvRowWriter, RowWriter};

// Re-export slug utilities
pub use slug::slugify;
