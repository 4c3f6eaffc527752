//! The read -> slugify -> write pipeline.

use std::path::PathBuf;

use tracing::info;

use crate::config::PathsConfig;
use crate::error::Result;
use crate::models::rows_from_names;
use crate::names::read_names;
use crate::output::{CsvRowWriter, RowWriter};

/// Outcome of a completed generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    /// One row per input line, blank lines included
    pub rows: usize,
}

/// Read names from `paths.input` and write `name,slug` rows to `paths.output`.
///
/// The first I/O or encoding failure aborts the run.
pub fn generate(paths: &PathsConfig) -> Result<GenerateSummary> {
    let names = read_names(&paths.input)?;
    info!("Read {} names from {:?}", names.len(), paths.input);

    let rows = rows_from_names(names);

    let mut writer = CsvRowWriter::from_path(&paths.output)?;
    let written = writer.write_all(&rows)?;
    info!("Wrote {} rows to {:?}", written, paths.output);

    Ok(GenerateSummary {
        input: paths.input.clone(),
        output: paths.output.clone(),
        rows: written,
    })
}
