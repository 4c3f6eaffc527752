use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ListError, Result};
use crate::models::Row;

use super::RowWriter;

/// CSV writer producing header-less `name,slug` records
pub struct CsvRowWriter<W: Write> {
    writer: csv::Writer<W>,
    /// Destination named in errors and logs
    path: PathBuf,
    rows_written: usize,
}

impl CsvRowWriter<File> {
    /// Create (or truncate) the file at `path`.
    ///
    /// The parent directory must already exist.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| ListError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Writing list to {:?}", path);
        Ok(Self::new(file, path))
    }
}

impl<W: Write> CsvRowWriter<W> {
    pub fn new(inner: W, path: impl Into<PathBuf>) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(inner);
        Self {
            writer,
            path: path.into(),
            rows_written: 0,
        }
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(self) -> Result<W> {
        let path = self.path;
        self.writer
            .into_inner()
            .map_err(|e| ListError::Write {
                path,
                source: e.into_error(),
            })
    }
}

impl<W: Write> RowWriter for CsvRowWriter<W> {
    fn write_row(&mut self, row: &Row) -> Result<()> {
        self.writer.serialize(row).map_err(|source| ListError::Csv {
            path: self.path.clone(),
            source,
        })?;
        self.rows_written += 1;
        debug!("{} -> {}", row.name, row.slug);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush().map_err(|source| ListError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
