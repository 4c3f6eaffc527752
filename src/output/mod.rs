pub mod csv_file;

pub use csv_file::*;

use crate::error::Result;
use crate::models::Row;

/// Trait for writing list rows to a sink
pub trait RowWriter {
    /// Write a single row
    fn write_row(&mut self, row: &Row) -> Result<()>;

    /// Flush buffered rows to the underlying sink
    fn finish(&mut self) -> Result<()>;

    /// Write every row in order and flush, returning the number written
    fn write_all(&mut self, rows: &[Row]) -> Result<usize> {
        for row in rows {
            self.write_row(row)?;
        }
        self.finish()?;
        Ok(rows.len())
    }
}
