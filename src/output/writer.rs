//! Processed CSV writer
//!
//! Provides utilities for writing normalized transactions to a CSV file.

use crate::error::{Error, Result};
use crate::normalize::{TransactionRecord, CANONICAL_COLUMNS};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Header row of every processed file
pub const OUTPUT_HEADER: [&str; 6] = CANONICAL_COLUMNS;

/// Processed CSV writer
///
/// Rows go to a temporary file in the destination directory. Dropping the
/// writer without [`close`](Self::close) removes the temporary file and
/// leaves the destination untouched.
pub struct ProcessedWriter {
    /// CSV writer over the temporary file
    writer: csv::Writer<NamedTempFile>,
    /// Final destination
    path: PathBuf,
    /// Number of rows written
    rows_written: usize,
}

impl ProcessedWriter {
    /// Create a new writer, creating missing parent directories
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        fs::create_dir_all(&dir).map_err(|e| Error::Output {
            message: format!("Failed to create directory {}: {e}", dir.display()),
        })?;

        let temp = tempfile::Builder::new()
            .prefix(".txn-prep-")
            .suffix(".tmp")
            .tempfile_in(&dir)
            .map_err(|e| Error::Output {
                message: format!("Failed to create file in {}: {e}", dir.display()),
            })?;

        let mut writer = csv::Writer::from_writer(temp);
        writer.write_record(OUTPUT_HEADER).map_err(|e| Error::Output {
            message: format!("Failed to write header: {e}"),
        })?;

        Ok(Self {
            writer,
            path,
            rows_written: 0,
        })
    }

    /// Write one transaction row
    pub fn write(&mut self, record: &TransactionRecord) -> Result<()> {
        self.writer
            .write_record(record.to_csv_fields())
            .map_err(|e| Error::Output {
                message: format!("Failed to write row {}: {e}", self.rows_written + 1),
            })?;

        self.rows_written += 1;
        Ok(())
    }

    /// Get the number of rows written so far
    #[must_use]
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush, fsync and move the file into place
    pub fn close(self) -> Result<usize> {
        let rows = self.rows_written;
        let temp = self.writer.into_inner().map_err(|e| Error::Output {
            message: format!("Failed to flush {}: {}", self.path.display(), e.error()),
        })?;

        temp.as_file().sync_all().map_err(|e| Error::Output {
            message: format!("Failed to sync {}: {e}", self.path.display()),
        })?;

        temp.persist(&self.path).map_err(|e| Error::Output {
            message: format!("Failed to create {}: {}", self.path.display(), e.error),
        })?;

        Ok(rows)
    }
}

/// Write all normalized records to `out_path`
///
/// Returns the number of data rows written.
pub fn save_processed(
    records: &[TransactionRecord],
    out_path: impl AsRef<Path>,
) -> Result<usize> {
    let mut writer = ProcessedWriter::new(out_path)?;
    for record in records {
        writer.write(record)?;
    }
    writer.close()
}
