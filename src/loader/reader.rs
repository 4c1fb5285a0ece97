//! Source file reading and concatenation.

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::decode::{decoder_for, DecoderFormat};
use crate::error::{Error, Result, ResultExt};
use crate::types::{RawTable, Record};

use super::discovery::discover_files;

/// Decode one source file into records.
///
/// The whole file is read up front; the handle is closed before decoding.
pub fn load_file(path: &Path) -> Result<Vec<Record>> {
    let format = DecoderFormat::from_path(path)
        .ok_or_else(|| Error::decode(format!("Unsupported file type: {}", path.display())))?;

    let body = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let records = decoder_for(format)
        .decode(&body)
        .with_context(|| path.display().to_string())?;

    debug!(
        "Loaded {} {} records from {}",
        records.len(),
        format.name(),
        path.display()
    );
    if records.is_empty() {
        warn!("No records in {}", path.display());
    }

    Ok(records)
}

/// Load every source file under `raw_dir` into one table.
///
/// Column sets may differ between files: the table's columns are their
/// union and each record gets `null` for the columns its file lacked.
///
/// Fails with [`Error::NoInputFiles`] when nothing matches.
pub fn load_raw_transactions(raw_dir: impl AsRef<Path>) -> Result<RawTable> {
    let raw_dir = raw_dir.as_ref();
    let paths = discover_files(raw_dir)?;
    if paths.is_empty() {
        return Err(Error::no_input_files(raw_dir));
    }

    info!("Found {} source files in {}", paths.len(), raw_dir.display());

    let mut table = RawTable::default();
    for path in &paths {
        table.extend(load_file(path)?);
    }
    table.backfill_nulls();

    info!(
        "Loaded {} records with {} distinct columns",
        table.len(),
        table.columns.len()
    );
    Ok(table)
}
