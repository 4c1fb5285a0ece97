//! Load → normalize → save
//!
//! One synchronous pass. Any fatal error aborts before the output file is
//! moved into place, so a failed run never leaves a partial file behind.

use crate::config::ResolvedPaths;
use crate::error::Result;
use crate::loader::load_raw_transactions;
use crate::normalize::normalize_transactions;
use crate::output::save_processed;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Statistics for one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrepStats {
    /// Rows read from all source files
    pub records_loaded: usize,
    /// Distinct source columns seen across files
    pub source_columns: usize,
    /// Data rows in the output file
    pub rows_written: usize,
    /// Wall time in milliseconds
    pub duration_ms: u64,
}

/// Run the pipeline for already-resolved paths
pub fn run_pipeline(paths: &ResolvedPaths) -> Result<PrepStats> {
    prepare_transactions(&paths.raw_dir, &paths.out_path)
}

/// Load every source file under `raw_dir`, normalize, and write `out_path`
pub fn prepare_transactions(raw_dir: &Path, out_path: &Path) -> Result<PrepStats> {
    let start = Instant::now();

    let table = load_raw_transactions(raw_dir)?;
    let records_loaded = table.len();
    let source_columns = table.columns.len();

    let normalized = normalize_transactions(table.into_records());
    info!("Normalized {} records", normalized.len());

    let rows_written = save_processed(&normalized, out_path)?;
    info!("Wrote {} rows to {}", rows_written, out_path.display());

    Ok(PrepStats {
        records_loaded,
        source_columns,
        rows_written,
        duration_ms: start.elapsed().as_millis() as u64,
    })
}
