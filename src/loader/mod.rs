//! Raw transaction loader
//!
//! Finds source files under a directory tree and concatenates their rows.
//!
//! # Overview
//!
//! The loader module provides:
//! - [`discover_files`] - recursive search for `.csv`, `.json`, `.jsonl`, `.ndjson`
//! - [`load_file`] - decode one file with the decoder matching its extension
//! - [`load_raw_transactions`] - everything above, merged into one [`RawTable`]
//!
//! [`RawTable`]: crate::types::RawTable

mod discovery;
mod reader;

pub use discovery::discover_files;
pub use reader::{load_file, load_raw_transactions};
