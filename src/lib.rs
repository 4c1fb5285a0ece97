//! # txn-prep
//!
//! Consolidates raw transaction dumps (CSV, JSON, JSON Lines) from a
//! directory tree into one normalized CSV table.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use txn_prep::prepare_transactions;
//!
//! let stats = prepare_transactions(Path::new("data/raw"), Path::new("data/processed/transactions.csv"))?;
//! println!("{} rows written", stats.rows_written);
//! # Ok::<(), txn_prep::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐    ┌───────────────┐    ┌──────────────┐
//! │    Loader    │───▶│  Normalizer   │───▶│    Writer    │
//! │ discover +   │    │ rename, coerce│    │ atomic CSV   │
//! │ decode files │    │ default, trim │    │ write        │
//! └──────────────┘    └───────────────┘    └──────────────┘
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Source file decoders (CSV, JSON, JSONL)
pub mod decode;

/// Source discovery and concatenation
pub mod loader;

/// Canonical schema normalization
pub mod normalize;

/// Processed CSV output
pub mod output;

/// Config file and path resolution
pub mod config;

/// Load → normalize → save
pub mod pipeline;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::{JsonValue, RawTable, Record};

pub use config::{resolve_paths, PrepConfig, ResolvedPaths};
pub use loader::load_raw_transactions;
pub use normalize::{normalize_transactions, TransactionRecord};
pub use output::save_processed;
pub use pipeline::{prepare_transactions, run_pipeline, PrepStats};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
