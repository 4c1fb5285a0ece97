//! Error types for txn-prep
//!
//! This module defines the error hierarchy for the whole pipeline.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Malformed individual values are never errors: the normalizer degrades
//! them to defaults. Only whole-run failures show up here.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for txn-prep
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ============================================================================
    // Input Errors
    // ============================================================================
    #[error("No CSV/JSON files found in {}", path.display())]
    NoInputFiles { path: PathBuf },

    #[error("Failed to decode input: {message}")]
    Decode { message: String },

    #[error("CSV parsing error: {message}")]
    CsvParse { message: String },

    // ============================================================================
    // Output Errors
    // ============================================================================
    #[error("Output error: {message}")]
    Output { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
        }
    }

    /// Create a "no input files" error for a source directory
    pub fn no_input_files(path: impl Into<PathBuf>) -> Self {
        Self::NoInputFiles { path: path.into() }
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::CsvParse {
            message: err.to_string(),
        }
    }
}

/// Result type alias for txn-prep
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let context = f();
            match e.into() {
                Error::Config { message } => Error::Config {
                    message: format!("{context}: {message}"),
                },
                Error::Decode { message } => Error::Decode {
                    message: format!("{context}: {message}"),
                },
                Error::CsvParse { message } => Error::CsvParse {
                    message: format!("{context}: {message}"),
                },
                Error::Output { message } => Error::Output {
                    message: format!("{context}: {message}"),
                },
                Error::Io(err) => Error::Io(std::io::Error::new(
                    err.kind(),
                    format!("{context}: {err}"),
                )),
                other => other,
            }
        })
    }
}
