//! Decoder types and traits
//!
//! Defines the core decoder abstractions.

use super::decoders::{CsvDecoder, JsonDecoder, JsonlDecoder};
use crate::error::Result;
use crate::types::Record;
use std::path::Path;

/// Format of a source file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderFormat {
    /// Comma-separated values with a header row
    Csv,
    /// A single JSON document (records or columns orientation)
    Json,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

impl DecoderFormat {
    /// Pick the format from a file extension (case-insensitive)
    ///
    /// Returns `None` for files the loader should ignore.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            "jsonl" | "ndjson" => Some(Self::Jsonl),
            _ => None,
        }
    }

    /// Short lowercase name, used in log lines
    pub fn name(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Jsonl => "jsonl",
        }
    }
}

/// Trait for decoding a source file body into records
pub trait RecordDecoder: Send + Sync {
    /// Decode the whole body into a list of records
    fn decode(&self, body: &str) -> Result<Vec<Record>>;
}

/// Build the default decoder for a format
pub fn decoder_for(format: DecoderFormat) -> Box<dyn RecordDecoder> {
    match format {
        DecoderFormat::Csv => Box::new(CsvDecoder::new()),
        DecoderFormat::Json => Box::new(JsonDecoder::new()),
        DecoderFormat::Jsonl => Box::new(JsonlDecoder::new()),
    }
}
