//! Source file decoder module
//!
//! Supports: CSV, JSON, JSONL
//!
//! # Overview
//!
//! Each decoder turns the full text of one source file into a list of
//! records. The loader picks a decoder from the file extension via
//! [`DecoderFormat::from_path`] and [`decoder_for`].

mod decoders;
mod types;

pub use decoders::{CsvDecoder, JsonDecoder, JsonlDecoder};
pub use types::{decoder_for, DecoderFormat, RecordDecoder};
