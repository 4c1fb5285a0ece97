//! Output module
//!
//! Writes the normalized transaction table as one CSV file.
//!
//! # Overview
//!
//! This module provides:
//! - [`ProcessedWriter`] for row-by-row writing into a temporary file
//! - [`save_processed`] for writing a whole table in one call
//!
//! The destination only appears once every row is written: rows go to a
//! temporary file next to it which is renamed into place on close.

mod writer;

pub use writer::{save_processed, ProcessedWriter, OUTPUT_HEADER};

#[cfg(test)]
mod tests;
