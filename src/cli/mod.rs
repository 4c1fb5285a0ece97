//! CLI module
//!
//! Command-line interface for the preparation run.
//!
//! # Options
//!
//! - `--config` - YAML config with `raw_dir` and `processed_path`
//! - `--raw-dir` - source directory, overrides the config
//! - `--out` - output CSV path, overrides the config

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
