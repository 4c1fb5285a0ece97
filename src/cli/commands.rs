//! CLI arguments

use crate::config::DEFAULT_CONFIG_PATH;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Prepare transaction data
#[derive(Parser, Debug)]
#[command(name = "txn-prep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config.yml [default: config.yml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Raw data directory (overrides config)
    #[arg(long)]
    pub raw_dir: Option<PathBuf>,

    /// Output processed CSV path (overrides config)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Config path to read, falling back to the default
    pub fn config_path(&self) -> &Path {
        self.config
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH))
    }

    /// True when `--config` was given on the command line
    pub fn config_is_explicit(&self) -> bool {
        self.config.is_some()
    }
}
