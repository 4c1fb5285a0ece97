//! CLI runner - executes the preparation run

use crate::cli::commands::Cli;
use crate::config::{resolve_paths, PrepConfig, ResolvedPaths};
use crate::error::Result;
use crate::pipeline::{run_pipeline, PrepStats};
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        let paths = self.resolve()?;
        let stats = self.execute(&paths)?;
        debug!(
            "Processed {} records ({} source columns) in {}ms",
            stats.records_loaded, stats.source_columns, stats.duration_ms
        );

        println!("Saved processed data to {}", paths.out_path.display());
        Ok(())
    }

    /// Merge the config file with command-line overrides
    pub fn resolve(&self) -> Result<ResolvedPaths> {
        let config_path = self.cli.config_path();
        let config = PrepConfig::load(config_path, self.cli.config_is_explicit())?;
        match &config {
            Some(_) => debug!("Using config {}", config_path.display()),
            None => debug!("No config file at {}", config_path.display()),
        }

        resolve_paths(
            config.as_ref(),
            self.cli.raw_dir.as_deref(),
            self.cli.out.as_deref(),
        )
    }

    fn execute(&self, paths: &ResolvedPaths) -> Result<PrepStats> {
        debug!(
            "Preparing {} -> {}",
            paths.raw_dir.display(),
            paths.out_path.display()
        );
        run_pipeline(paths)
    }
}
