//! Run configuration
//!
//! The YAML config file names the source directory and the output file.
//! Command-line overrides win over file values; [`resolve_paths`] does the
//! merge without touching any global state.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file read when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "config.yml";

const MISSING_PATHS: &str = "raw_dir and out_path must be provided either as args or in config.yml";

// ============================================================================
// Config File
// ============================================================================

/// Contents of the YAML config file
///
/// Unknown keys are ignored so the file can be shared with other tools.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepConfig {
    /// Directory holding the raw CSV/JSON dumps
    #[serde(default)]
    pub raw_dir: Option<String>,

    /// Destination of the processed CSV
    #[serde(default)]
    pub processed_path: Option<String>,
}

impl PrepConfig {
    /// Parse a config from YAML text; an empty document is an empty config
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Option<Self> = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("Failed to parse config YAML: {e}")))?;
        Ok(config.unwrap_or_default())
    }

    /// Read and parse a config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_yaml(&content)
    }

    /// Load the config for a run
    ///
    /// `explicit` is false when the path is [`DEFAULT_CONFIG_PATH`] picked
    /// implicitly; a missing default file is then no config at all.
    pub fn load(path: impl AsRef<Path>, explicit: bool) -> Result<Option<Self>> {
        let path = path.as_ref();
        if !explicit && !path.exists() {
            return Ok(None);
        }
        Self::from_file(path).map(Some)
    }
}

// ============================================================================
// Path Resolution
// ============================================================================

/// Source and destination paths after merging overrides and the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub raw_dir: PathBuf,
    pub out_path: PathBuf,
}

/// Merge overrides with the config file
///
/// An explicit, non-empty override wins over the file value. Fails when
/// either path is still unset.
pub fn resolve_paths(
    file: Option<&PrepConfig>,
    raw_dir: Option<&Path>,
    out_path: Option<&Path>,
) -> Result<ResolvedPaths> {
    let raw_dir = pick(raw_dir, file.and_then(|c| c.raw_dir.as_deref()));
    let out_path = pick(out_path, file.and_then(|c| c.processed_path.as_deref()));

    match (raw_dir, out_path) {
        (Some(raw_dir), Some(out_path)) => Ok(ResolvedPaths { raw_dir, out_path }),
        _ => Err(Error::config(MISSING_PATHS)),
    }
}

fn pick(explicit: Option<&Path>, from_file: Option<&str>) -> Option<PathBuf> {
    explicit
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .or_else(|| {
            from_file
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
        })
}
