//! Source file discovery.

use std::fs;
use std::path::{Path, PathBuf};

use crate::decode::DecoderFormat;
use crate::error::{Result, ResultExt};

/// Lists every supported source file under `root`, recursively.
///
/// Hidden files and directories (leading `.`) are skipped and symlinked
/// directories are not followed. Returns files sorted by path. A missing
/// root, or one that is not a directory, yields an empty list.
pub fn discover_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    if root.is_dir() {
        walk(root, &mut files)?;
    }

    files.sort();
    Ok(files)
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory {}", dir.display()))?;

    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read directory {}", dir.display()))?;

        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }

        let path = entry.path();
        let file_type = entry
            .file_type()
            .with_context(|| format!("Failed to stat {}", path.display()))?;

        if file_type.is_dir() {
            walk(&path, files)?;
        } else if path.is_file() && DecoderFormat::from_path(&path).is_some() {
            files.push(path);
        }
    }

    Ok(())
}
