use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{EtlError, Result};

/// Recursively enumerate regular files under `root`.
///
/// Symlinks are followed, so a symlink to a file counts as a candidate.
/// Traversal order is filesystem order; callers must not rely on it. An
/// empty directory yields an empty list, not an error; an empty or missing
/// root path is fatal before any work happens.
pub fn discover(root: &Path) -> Result<Vec<PathBuf>> {
    if root.as_os_str().is_empty() {
        return Err(EtlError::InvalidInput(
            "resume directory path is empty".to_string(),
        ));
    }
    if !root.is_dir() {
        return Err(EtlError::InvalidInput(format!(
            "resume directory does not exist: {}",
            root.display()
        )));
    }

    let mut candidates = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let at = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                return Err(match e.into_io_error() {
                    Some(io) => EtlError::Io(io),
                    None => EtlError::InvalidInput(format!("filesystem loop at {at}")),
                });
            }
        };
        if entry.file_type().is_file() {
            candidates.push(entry.into_path());
        }
    }

    tracing::info!(
        count = candidates.len(),
        root = %root.display(),
        "discovered candidate files"
    );
    Ok(candidates)
}
