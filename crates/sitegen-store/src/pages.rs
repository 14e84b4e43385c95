use crate::error::{Result, StoreError};
use crate::paths::ensure_parent_dir;
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOutcome {
    Patched,
    Unchanged,
    Missing,
}

/// Overwrites `path` with `html`.
pub fn write_page(path: &Path, html: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, html).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Removes any existing file first, then writes.
pub fn replace_page(path: &Path, html: &str) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).map_err(|source| StoreError::Remove {
            path: path.to_path_buf(),
            source,
        })?;
    }
    write_page(path, html)
}

/// Read-modify-write of an existing page. `patch` returns `None` when it
/// found nothing to replace, and the file is then left untouched. A
/// missing page is never created.
pub fn patch_page<F>(path: &Path, patch: F) -> Result<PatchOutcome>
where
    F: FnOnce(&str) -> Option<String>,
{
    if !path.is_file() {
        return Ok(PatchOutcome::Missing);
    }
    let content = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    match patch(&content) {
        Some(updated) => {
            write_page(path, &updated)?;
            Ok(PatchOutcome::Patched)
        }
        None => Ok(PatchOutcome::Unchanged),
    }
}
