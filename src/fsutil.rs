//! Atomic file replacement.
//!
//! Every store and usage-file mutation rewrites the whole file. The rewrite
//! goes through a temporary file in the destination directory followed by a
//! rename, so the target always holds either the old contents or the new
//! ones, never a partial write.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write `contents` to `path` via a temporary file and an atomic rename.
///
/// The temporary file is created in the same directory as `path` so the
/// rename never crosses a filesystem boundary.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = path
        .parent()
        .with_context(|| format!("No parent directory for: {}", path.display()))?;

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in: {}", dir.display()))?;

    tmp.write_all(contents.as_bytes())
        .with_context(|| format!("Failed to write temporary file for: {}", path.display()))?;

    tmp.persist(path)
        .with_context(|| format!("Failed to replace file: {}", path.display()))?;

    Ok(())
}
