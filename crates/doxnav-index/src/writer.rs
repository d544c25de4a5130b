//! Canonical rewriting of index scripts.

use std::fs;
use std::path::PathBuf;

use doxnav_script::emit;

use crate::error::IndexError;
use crate::index::NavIndex;

/// Write every script of the index back in canonical form.
///
/// Files are replaced wholesale, matching the generator's own lifecycle.
///
/// # Errors
///
/// Returns [`IndexError::Io`] on the first file that cannot be written.
pub fn write(index: &NavIndex) -> Result<(), IndexError> {
    for (path, script) in index.scripts() {
        fs::write(&path, emit(script)).map_err(|source| IndexError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "wrote index script");
    }
    Ok(())
}

/// Paths of index scripts whose on-disk text differs from canonical form.
///
/// # Errors
///
/// Returns [`IndexError::Io`] if a script file cannot be read back.
pub fn unformatted(index: &NavIndex) -> Result<Vec<PathBuf>, IndexError> {
    let mut stale = Vec::new();
    for (path, script) in index.scripts() {
        let current = fs::read_to_string(&path).map_err(|source| IndexError::Io {
            path: path.clone(),
            source,
        })?;
        if current != emit(script) {
            stale.push(path);
        }
    }
    Ok(stale)
}
