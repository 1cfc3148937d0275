//! Locating the Airflow sources root.

use std::path::{Path, PathBuf};

use crate::error::{BreezeError, Result};

/// Path of the Breeze project file, relative to the sources root.
pub const BREEZE_PYPROJECT: &str = "dev/breeze/pyproject.toml";

/// Find the sources root by walking up from `start`.
///
/// The sources root is the first directory containing
/// [`BREEZE_PYPROJECT`].
pub fn find_sources_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(BREEZE_PYPROJECT).is_file() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Resolve the sources root, preferring an explicit path.
///
/// An explicit path is trusted as given; otherwise discovery starts at
/// `start`.
pub fn resolve_sources_root(explicit: Option<&Path>, start: &Path) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    find_sources_root(start).ok_or_else(|| BreezeError::SourcesNotFound {
        start: start.to_path_buf(),
        marker: BREEZE_PYPROJECT.to_string(),
    })
}

/// Path of the Breeze pyproject under a sources root.
pub fn breeze_pyproject(sources_root: &Path) -> PathBuf {
    sources_root.join(BREEZE_PYPROJECT)
}
