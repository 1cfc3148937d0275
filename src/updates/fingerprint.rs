//! Setup fingerprinting.
//!
//! The fingerprint is the SHA-256 of Breeze's `pyproject.toml` in the
//! sources checkout. After a successful upgrade it is written to a stamp file
//! so later runs can tell whether the setup changed since.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::breeze_pyproject;
use crate::error::Result;

/// Stamp location, relative to the sources root.
pub const STAMP_FILE: &str = ".build/breeze/setup-fingerprint.json";

/// Fingerprint recorded after the last successful upgrade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupStamp {
    /// Hex SHA-256 of the Breeze pyproject.
    pub fingerprint: String,
    /// When the stamp was written.
    pub recorded_at: DateTime<Utc>,
}

/// Path of the stamp file under a sources root.
pub fn stamp_path(sources_root: &Path) -> PathBuf {
    sources_root.join(STAMP_FILE)
}

/// Compute the current setup fingerprint.
pub fn compute_fingerprint(sources_root: &Path) -> Result<String> {
    let content = fs::read(breeze_pyproject(sources_root))?;
    Ok(hex::encode(Sha256::digest(&content)))
}

/// Load the stamp, treating a missing or unreadable file as absent.
pub fn load_stamp(sources_root: &Path) -> Option<SetupStamp> {
    let path = stamp_path(sources_root);
    let content = fs::read_to_string(&path).ok()?;
    match serde_json::from_str(&content) {
        Ok(stamp) => Some(stamp),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Ignoring unreadable setup stamp");
            None
        }
    }
}

/// Record `fingerprint` as the last upgraded setup.
pub fn save_stamp(sources_root: &Path, fingerprint: &str) -> Result<SetupStamp> {
    let path = stamp_path(sources_root);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let stamp = SetupStamp {
        fingerprint: fingerprint.to_string(),
        recorded_at: Utc::now(),
    };

    let content = serde_json::to_string_pretty(&stamp).map_err(anyhow::Error::from)?;
    fs::write(&path, content)?;

    Ok(stamp)
}

/// Whether the setup differs from the last recorded upgrade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupStatus {
    /// No stamp has been recorded yet.
    NeverRecorded { current: String },
    /// The fingerprint matches the stamp.
    Unchanged { current: String },
    /// The fingerprint differs from the stamp.
    Changed { current: String, recorded: String },
}

impl SetupStatus {
    /// The fingerprint of the setup on disk.
    pub fn current(&self) -> &str {
        match self {
            Self::NeverRecorded { current }
            | Self::Unchanged { current }
            | Self::Changed { current, .. } => current,
        }
    }

    /// Whether an upgrade is due.
    pub fn needs_upgrade(&self) -> bool {
        !matches!(self, Self::Unchanged { .. })
    }
}

/// Compare the setup on disk against the stamp.
pub fn setup_status(sources_root: &Path) -> Result<SetupStatus> {
    let current = compute_fingerprint(sources_root)?;

    Ok(match load_stamp(sources_root) {
        None => SetupStatus::NeverRecorded { current },
        Some(stamp) if stamp.fingerprint == current => SetupStatus::Unchanged { current },
        Some(stamp) => SetupStatus::Changed {
            current,
            recorded: stamp.fingerprint,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BreezeError;
    use tempfile::TempDir;

    fn sources_with(pyproject: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let breeze = temp.path().join("dev").join("breeze");
        fs::create_dir_all(&breeze).unwrap();
        fs::write(breeze.join("pyproject.toml"), pyproject).unwrap();
        temp
    }

    #[test]
    fn fingerprint_is_hex_sha256() {
        let temp = sources_with("");
        let fingerprint = compute_fingerprint(temp.path()).unwrap();
        // SHA-256 of the empty input.
        assert_eq!(
            fingerprint,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn fingerprint_changes_with_content() {
        let temp = sources_with("version = \"1\"");
        let before = compute_fingerprint(temp.path()).unwrap();
        fs::write(breeze_pyproject(temp.path()), "version = \"2\"").unwrap();
        let after = compute_fingerprint(temp.path()).unwrap();
        assert_ne!(before, after);
    }

    #[test]
    fn fingerprint_requires_pyproject() {
        let temp = TempDir::new().unwrap();
        let err = compute_fingerprint(temp.path()).unwrap_err();
        assert!(matches!(err, BreezeError::Io(_)));
    }

    #[test]
    fn save_then_load_stamp() {
        let temp = sources_with("x");
        let saved = save_stamp(temp.path(), "abc123").unwrap();
        let loaded = load_stamp(temp.path()).unwrap();
        assert_eq!(saved, loaded);
        assert!(stamp_path(temp.path()).exists());
    }

    #[test]
    fn corrupt_stamp_is_ignored() {
        let temp = sources_with("x");
        let path = stamp_path(temp.path());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{not json").unwrap();

        assert!(load_stamp(temp.path()).is_none());
    }

    #[test]
    fn status_never_recorded_needs_upgrade() {
        let temp = sources_with("x");
        let status = setup_status(temp.path()).unwrap();
        assert!(matches!(status, SetupStatus::NeverRecorded { .. }));
        assert!(status.needs_upgrade());
    }

    #[test]
    fn status_unchanged_after_recording() {
        let temp = sources_with("x");
        let current = compute_fingerprint(temp.path()).unwrap();
        save_stamp(temp.path(), &current).unwrap();

        let status = setup_status(temp.path()).unwrap();
        assert_eq!(
            status,
            SetupStatus::Unchanged {
                current: current.clone()
            }
        );
        assert!(!status.needs_upgrade());
        assert_eq!(status.current(), current);
    }

    #[test]
    fn status_changed_after_edit() {
        let temp = sources_with("x");
        save_stamp(temp.path(), "old-fingerprint").unwrap();

        let status = setup_status(temp.path()).unwrap();
        match status {
            SetupStatus::Changed { recorded, .. } => assert_eq!(recorded, "old-fingerprint"),
            other => panic!("Expected Changed, got {:?}", other),
        }
    }
}
