//! The upgrade command.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::UpgradeSettings;

/// Package manager used to upgrade Breeze.
pub const UPGRADE_TOOL: &str = "uv";

/// Package name Breeze is installed under.
pub const BREEZE_PACKAGE: &str = "apache-airflow-breeze";

/// The external command that upgrades the installed tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeInvocation {
    /// Full argument vector, program first.
    pub argv: Vec<String>,
    /// Directory the command runs in.
    pub cwd: PathBuf,
    /// Deadline after which the command is killed.
    pub timeout: Duration,
}

impl UpgradeInvocation {
    /// `uv tool upgrade apache-airflow-breeze`, run in `cwd`.
    pub fn new(cwd: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            argv: vec![
                UPGRADE_TOOL.to_string(),
                "tool".to_string(),
                "upgrade".to_string(),
                BREEZE_PACKAGE.to_string(),
            ],
            cwd: cwd.into(),
            timeout,
        }
    }

    /// Build the invocation for a sources root using loaded settings.
    pub fn from_settings(sources_root: &Path, settings: &UpgradeSettings) -> Self {
        Self::new(sources_root, settings.timeout)
    }

    /// The command as a user would type it.
    pub fn command_line(&self) -> String {
        self.argv.join(" ")
    }
}
