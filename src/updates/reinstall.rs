//! The self-upgrade check.
//!
//! [`SelfUpgradeChecker`] runs `uv tool upgrade apache-airflow-breeze` once
//! and decides from its outcome whether the installed tool changed. Timeouts
//! and failed upgrades are reported as warnings and never abort the caller;
//! only a failure to launch the upgrade tool at all is returned as an error.

use crate::error::Result;
use crate::shell::{CommandResult, CommandRunner};
use crate::ui::UserInterface;

use super::invocation::UpgradeInvocation;
use super::notify::inform_about_self_upgrade;

/// Text uv writes to stderr when a tool's installation changed.
///
/// This is a plain substring match on uv's human-readable output.
pub const MODIFIED_MARKER: &str = "Modified";

/// Outcome of running the upgrade command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpgradeResult {
    /// The command exited with status 0.
    Success { stdout: String, stderr: String },
    /// The command was killed at its deadline.
    TimedOut,
    /// The command exited with a nonzero status (None if killed by signal).
    Failed {
        exit_code: Option<i32>,
        stderr: String,
    },
}

impl UpgradeResult {
    /// Classify a finished command.
    pub fn from_command(result: CommandResult) -> Self {
        if result.timed_out {
            Self::TimedOut
        } else if result.success {
            Self::Success {
                stdout: result.stdout,
                stderr: result.stderr,
            }
        } else {
            Self::Failed {
                exit_code: result.exit_code,
                stderr: result.stderr,
            }
        }
    }

    /// Whether the upgrade replaced the installed tool.
    pub fn is_modified(&self) -> bool {
        matches!(self, Self::Success { stderr, .. } if stderr.contains(MODIFIED_MARKER))
    }

    /// Whether the upgrade command ran to a zero exit.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Runs the upgrade command and reports what happened.
#[derive(Debug)]
pub struct SelfUpgradeChecker<R> {
    runner: R,
    invocation: UpgradeInvocation,
    verbose: bool,
}

impl<R: CommandRunner> SelfUpgradeChecker<R> {
    /// Create a checker for `invocation` using `runner`.
    pub fn new(runner: R, invocation: UpgradeInvocation) -> Self {
        Self {
            runner,
            invocation,
            verbose: false,
        }
    }

    /// Echo the upgrade tool's stderr when the upgrade fails.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// The command this checker runs.
    pub fn invocation(&self) -> &UpgradeInvocation {
        &self.invocation
    }

    /// Run the upgrade once, without reporting anything.
    pub fn run_upgrade(&self) -> Result<UpgradeResult> {
        let inv = &self.invocation;
        tracing::debug!(
            command = %inv.command_line(),
            cwd = %inv.cwd.display(),
            timeout_secs = inv.timeout.as_secs(),
            "Running self-upgrade"
        );

        let result = self.runner.run(&inv.argv, &inv.cwd, inv.timeout)?;
        Ok(UpgradeResult::from_command(result))
    }

    /// Report an upgrade outcome to the user.
    ///
    /// Returns true if the installation was modified, in which case the
    /// restart notice has been shown.
    pub fn report(&self, result: &UpgradeResult, ui: &mut dyn UserInterface) -> bool {
        match result {
            UpgradeResult::Success { .. } if result.is_modified() => {
                inform_about_self_upgrade(ui);
                true
            }
            UpgradeResult::Success { .. } => {
                tracing::debug!("Breeze installation unchanged by upgrade");
                false
            }
            UpgradeResult::TimedOut => {
                ui.warning(&format!(
                    "Timed out after {}s while upgrading Breeze. Skipping the self-upgrade; \
                     run `{}` manually if needed.",
                    self.invocation.timeout.as_secs(),
                    self.invocation.command_line()
                ));
                false
            }
            UpgradeResult::Failed { exit_code, stderr } => {
                let status = match exit_code {
                    Some(code) => format!("exit code {}", code),
                    None => "terminated by signal".to_string(),
                };
                ui.warning(&format!(
                    "Breeze self-upgrade failed ({}). Run `{}` manually to see why.",
                    status,
                    self.invocation.command_line()
                ));
                if self.verbose {
                    ui.message(stderr);
                }
                false
            }
        }
    }

    /// Upgrade Breeze and report whether its installation changed.
    ///
    /// Returns `Ok(true)` only when the upgrade exited 0 and uv reported a
    /// modification. Timeouts and failed upgrades yield `Ok(false)` after a
    /// warning. An error means the upgrade tool could not be launched.
    pub fn reinstall_if_setup_changed(&self, ui: &mut dyn UserInterface) -> Result<bool> {
        let result = self.run_upgrade()?;
        Ok(self.report(&result, ui))
    }
}
