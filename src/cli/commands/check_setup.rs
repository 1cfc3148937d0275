//! Check-setup command implementation.
//!
//! Provides `breeze check-setup`, the default command.

use std::path::PathBuf;

use crate::cli::args::CheckSetupArgs;
use crate::config::{UpgradeSettings, SKIP_CHECK_ENV};
use crate::shell::CommandRunner;
use crate::ui::UserInterface;
use crate::updates::{
    setup_status, upgrade_if_setup_changed, SelfUpgradeChecker, SetupCheck, SetupStatus,
    UpgradeInvocation,
};

use super::dispatcher::{Command, CommandResult};

/// Number of fingerprint characters shown to the user.
const SHORT_FINGERPRINT: usize = 12;

/// The check-setup command implementation.
pub struct CheckSetupCommand<R> {
    sources_root: PathBuf,
    settings: UpgradeSettings,
    args: CheckSetupArgs,
    runner: R,
}

impl<R: CommandRunner> CheckSetupCommand<R> {
    /// Create a new check-setup command.
    pub fn new(
        sources_root: PathBuf,
        settings: UpgradeSettings,
        args: CheckSetupArgs,
        runner: R,
    ) -> Self {
        Self {
            sources_root,
            settings,
            args,
            runner,
        }
    }

    fn report_status(&self, ui: &mut dyn UserInterface) -> crate::error::Result<()> {
        match setup_status(&self.sources_root)? {
            SetupStatus::NeverRecorded { current } => ui.message(&format!(
                "Breeze setup changed: no upgrade recorded yet (setup {})",
                short(&current)
            )),
            SetupStatus::Changed { current, recorded } => ui.message(&format!(
                "Breeze setup changed: {} -> {}",
                short(&recorded),
                short(&current)
            )),
            SetupStatus::Unchanged { current } => ui.message(&format!(
                "Breeze setup unchanged since the last upgrade (setup {})",
                short(&current)
            )),
        }
        Ok(())
    }
}

impl<R: CommandRunner> Command for CheckSetupCommand<R> {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        if self.settings.skip_check {
            ui.message(&format!("Self-upgrade check skipped ({} is set)", SKIP_CHECK_ENV));
            return Ok(CommandResult::success());
        }

        if self.args.dry_run {
            self.report_status(ui)?;
            return Ok(CommandResult::success());
        }

        let settings = self.settings.clone().with_timeout_secs(self.args.timeout);
        let checker = SelfUpgradeChecker::new(
            &self.runner,
            UpgradeInvocation::from_settings(&self.sources_root, &settings),
        )
        .with_verbose(ui.output_mode().shows_command_output());

        match upgrade_if_setup_changed(&checker, &settings, ui)? {
            SetupCheck::Skipped => {
                ui.message(&format!("Self-upgrade check skipped ({} is set)", SKIP_CHECK_ENV))
            }
            SetupCheck::UpToDate => ui.success("Breeze installation matches the sources"),
            SetupCheck::Upgraded { modified: false } => ui.success("Breeze is already up to date"),
            // The restart notice or the failure warning has been shown.
            SetupCheck::Upgraded { modified: true } | SetupCheck::UpgradeFailed => {}
        }

        Ok(CommandResult::success())
    }
}

fn short(fingerprint: &str) -> &str {
    fingerprint
        .get(..SHORT_FINGERPRINT)
        .unwrap_or(fingerprint)
}
