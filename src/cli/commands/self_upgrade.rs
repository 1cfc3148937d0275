//! Self-upgrade command implementation.
//!
//! Provides `breeze self-upgrade`.

use std::path::PathBuf;

use crate::cli::args::SelfUpgradeArgs;
use crate::config::UpgradeSettings;
use crate::shell::CommandRunner;
use crate::ui::UserInterface;
use crate::updates::{SelfUpgradeChecker, UpgradeInvocation, UpgradeResult};

use super::dispatcher::{Command, CommandResult};

/// The self-upgrade command implementation.
pub struct SelfUpgradeCommand<R> {
    sources_root: PathBuf,
    settings: UpgradeSettings,
    args: SelfUpgradeArgs,
    runner: R,
}

impl<R: CommandRunner> SelfUpgradeCommand<R> {
    /// Create a new self-upgrade command.
    pub fn new(
        sources_root: PathBuf,
        settings: UpgradeSettings,
        args: SelfUpgradeArgs,
        runner: R,
    ) -> Self {
        Self {
            sources_root,
            settings,
            args,
            runner,
        }
    }
}

impl<R: CommandRunner> Command for SelfUpgradeCommand<R> {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        let settings = self.settings.clone().with_timeout_secs(self.args.timeout);
        let verbose = ui.output_mode().shows_command_output();
        let checker = SelfUpgradeChecker::new(
            &self.runner,
            UpgradeInvocation::from_settings(&self.sources_root, &settings),
        )
        .with_verbose(verbose);

        let mut spinner = ui.start_spinner(&format!(
            "Running {}",
            checker.invocation().command_line()
        ));
        let result = match checker.run_upgrade() {
            Ok(result) => result,
            Err(e) => {
                spinner.finish_error("Could not start the upgrade");
                return Err(e);
            }
        };
        match &result {
            UpgradeResult::Success { .. } => spinner.finish_success("Upgrade finished"),
            _ => spinner.finish_error("Upgrade did not complete"),
        }
        drop(spinner);

        let modified = checker.report(&result, ui);
        if result.is_success() && !modified {
            ui.success("Breeze is already up to date");
        }

        // Timeouts and failed upgrades are warnings, not errors.
        Ok(CommandResult::success())
    }
}
