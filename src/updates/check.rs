//! Upgrade only when the setup changed.

use crate::config::UpgradeSettings;
use crate::error::Result;
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::fingerprint::{save_stamp, setup_status};
use super::reinstall::SelfUpgradeChecker;

/// Outcome of [`upgrade_if_setup_changed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupCheck {
    /// The check is disabled by the environment.
    Skipped,
    /// The setup matches the last successful upgrade.
    UpToDate,
    /// The upgrade ran to completion.
    Upgraded {
        /// Whether the installed tool was replaced.
        modified: bool,
    },
    /// The upgrade timed out or failed; the stamp was left untouched.
    UpgradeFailed,
}

/// Run the upgrade if the setup under the checker's working directory
/// differs from the one recorded after the last successful upgrade.
///
/// A completed upgrade records the new fingerprint whether or not it
/// modified the installation, so the command is not repeated until the
/// setup changes again.
pub fn upgrade_if_setup_changed<R: CommandRunner>(
    checker: &SelfUpgradeChecker<R>,
    settings: &UpgradeSettings,
    ui: &mut dyn UserInterface,
) -> Result<SetupCheck> {
    if settings.skip_check {
        tracing::debug!("Self-upgrade check disabled by environment");
        return Ok(SetupCheck::Skipped);
    }

    let sources_root = checker.invocation().cwd.clone();
    let status = setup_status(&sources_root)?;
    if !status.needs_upgrade() {
        tracing::debug!(fingerprint = status.current(), "Breeze setup unchanged");
        return Ok(SetupCheck::UpToDate);
    }

    tracing::debug!(fingerprint = status.current(), "Breeze setup changed, upgrading");

    let mut spinner = ui.start_spinner("Breeze setup changed, upgrading the installed tool");
    let result = match checker.run_upgrade() {
        Ok(result) => result,
        Err(e) => {
            spinner.finish_error("Could not start the upgrade");
            return Err(e);
        }
    };
    if result.is_success() {
        spinner.finish_success("Upgrade finished");
    } else {
        spinner.finish_error("Upgrade did not complete");
    }
    drop(spinner);

    let modified = checker.report(&result, ui);

    if !result.is_success() {
        return Ok(SetupCheck::UpgradeFailed);
    }

    if let Err(e) = save_stamp(&sources_root, status.current()) {
        tracing::warn!(error = %e, "Failed to record setup fingerprint");
    }

    Ok(SetupCheck::Upgraded { modified })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{MockOutcome, MockRunner};
    use crate::ui::{MockUI, SpinnerStatus};
    use crate::updates::fingerprint::{compute_fingerprint, load_stamp};
    use crate::updates::UpgradeInvocation;
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    fn sources() -> TempDir {
        let temp = TempDir::new().unwrap();
        let breeze = temp.path().join("dev").join("breeze");
        fs::create_dir_all(&breeze).unwrap();
        fs::write(breeze.join("pyproject.toml"), "[project]\nname = \"breeze\"\n").unwrap();
        temp
    }

    fn checker<'a>(runner: &'a MockRunner, temp: &TempDir) -> SelfUpgradeChecker<&'a MockRunner> {
        SelfUpgradeChecker::new(
            runner,
            UpgradeInvocation::new(temp.path(), Duration::from_secs(5)),
        )
    }

    #[test]
    fn skip_flag_short_circuits() {
        let temp = sources();
        let runner = MockRunner::new();
        let settings = UpgradeSettings {
            skip_check: true,
            ..Default::default()
        };
        let mut ui = MockUI::new();

        let outcome = upgrade_if_setup_changed(&checker(&runner, &temp), &settings, &mut ui).unwrap();

        assert_eq!(outcome, SetupCheck::Skipped);
        assert_eq!(runner.call_count(), 0);
    }

    #[test]
    fn first_run_upgrades_and_records_stamp() {
        let temp = sources();
        let runner = MockRunner::new().with_success("", "Modified apache-airflow-breeze");
        let mut ui = MockUI::new();

        let outcome =
            upgrade_if_setup_changed(&checker(&runner, &temp), &UpgradeSettings::default(), &mut ui)
                .unwrap();

        assert_eq!(outcome, SetupCheck::Upgraded { modified: true });
        assert_eq!(runner.call_count(), 1);
        let stamp = load_stamp(temp.path()).unwrap();
        assert_eq!(stamp.fingerprint, compute_fingerprint(temp.path()).unwrap());
        assert_eq!(
            ui.spinner_finishes(),
            vec![(SpinnerStatus::Success, "Upgrade finished".to_string())]
        );
    }

    #[test]
    fn unchanged_setup_skips_upgrade() {
        let temp = sources();
        let runner = MockRunner::new().with_success("", "");
        let settings = UpgradeSettings::default();
        let mut ui = MockUI::new();

        let first = upgrade_if_setup_changed(&checker(&runner, &temp), &settings, &mut ui).unwrap();
        let second = upgrade_if_setup_changed(&checker(&runner, &temp), &settings, &mut ui).unwrap();

        assert_eq!(first, SetupCheck::Upgraded { modified: false });
        assert_eq!(second, SetupCheck::UpToDate);
        assert_eq!(runner.call_count(), 1);
    }

    #[test]
    fn edited_setup_triggers_another_upgrade() {
        let temp = sources();
        let runner = MockRunner::new();
        let settings = UpgradeSettings::default();
        let mut ui = MockUI::new();

        upgrade_if_setup_changed(&checker(&runner, &temp), &settings, &mut ui).unwrap();
        fs::write(
            temp.path().join("dev/breeze/pyproject.toml"),
            "[project]\nname = \"breeze\"\nversion = \"2\"\n",
        )
        .unwrap();
        let outcome = upgrade_if_setup_changed(&checker(&runner, &temp), &settings, &mut ui).unwrap();

        assert!(matches!(outcome, SetupCheck::Upgraded { .. }));
        assert_eq!(runner.call_count(), 2);
    }

    #[test]
    fn failed_upgrade_leaves_stamp_untouched() {
        let temp = sources();
        let runner = MockRunner::new().with_timeout();
        let mut ui = MockUI::new();

        let outcome =
            upgrade_if_setup_changed(&checker(&runner, &temp), &UpgradeSettings::default(), &mut ui)
                .unwrap();

        assert_eq!(outcome, SetupCheck::UpgradeFailed);
        assert!(load_stamp(temp.path()).is_none());
        assert!(ui.has_warning("Timed out"));
    }

    #[test]
    fn spawn_failure_propagates_without_stamp() {
        let temp = sources();
        let runner = MockRunner::new()
            .with_outcome(MockOutcome::SpawnFailure(std::io::ErrorKind::NotFound));
        let mut ui = MockUI::new();

        let result =
            upgrade_if_setup_changed(&checker(&runner, &temp), &UpgradeSettings::default(), &mut ui);

        assert!(result.is_err());
        assert!(load_stamp(temp.path()).is_none());
        assert_eq!(
            ui.spinner_finishes(),
            vec![(SpinnerStatus::Error, "Could not start the upgrade".to_string())]
        );
    }

    #[test]
    fn missing_pyproject_is_an_error() {
        let temp = TempDir::new().unwrap();
        let runner = MockRunner::new();
        let mut ui = MockUI::new();

        let result =
            upgrade_if_setup_changed(&checker(&runner, &temp), &UpgradeSettings::default(), &mut ui);

        assert!(result.is_err());
        assert_eq!(runner.call_count(), 0);
    }
}
