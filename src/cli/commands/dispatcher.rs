//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{CheckSetupArgs, Cli, Commands};
use crate::config::{resolve_sources_root, UpgradeSettings};
use crate::error::Result;
use crate::shell::SystemRunner;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Process exit code.
    pub exit_code: u8,
}

impl CommandResult {
    /// Create a successful result.
    ///
    /// Recovered upgrade problems are reported as warnings and still exit 0;
    /// only errors propagated from [`Command::execute`] exit nonzero.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    start_dir: PathBuf,
    sources: Option<PathBuf>,
    settings: UpgradeSettings,
}

impl CommandDispatcher {
    /// Create a dispatcher that discovers the sources from `start_dir`.
    ///
    /// Settings are read from the process environment.
    pub fn new(start_dir: PathBuf, sources: Option<PathBuf>) -> Self {
        Self {
            start_dir,
            sources,
            settings: UpgradeSettings::from_env(),
        }
    }

    /// Replace the environment-derived settings.
    pub fn with_settings(mut self, settings: UpgradeSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Get the directory discovery starts from.
    pub fn start_dir(&self) -> &Path {
        &self.start_dir
    }

    /// Dispatch and execute a command.
    ///
    /// Resolves the sources root, then routes the CLI subcommand to the
    /// appropriate command implementation and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let sources_root = resolve_sources_root(self.sources.as_deref(), &self.start_dir)?;
        tracing::debug!(sources = %sources_root.display(), "Resolved Airflow sources");

        match &cli.command {
            Some(Commands::SelfUpgrade(args)) => {
                let cmd = super::self_upgrade::SelfUpgradeCommand::new(
                    sources_root,
                    self.settings.clone(),
                    args.clone(),
                    SystemRunner,
                );
                cmd.execute(ui)
            }
            Some(Commands::CheckSetup(args)) => {
                let cmd = super::check_setup::CheckSetupCommand::new(
                    sources_root,
                    self.settings.clone(),
                    args.clone(),
                    SystemRunner,
                );
                cmd.execute(ui)
            }
            None => {
                // Default to the setup check, like a regular Breeze startup
                let cmd = super::check_setup::CheckSetupCommand::new(
                    sources_root,
                    self.settings.clone(),
                    CheckSetupArgs::default(),
                    SystemRunner,
                );
                cmd.execute(ui)
            }
        }
    }
}
