//! Command runner abstraction.
//!
//! Code that launches external tools takes a [`CommandRunner`] instead of
//! calling [`execute`](super::execute) directly, so tests can hand in a
//! scripted runner and never spawn a real process.

use std::path::Path;
use std::time::Duration;

use crate::error::Result;

use super::command::{execute, CommandOptions, CommandResult};

/// Runs an argument vector in a directory with a deadline.
pub trait CommandRunner {
    /// Run `argv` in `cwd`, killing it after `timeout`.
    ///
    /// Nonzero exits and timeouts are reported through the returned
    /// [`CommandResult`]; only failures to launch the program are errors.
    fn run(&self, argv: &[String], cwd: &Path, timeout: Duration) -> Result<CommandResult>;
}

/// Runner that spawns real processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, argv: &[String], cwd: &Path, timeout: Duration) -> Result<CommandResult> {
        let options = CommandOptions {
            cwd: Some(cwd.to_path_buf()),
            timeout: Some(timeout),
            ..Default::default()
        };
        execute(argv, &options)
    }
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, argv: &[String], cwd: &Path, timeout: Duration) -> Result<CommandResult> {
        (**self).run(argv, cwd, timeout)
    }
}
