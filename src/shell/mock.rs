//! Scripted command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] without spawning anything. It
//! replays queued outcomes and records every call for later assertion.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use std::time::Duration;
//! use breeze::shell::{CommandRunner, MockRunner};
//!
//! let runner = MockRunner::new().with_success("", "Modified apache-airflow-breeze");
//!
//! let argv = vec!["uv".to_string(), "tool".to_string()];
//! let result = runner.run(&argv, Path::new("/src"), Duration::from_secs(3)).unwrap();
//!
//! assert!(result.stderr.contains("Modified"));
//! assert_eq!(runner.calls()[0].timeout, Duration::from_secs(3));
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{BreezeError, Result};

use super::command::CommandResult;
use super::runner::CommandRunner;

/// A call captured by [`MockRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub argv: Vec<String>,
    pub cwd: PathBuf,
    pub timeout: Duration,
}

/// What the mock does on its next call.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// The command ran to completion with this exit code.
    Exited {
        code: i32,
        stdout: String,
        stderr: String,
    },
    /// The command hit its deadline.
    TimedOut,
    /// The program could not be launched.
    SpawnFailure(io::ErrorKind),
}

/// Command runner that replays queued outcomes.
///
/// With an empty queue every call succeeds with no output.
#[derive(Debug, Default)]
pub struct MockRunner {
    outcomes: RefCell<VecDeque<MockOutcome>>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl MockRunner {
    /// Create a runner with no queued outcomes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an outcome.
    pub fn with_outcome(self, outcome: MockOutcome) -> Self {
        self.outcomes.borrow_mut().push_back(outcome);
        self
    }

    /// Queue a zero exit with the given output.
    pub fn with_success(self, stdout: &str, stderr: &str) -> Self {
        self.with_outcome(MockOutcome::Exited {
            code: 0,
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        })
    }

    /// Queue a nonzero exit with the given stderr.
    pub fn with_failure(self, code: i32, stderr: &str) -> Self {
        self.with_outcome(MockOutcome::Exited {
            code,
            stdout: String::new(),
            stderr: stderr.to_string(),
        })
    }

    /// Queue a timeout.
    pub fn with_timeout(self) -> Self {
        self.with_outcome(MockOutcome::TimedOut)
    }

    /// Get all recorded calls.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    /// Number of times the runner was invoked.
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, argv: &[String], cwd: &Path, timeout: Duration) -> Result<CommandResult> {
        self.calls.borrow_mut().push(RecordedCall {
            argv: argv.to_vec(),
            cwd: cwd.to_path_buf(),
            timeout,
        });

        let outcome = self.outcomes.borrow_mut().pop_front();
        match outcome {
            None => Ok(CommandResult::success(
                String::new(),
                String::new(),
                Duration::ZERO,
            )),
            Some(MockOutcome::Exited {
                code: 0,
                stdout,
                stderr,
            }) => Ok(CommandResult::success(stdout, stderr, Duration::ZERO)),
            Some(MockOutcome::Exited {
                code,
                stdout,
                stderr,
            }) => Ok(CommandResult::failure(
                Some(code),
                stdout,
                stderr,
                Duration::ZERO,
            )),
            Some(MockOutcome::TimedOut) => Ok(CommandResult::timed_out(timeout)),
            Some(MockOutcome::SpawnFailure(kind)) => Err(BreezeError::CommandSpawn {
                program: argv.first().cloned().unwrap_or_default(),
                source: io::Error::new(kind, "mock spawn failure"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv() -> Vec<String> {
        vec!["uv".to_string(), "tool".to_string()]
    }

    #[test]
    fn empty_queue_succeeds() {
        let runner = MockRunner::new();
        let result = runner
            .run(&argv(), Path::new("/src"), Duration::from_secs(1))
            .unwrap();
        assert!(result.success);
        assert_eq!(runner.call_count(), 1);
    }

    #[test]
    fn outcomes_replay_in_order() {
        let runner = MockRunner::new()
            .with_failure(2, "boom")
            .with_timeout()
            .with_success("ok", "");

        let first = runner.run(&argv(), Path::new("."), Duration::from_secs(5)).unwrap();
        assert_eq!(first.exit_code, Some(2));
        assert_eq!(first.stderr, "boom");

        let second = runner.run(&argv(), Path::new("."), Duration::from_secs(5)).unwrap();
        assert!(second.timed_out);
        assert_eq!(second.duration, Duration::from_secs(5));

        let third = runner.run(&argv(), Path::new("."), Duration::from_secs(5)).unwrap();
        assert!(third.success);
        assert_eq!(third.stdout, "ok");
    }

    #[test]
    fn spawn_failure_is_an_error() {
        let runner =
            MockRunner::new().with_outcome(MockOutcome::SpawnFailure(io::ErrorKind::NotFound));
        let err = runner
            .run(&argv(), Path::new("."), Duration::from_secs(1))
            .unwrap_err();
        assert!(matches!(err, BreezeError::CommandSpawn { ref program, .. } if program == "uv"));
    }

    #[test]
    fn records_every_call() {
        let runner = MockRunner::new();
        runner
            .run(&argv(), Path::new("/a"), Duration::from_secs(1))
            .unwrap();
        runner
            .run(&argv(), Path::new("/b"), Duration::from_secs(2))
            .unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].cwd, PathBuf::from("/a"));
        assert_eq!(calls[1].timeout, Duration::from_secs(2));
        assert_eq!(calls[1].argv, argv());
    }
}
