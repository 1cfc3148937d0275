//! Process execution with captured output and an optional deadline.

use crate::error::{BreezeError, Result};
use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// How often a child with a deadline is polled for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal or timed out).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,

    /// Whether the command was killed because it ran past its timeout.
    pub timed_out: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
            timed_out: false,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
            timed_out: false,
        }
    }

    /// Create a result for a command that was killed at its deadline.
    pub fn timed_out(duration: Duration) -> Self {
        Self {
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
            duration,
            success: false,
            timed_out: true,
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Kill the command once it has run this long (None = no timeout).
    pub timeout: Option<Duration>,
}

/// Execute `argv[0]` with the remaining arguments, capturing both streams.
///
/// The program is spawned directly, not through a shell. Output is decoded
/// lossily as UTF-8. When a timeout is set and expires, the child is killed
/// and the result is marked `timed_out`; whatever it printed is discarded.
pub fn execute(argv: &[String], options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();
    let (program, args) = argv.split_first().ok_or(BreezeError::EmptyCommand)?;

    let mut cmd = Command::new(program);
    cmd.args(args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    tracing::debug!(command = %argv.join(" "), cwd = ?options.cwd, timeout = ?options.timeout, "Spawning command");

    let mut child = cmd.spawn().map_err(|source| BreezeError::CommandSpawn {
        program: program.clone(),
        source,
    })?;

    let stdout_handle = child.stdout.take().map(spawn_reader);
    let stderr_handle = child.stderr.take().map(spawn_reader);

    let status = wait_with_deadline(&mut child, options.timeout)?;
    let duration = start.elapsed();

    let Some(status) = status else {
        // Grandchildren may still hold the pipes open, so the reader threads
        // are left to finish on their own.
        tracing::debug!(elapsed = ?duration, "Command timed out and was killed");
        return Ok(CommandResult::timed_out(duration));
    };

    let stdout = join_reader(stdout_handle);
    let stderr = join_reader(stderr_handle);

    tracing::debug!(code = ?status.code(), elapsed = ?duration, "Command finished");

    if status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(status.code(), stdout, stderr, duration))
    }
}

/// Wait for the child, killing it once `timeout` has elapsed.
///
/// Returns `None` when the child was killed.
fn wait_with_deadline(
    child: &mut Child,
    timeout: Option<Duration>,
) -> std::io::Result<Option<ExitStatus>> {
    let Some(timeout) = timeout else {
        return child.wait().map(Some);
    };

    // A deadline past what Instant can represent is no deadline at all.
    let Some(deadline) = Instant::now().checked_add(timeout) else {
        return child.wait().map(Some);
    };
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            // The child may have exited between try_wait and kill.
            let _ = child.kill();
            let _ = child.wait();
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn spawn_reader<R: Read + Send + 'static>(mut stream: R) -> JoinHandle<String> {
    thread::spawn(move || {
        let mut bytes = Vec::new();
        let _ = stream.read_to_end(&mut bytes);
        String::from_utf8_lossy(&bytes).into_owned()
    })
}

fn join_reader(handle: Option<JoinHandle<String>>) -> String {
    handle
        .and_then(|h| h.join().ok())
        .unwrap_or_default()
}
