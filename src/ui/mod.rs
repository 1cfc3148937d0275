//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use breeze::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.message("Checking Breeze installation");
//! ui.success("Breeze is up to date");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{MockUI, SpinnerStatus};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, BreezeTheme};

/// Where the upgrade check reports to.
///
/// Commands only talk to this trait, so tests can swap in [`MockUI`].
pub trait UserInterface {
    /// The verbosity chosen on the command line.
    fn output_mode(&self) -> OutputMode;

    /// Plain informational line.
    fn message(&mut self, msg: &str);

    fn success(&mut self, msg: &str);

    /// Shown even in quiet mode.
    fn warning(&mut self, msg: &str);

    fn error(&mut self, msg: &str);

    /// Start a spinner for a long-running step such as the uv call.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;
}

/// A running spinner. Dropping it without finishing leaves it on screen.
pub trait SpinnerHandle {
    fn finish_success(&mut self, msg: &str);

    fn finish_error(&mut self, msg: &str);
}
