//! Plain-line UI for CI and pipes.

use super::theme::BreezeTheme;
use super::{OutputMode, SpinnerHandle, UserInterface};

/// Writes unstyled lines: status to stdout, warnings and errors to stderr.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: BreezeTheme,
}

impl NonInteractiveUI {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: BreezeTheme::plain(),
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("  {}", message);
        }
        Box::new(LineSpinner {
            mode: self.mode,
            theme: self.theme.clone(),
        })
    }
}

/// Prints only the final line of a spinner.
struct LineSpinner {
    mode: OutputMode,
    theme: BreezeTheme,
}

impl SpinnerHandle for LineSpinner {
    fn finish_success(&mut self, msg: &str) {
        if self.mode.shows_spinners() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }
}
