//! Progress spinners.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::theme::BreezeTheme;
use super::SpinnerHandle;

/// Spinner shown while the upgrade command runs.
pub struct ProgressSpinner {
    bar: ProgressBar,
    theme: BreezeTheme,
}

impl ProgressSpinner {
    pub fn new(message: &str, theme: BreezeTheme) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
        {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar, theme }
    }

    /// A spinner that draws nothing (quiet mode).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            theme: BreezeTheme::plain(),
        }
    }

    // Replace the spinner line with a static status line.
    fn finish_with(&mut self, line: String) {
        if let Ok(style) = ProgressStyle::default_spinner().template("{msg}") {
            self.bar.set_style(style);
        }
        self.bar.finish_with_message(line);
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn finish_success(&mut self, msg: &str) {
        let line = self.theme.format_success(msg);
        self.finish_with(line);
    }

    fn finish_error(&mut self, msg: &str) {
        let line = self.theme.format_error(msg);
        self.finish_with(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_spinner_finishes() {
        let mut spinner = ProgressSpinner::hidden();
        spinner.finish_success("Done");
        assert!(spinner.bar.is_finished());
    }

    #[test]
    fn visible_spinner_finishes_on_error() {
        let mut spinner = ProgressSpinner::new("Upgrading", BreezeTheme::plain());
        spinner.finish_error("Failed");
        assert!(spinner.bar.is_finished());
    }
}
