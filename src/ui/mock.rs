//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use breeze::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//!
//! ui.message("Upgrading Breeze");
//! ui.warning("Upgrade timed out");
//!
//! assert!(ui.has_message("Upgrading"));
//! assert_eq!(ui.warnings(), &["Upgrade timed out"]);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::{OutputMode, SpinnerHandle, UserInterface};

type Finishes = Rc<RefCell<Vec<(SpinnerStatus, String)>>>;

/// Mock UI implementation for testing.
///
/// Spinner finish lines are shared with the spinners handed out, so they
/// can be asserted after the spinner has been dropped.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    spinners: Vec<String>,
    spinner_finishes: Finishes,
}

/// How a spinner handed out by [`MockUI`] was finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerStatus {
    Success,
    Error,
}

impl MockUI {
    /// Create a MockUI in Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Messages of every spinner started, in order.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// How each spinner was finished, in order.
    pub fn spinner_finishes(&self) -> Vec<(SpinnerStatus, String)> {
        self.spinner_finishes.borrow().clone()
    }

    /// Total number of lines written through any channel.
    pub fn output_count(&self) -> usize {
        self.messages.len() + self.successes.len() + self.warnings.len() + self.errors.len()
    }

    pub fn has_message(&self, msg: &str) -> bool {
        contains(&self.messages, msg)
    }

    pub fn has_success(&self, msg: &str) -> bool {
        contains(&self.successes, msg)
    }

    pub fn has_warning(&self, msg: &str) -> bool {
        contains(&self.warnings, msg)
    }

    pub fn has_error(&self, msg: &str) -> bool {
        contains(&self.errors, msg)
    }

    /// Forget everything captured so far.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.successes.clear();
        self.warnings.clear();
        self.errors.clear();
        self.spinners.clear();
        self.spinner_finishes.borrow_mut().clear();
    }
}

fn contains(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|line| line.contains(needle))
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner {
            finishes: Rc::clone(&self.spinner_finishes),
        })
    }
}

struct MockSpinner {
    finishes: Finishes,
}

impl SpinnerHandle for MockSpinner {
    fn finish_success(&mut self, msg: &str) {
        self.finishes
            .borrow_mut()
            .push((SpinnerStatus::Success, msg.to_string()));
    }

    fn finish_error(&mut self, msg: &str) {
        self.finishes
            .borrow_mut()
            .push((SpinnerStatus::Error, msg.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ui_captures_messages() {
        let mut ui = MockUI::new();

        ui.message("Hello");
        ui.success("Done");
        ui.warning("Be careful");
        ui.error("Oops");

        assert_eq!(ui.messages(), &["Hello"]);
        assert_eq!(ui.successes(), &["Done"]);
        assert_eq!(ui.warnings(), &["Be careful"]);
        assert_eq!(ui.errors(), &["Oops"]);
        assert_eq!(ui.output_count(), 4);
    }

    #[test]
    fn spinner_finishes_outlive_the_spinner() {
        let mut ui = MockUI::new();

        let mut spinner = ui.start_spinner("Upgrading Breeze");
        spinner.finish_success("Breeze is up to date");
        drop(spinner);

        assert_eq!(ui.spinners(), &["Upgrading Breeze"]);
        assert_eq!(
            ui.spinner_finishes(),
            vec![(SpinnerStatus::Success, "Breeze is up to date".to_string())]
        );
    }

    #[test]
    fn has_helpers_match_substrings() {
        let mut ui = MockUI::new();
        ui.warning("Upgrade timed out after 3s");
        ui.error("Failed to run 'uv'");

        assert!(ui.has_warning("timed out"));
        assert!(ui.has_error("'uv'"));
        assert!(!ui.has_message("timed out"));
        assert!(!ui.has_success("anything"));
    }

    #[test]
    fn with_mode_sets_output_mode() {
        assert_eq!(MockUI::new().output_mode(), OutputMode::Normal);
        let ui = MockUI::with_mode(OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }

    #[test]
    fn clear_resets_everything() {
        let mut ui = MockUI::new();
        ui.message("a");
        let mut spinner = ui.start_spinner("c");
        spinner.finish_error("d");

        ui.clear();

        assert_eq!(ui.output_count(), 0);
        assert!(ui.spinners().is_empty());
        assert!(ui.spinner_finishes().is_empty());
    }
}
