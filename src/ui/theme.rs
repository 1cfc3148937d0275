//! Colors and status icons.

use console::Style;

/// Styles for status lines.
#[derive(Debug, Clone)]
pub struct BreezeTheme {
    pub success: Style,
    pub warning: Style,
    pub error: Style,
}

impl Default for BreezeTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl BreezeTheme {
    /// Green successes, yellow warnings, bold red errors.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
        }
    }

    /// No styling, for pipes and `--no-color`.
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        styled(&self.success, '✓', msg)
    }

    pub fn format_warning(&self, msg: &str) -> String {
        styled(&self.warning, '⚠', msg)
    }

    pub fn format_error(&self, msg: &str) -> String {
        styled(&self.error, '✗', msg)
    }
}

fn styled(style: &Style, icon: char, msg: &str) -> String {
    style.apply_to(format!("{} {}", icon, msg)).to_string()
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_prefixes_icons() {
        let theme = BreezeTheme::plain();
        assert_eq!(theme.format_success("Upgraded"), "✓ Upgraded");
        assert_eq!(theme.format_warning("Timed out"), "⚠ Timed out");
        assert_eq!(theme.format_error("Failed"), "✗ Failed");
    }

    #[test]
    fn colored_theme_keeps_text() {
        let theme = BreezeTheme::default();
        assert!(theme.format_warning("Timed out").contains("Timed out"));
    }
}
