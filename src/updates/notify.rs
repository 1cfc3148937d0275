//! Restart notification.

use crate::ui::UserInterface;

/// Shown once after the installed Breeze was replaced.
pub const RESTART_NOTICE: &str =
    "Breeze was upgraded because its setup changed. Please re-run your command to use the new version.";

/// Tell the user the running binary is stale and must be relaunched.
pub fn inform_about_self_upgrade(ui: &mut dyn UserInterface) {
    tracing::debug!("Breeze installation was modified by the upgrade");
    ui.warning(RESTART_NOTICE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn notice_is_a_single_warning() {
        let mut ui = MockUI::new();
        inform_about_self_upgrade(&mut ui);

        assert_eq!(ui.warnings(), &[RESTART_NOTICE]);
        assert_eq!(ui.output_count(), 1);
    }

    #[test]
    fn notice_asks_for_rerun() {
        assert!(RESTART_NOTICE.contains("re-run"));
    }
}
