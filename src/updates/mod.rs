//! Self-upgrade of the installed Breeze tool.
//!
//! This module provides:
//! - [`SelfUpgradeChecker`], which runs `uv tool upgrade` once and reports
//!   whether the installation changed
//! - Setup fingerprinting, so the upgrade only runs after the sources'
//!   `pyproject.toml` changed ([`upgrade_if_setup_changed`])
//! - The restart notice shown after a successful upgrade

pub mod check;
pub mod fingerprint;
pub mod invocation;
pub mod notify;
pub mod reinstall;

pub use check::{upgrade_if_setup_changed, SetupCheck};
pub use fingerprint::{
    compute_fingerprint, load_stamp, save_stamp, setup_status, SetupStamp, SetupStatus,
};
pub use invocation::{UpgradeInvocation, BREEZE_PACKAGE, UPGRADE_TOOL};
pub use notify::{inform_about_self_upgrade, RESTART_NOTICE};
pub use reinstall::{SelfUpgradeChecker, UpgradeResult, MODIFIED_MARKER};
