//! Breeze - keeps the installed Breeze tool in sync with the Airflow sources.
//!
//! Breeze is installed as a uv tool. When the sources it was installed from
//! change, the installed copy goes stale. This crate runs
//! `uv tool upgrade apache-airflow-breeze`, tells whether that modified the
//! installation, and asks the user to re-run their command if it did.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings from the environment and sources discovery
//! - [`error`] - Error types and result aliases
//! - [`shell`] - External process execution
//! - [`ui`] - Terminal output, spinners and test doubles
//! - [`updates`] - The self-upgrade check and setup fingerprinting
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use breeze::shell::MockRunner;
//! use breeze::ui::MockUI;
//! use breeze::updates::{SelfUpgradeChecker, UpgradeInvocation};
//!
//! let runner = MockRunner::new().with_success("", "Modified apache-airflow-breeze");
//! let checker = SelfUpgradeChecker::new(
//!     &runner,
//!     UpgradeInvocation::new("/src/airflow", Duration::from_secs(3)),
//! );
//!
//! let mut ui = MockUI::new();
//! assert!(checker.reinstall_if_setup_changed(&mut ui).unwrap());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod shell;
pub mod ui;
pub mod updates;

pub use error::{BreezeError, Result};
