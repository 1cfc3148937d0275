//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are generic over [`crate::shell::CommandRunner`] so tests can
//! drive them without spawning uv.

pub mod check_setup;
pub mod dispatcher;
pub mod self_upgrade;

pub use check_setup::CheckSetupCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use self_upgrade::SelfUpgradeCommand;
