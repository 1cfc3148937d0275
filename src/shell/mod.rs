//! External process execution.

pub mod command;
pub mod mock;
pub mod platform;
pub mod runner;

pub use command::{execute, CommandOptions, CommandResult};
pub use mock::{MockOutcome, MockRunner, RecordedCall};
pub use platform::is_ci;
pub use runner::{CommandRunner, SystemRunner};
