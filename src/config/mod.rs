//! Configuration for the self-upgrade check.
//!
//! Settings come from the process environment (see [`settings`]) and the
//! location of the Airflow sources checkout (see [`sources`]).

pub mod settings;
pub mod sources;

pub use settings::{
    parse_timeout, UpgradeSettings, DEFAULT_TIMEOUT_SECS, SKIP_CHECK_ENV, TIMEOUT_ENV,
};
pub use sources::{breeze_pyproject, find_sources_root, resolve_sources_root, BREEZE_PYPROJECT};
