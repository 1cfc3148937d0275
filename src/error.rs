//! Error types for Breeze operations.
//!
//! This module defines [`BreezeError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Upgrade timeouts and nonzero exits are not errors: they are reported to
//!   the user and recovered inside [`crate::updates::SelfUpgradeChecker`]
//! - Use `BreezeError` for faults the caller has to see (missing executable,
//!   missing sources)
//! - Use `anyhow::Error` (via `BreezeError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Breeze operations.
#[derive(Debug, Error)]
pub enum BreezeError {
    /// The process could not be started at all.
    #[error("Failed to run '{program}': {source}")]
    CommandSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// An empty argument vector was handed to the runner.
    #[error("Cannot run an empty command")]
    EmptyCommand,

    /// No Airflow sources were found above the start directory.
    #[error("Airflow sources not found from {start} (looked for {marker})")]
    SourcesNotFound { start: PathBuf, marker: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Breeze operations.
pub type Result<T> = std::result::Result<T, BreezeError>;
