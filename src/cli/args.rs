//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Breeze - keeps the installed Breeze tool in sync with the Airflow sources.
#[derive(Debug, Parser)]
#[command(name = "breeze")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the Airflow sources root (overrides discovery from the current directory)
    #[arg(long, global = true, env = "AIRFLOW_SOURCES_ROOT")]
    pub sources: Option<PathBuf>,

    /// Show verbose output, including uv's stderr when an upgrade fails
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Upgrade the installed Breeze with uv, unconditionally
    SelfUpgrade(SelfUpgradeArgs),

    /// Upgrade Breeze only if its setup changed since the last upgrade (default)
    CheckSetup(CheckSetupArgs),
}

/// Arguments for the `self-upgrade` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SelfUpgradeArgs {
    /// Seconds to wait for uv (overrides BREEZE_SELF_UPGRADE_TIMEOUT)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

/// Arguments for the `check-setup` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckSetupArgs {
    /// Only report whether the setup changed; never run the upgrade
    #[arg(long)]
    pub dry_run: bool,

    /// Seconds to wait for uv (overrides BREEZE_SELF_UPGRADE_TIMEOUT)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}
