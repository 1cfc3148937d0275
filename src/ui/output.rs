//! Output verbosity.

/// How much the CLI prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Everything, plus uv's stderr when an upgrade fails.
    Verbose,
    #[default]
    Normal,
    /// Warnings and errors only.
    Quiet,
}

impl OutputMode {
    /// Pick the mode for the global `--verbose`/`--quiet` flags.
    ///
    /// `--quiet` wins when both are given.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        match (verbose, quiet) {
            (_, true) => Self::Quiet,
            (true, false) => Self::Verbose,
            (false, false) => Self::Normal,
        }
    }

    /// Whether captured stderr of a failed command is echoed.
    pub fn shows_command_output(&self) -> bool {
        *self == Self::Verbose
    }

    pub fn shows_spinners(&self) -> bool {
        *self != Self::Quiet
    }

    /// Whether plain messages and successes are printed.
    pub fn shows_messages(&self) -> bool {
        *self != Self::Quiet
    }
}
