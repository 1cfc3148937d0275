//! Self-upgrade settings read from the environment.

use std::time::Duration;

/// Environment variable holding the upgrade timeout in whole seconds.
pub const TIMEOUT_ENV: &str = "BREEZE_SELF_UPGRADE_TIMEOUT";

/// Environment variable that disables the automatic setup check.
pub const SKIP_CHECK_ENV: &str = "SKIP_BREEZE_SELF_UPGRADE_CHECK";

/// Timeout used when [`TIMEOUT_ENV`] is unset or unusable.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings for the self-upgrade check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeSettings {
    /// How long the upgrade command may run before it is killed.
    pub timeout: Duration,
    /// Whether the automatic "setup changed" check is disabled.
    pub skip_check: bool,
}

impl Default for UpgradeSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            skip_check: false,
        }
    }
}

impl UpgradeSettings {
    /// Load settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through a variable lookup function.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            timeout: parse_timeout(lookup(TIMEOUT_ENV).as_deref()),
            skip_check: parse_flag(lookup(SKIP_CHECK_ENV).as_deref()),
        }
    }

    /// Override the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Apply a `--timeout` flag given in seconds. Zero is ignored.
    pub fn with_timeout_secs(self, secs: Option<u64>) -> Self {
        match secs {
            Some(secs) if secs > 0 => self.with_timeout(Duration::from_secs(secs)),
            _ => self,
        }
    }
}

/// Parse a timeout in whole seconds, falling back to the default.
///
/// Zero is rejected: a zero deadline would kill every upgrade immediately.
pub fn parse_timeout(raw: Option<&str>) -> Duration {
    let Some(raw) = raw else {
        return Duration::from_secs(DEFAULT_TIMEOUT_SECS);
    };

    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Duration::from_secs(secs),
        _ => {
            tracing::debug!(
                value = raw,
                default = DEFAULT_TIMEOUT_SECS,
                "Ignoring invalid {}",
                TIMEOUT_ENV
            );
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        }
    }
}

fn parse_flag(raw: Option<&str>) -> bool {
    match raw.map(|v| v.trim().to_lowercase()) {
        None => false,
        Some(v) => !matches!(v.as_str(), "" | "0" | "false" | "no"),
    }
}
