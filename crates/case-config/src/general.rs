//! General application configuration.

use case_core::enums::TimeRange;
use case_core::filter::DEFAULT_LIMIT;
use serde::{Deserialize, Serialize};

/// Default result limit, matching the backend's filter page size.
const fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

/// Default notification watch poll interval in seconds.
const fn default_watch_interval_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for case listing commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Default analytics reporting window.
    #[serde(default)]
    pub default_time_range: TimeRange,

    /// Poll interval for `notifications list --watch`, in seconds.
    #[serde(default = "default_watch_interval_secs")]
    pub watch_interval_secs: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            default_time_range: TimeRange::default(),
            watch_interval_secs: default_watch_interval_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_limit, 200);
        assert_eq!(config.default_time_range, TimeRange::Month);
        assert_eq!(config.watch_interval_secs, 30);
    }
}
