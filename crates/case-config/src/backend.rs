//! Claims backend configuration.

use serde::{Deserialize, Serialize};

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Base URL of the claims backend (e.g., `https://claims.example.com`).
    /// Endpoint paths are appended verbatim; no trailing slash.
    #[serde(default)]
    pub base_url: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl BackendConfig {
    /// Check if the backend config has the minimum required fields.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty()
    }

    /// Base URL with any trailing slash removed, so path concatenation
    /// cannot produce `//api/...`.
    #[must_use]
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = BackendConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = BackendConfig {
            base_url: "https://claims.example.com/".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
        assert_eq!(config.normalized_base_url(), "https://claims.example.com");
    }
}
