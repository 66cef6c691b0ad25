//! # case-config
//!
//! Layered configuration loading for casedesk using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CASEDESK_*` prefix, `__` as separator)
//! 2. Project-level `.casedesk/config.toml`
//! 3. User-level `~/.config/casedesk/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CASEDESK_BACKEND__BASE_URL` -> `backend.base_url`,
//! `CASEDESK_AUTH__TOKEN` -> `auth.token`, etc. The `__` (double
//! underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use case_config::CaseConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = CaseConfig::load_with_dotenv().expect("config");
//!
//! // Or without dotenvy (env vars must already be set):
//! let config = CaseConfig::load().expect("config");
//!
//! if config.backend.is_configured() {
//!     println!("Backend: {}", config.backend.base_url);
//! }
//! ```

mod auth;
mod backend;
mod error;
mod general;

pub use auth::AuthConfig;
pub use backend::BackendConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CaseConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl CaseConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`CASEDESK_*` prefix)
    /// 2. `.casedesk/config.toml` (project-local)
    /// 3. `~/.config/casedesk/config.toml` (user-global)
    /// 4. Default values
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` before building the figment. This is the typical
    /// entry point for the CLI.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add additional
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".casedesk/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("CASEDESK_").split("__"));

        figment
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("casedesk").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = CaseConfig::default();
        assert!(!config.backend.is_configured());
        assert!(!config.auth.has_inline_token());
        assert_eq!(config.general.default_limit, 200);
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = CaseConfig::figment();
        let config: CaseConfig = figment.extract().expect("should extract defaults");
        assert!(!config.backend.is_configured());
        assert_eq!(config.backend.timeout_secs, 30);
        assert_eq!(config.auth.keyring_service, "casedesk");
    }
}
