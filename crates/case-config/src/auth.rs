//! Authentication configuration.
//!
//! The token itself normally lives in the OS keyring or the credentials
//! file (see `case-auth`); the inline `token` field exists for CI and
//! one-off scripting via `CASEDESK_AUTH__TOKEN`.

use serde::{Deserialize, Serialize};

fn default_keyring_service() -> String {
    "casedesk".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Inline session token. Takes precedence over keyring and
    /// credentials-file lookup when set.
    #[serde(default)]
    pub token: String,

    /// Keyring service name under which the token is stored.
    #[serde(default = "default_keyring_service")]
    pub keyring_service: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            keyring_service: default_keyring_service(),
        }
    }
}

impl AuthConfig {
    #[must_use]
    pub fn has_inline_token(&self) -> bool {
        !self.token.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = AuthConfig::default();
        assert!(!config.has_inline_token());
        assert_eq!(config.keyring_service, "casedesk");
    }
}
