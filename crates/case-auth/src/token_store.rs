use std::fs;
use std::path::PathBuf;

use crate::error::AuthError;

const KEYRING_USER: &str = "staff-token";
const CREDENTIALS_FILE_NAME: &str = "credentials";

/// Environment variable consulted as the second lookup tier.
pub const ENV_TOKEN_VAR: &str = "CASEDESK_AUTH__TOKEN";

/// Where a resolved token came from, for status display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// Inline `auth.token` from configuration.
    Inline,
    Keyring,
    Env,
    File,
}

impl TokenSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inline => "config",
            Self::Keyring => "keyring",
            Self::Env => "env",
            Self::File => "file",
        }
    }
}

/// Store a session token in the OS keychain. Falls back to file if the
/// keyring is unavailable.
///
/// `service` is the keyring service name (`auth.keyring_service` in
/// configuration; override it in tests to avoid touching real credentials).
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if both keyring and file storage fail.
pub fn store(service: &str, token: &str) -> Result<(), AuthError> {
    match keyring::Entry::new(service, KEYRING_USER) {
        Ok(entry) => match entry.set_password(token) {
            Ok(()) => Ok(()),
            Err(error) => {
                tracing::warn!(%error, "keyring store failed; falling back to file");
                store_file(token)
            }
        },
        Err(error) => {
            tracing::warn!(%error, "keyring unavailable; falling back to file");
            store_file(token)
        }
    }
}

/// Load a session token. Priority: keyring → `CASEDESK_AUTH__TOKEN` env →
/// file (`~/.casedesk/credentials`).
#[must_use]
pub fn load(service: &str) -> Option<String> {
    // 1. Keyring
    if let Ok(entry) = keyring::Entry::new(service, KEYRING_USER)
        && let Ok(token) = entry.get_password()
        && !token.is_empty()
    {
        return Some(token);
    }

    // 2. Environment variable
    if let Ok(token) = std::env::var(ENV_TOKEN_VAR) {
        if !token.is_empty() {
            return Some(token);
        }
    }

    // 3. File fallback
    load_file()
}

/// Delete stored credentials from keyring and file.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the credentials file cannot be removed.
pub fn delete(service: &str) -> Result<(), AuthError> {
    // Delete from keyring (ignore errors; the entry may not exist)
    if let Ok(entry) = keyring::Entry::new(service, KEYRING_USER) {
        let _ = entry.delete_credential();
    }

    // Delete credentials file
    let path = credentials_path()?;
    if path.exists() {
        fs::remove_file(&path).map_err(|e| {
            AuthError::TokenStoreError(format!("failed to delete {}: {e}", path.display()))
        })?;
    }

    Ok(())
}

/// Detect which stored tier currently holds a token.
#[must_use]
pub fn detect_source(service: &str) -> Option<TokenSource> {
    if let Ok(entry) = keyring::Entry::new(service, KEYRING_USER)
        && entry.get_password().is_ok_and(|t| !t.is_empty())
    {
        return Some(TokenSource::Keyring);
    }
    if std::env::var(ENV_TOKEN_VAR).is_ok_and(|t| !t.is_empty()) {
        return Some(TokenSource::Env);
    }
    if load_file().is_some() {
        return Some(TokenSource::File);
    }
    None
}

// --- Private file helpers ---

fn credentials_path() -> Result<PathBuf, AuthError> {
    dirs::home_dir()
        .map(|h| h.join(".casedesk").join(CREDENTIALS_FILE_NAME))
        .ok_or_else(|| {
            AuthError::TokenStoreError("home directory not found; cannot store credentials".into())
        })
}

fn store_file(token: &str) -> Result<(), AuthError> {
    let path = credentials_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AuthError::TokenStoreError(format!("mkdir {}: {e}", parent.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
            }
        }
    }
    fs::write(&path, token)
        .map_err(|e| AuthError::TokenStoreError(format!("write {}: {e}", path.display())))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
            .map_err(|e| AuthError::TokenStoreError(format!("chmod {}: {e}", path.display())))?;
    }

    Ok(())
}

fn load_file() -> Option<String> {
    let path = credentials_path().ok()?;
    fs::read_to_string(&path)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
