//! # case-auth
//!
//! Staff session handling for casedesk.
//!
//! Provides OS keychain token storage (`keyring`) with env and file
//! fallbacks, and typed session decoding. There is no login ceremony
//! against the backend here: staff obtain a session token from the claims
//! backend and hand it to `csd auth login`, which validates the shape and
//! stores it. The token signature is never verified client-side; the
//! backend rejects bad tokens on every request.

pub mod error;
pub mod session;
pub mod token_store;

pub use error::AuthError;
pub use session::StaffSession;
pub use token_store::TokenSource;

/// Warn when the session expires within this window.
const EXPIRY_BUFFER_SECS: i64 = 60;

/// Resolve the best available session token without decoding it.
///
/// Priority: inline config token → keyring → `CASEDESK_AUTH__TOKEN` env →
/// credentials file.
#[must_use]
pub fn resolve_token(inline_token: Option<&str>, service: &str) -> Option<(String, TokenSource)> {
    if let Some(token) = inline_token.filter(|t| !t.is_empty()) {
        return Some((token.to_string(), TokenSource::Inline));
    }
    let source = token_store::detect_source(service)?;
    token_store::load(service).map(|token| (token, source))
}

/// Resolve and decode the staff session.
///
/// Expired sessions fail here so no request is ever sent with a dead
/// token. Near-expiry sessions are allowed through with a warning.
///
/// # Errors
///
/// Returns `AuthError::NotAuthenticated` when no token is stored,
/// `AuthError::InvalidToken` when the stored token cannot be decoded, and
/// `AuthError::SessionExpired` when the token is past its `exp`.
pub fn resolve_session(inline_token: Option<&str>, service: &str) -> Result<StaffSession, AuthError> {
    let Some((token, source)) = resolve_token(inline_token, service) else {
        return Err(AuthError::NotAuthenticated);
    };

    let session = StaffSession::decode(&token)?;
    if session.is_expired() {
        return Err(AuthError::SessionExpired);
    }
    if session.is_near_expiry(EXPIRY_BUFFER_SECS) {
        tracing::warn!(
            expires_at = %session.expires_at,
            source = source.as_str(),
            "session expires within {EXPIRY_BUFFER_SECS}s; re-authenticate with `csd auth login`",
        );
    }

    Ok(session)
}

/// Validate and store a session token.
///
/// The token must decode and must not already be expired; garbage never
/// reaches the keyring.
///
/// # Errors
///
/// Returns `AuthError::InvalidToken` or `AuthError::SessionExpired` when
/// the token is unusable, `AuthError::TokenStoreError` when storage fails.
pub fn login(service: &str, token: &str) -> Result<StaffSession, AuthError> {
    let session = StaffSession::decode(token)?;
    if session.is_expired() {
        return Err(AuthError::SessionExpired);
    }
    token_store::store(service, token)?;
    Ok(session)
}

/// Clear stored credentials.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the credentials file cannot be removed.
pub fn logout(service: &str) -> Result<(), AuthError> {
    token_store::delete(service)
}
