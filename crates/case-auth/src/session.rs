use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use case_core::enums::StaffRole;
use case_core::identity::StaffIdentity;
use case_core::permissions::Permissions;

use crate::error::AuthError;

/// A decoded staff session.
///
/// Decoding reads the token payload without verifying the signature; the
/// backend is the authority on validity and rejects tampered tokens on
/// every request. Client-side decoding exists so expiry and permissions
/// can be checked before a request is ever sent.
#[derive(Debug, Clone)]
pub struct StaffSession {
    /// Raw token string, sent as the bearer credential.
    pub raw_token: String,
    pub identity: StaffIdentity,
    /// Token expiration time (from the `exp` claim).
    pub expires_at: DateTime<Utc>,
}

/// Claims casedesk reads from the session token payload.
#[derive(Debug, Deserialize)]
struct TokenClaims {
    sub: String,
    email: Option<String>,
    role: Option<String>,
    perms: Option<u32>,
    exp: i64,
}

impl StaffSession {
    /// Decode a session token into a typed session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidToken` if the token is not three
    /// dot-separated segments, the payload is not valid base64/JSON, the
    /// `exp` claim is out of range, or the role label is unrecognized.
    pub fn decode(token: &str) -> Result<Self, AuthError> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return Err(AuthError::InvalidToken("expected three token segments".into()));
        }
        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(parts[1])
            .map_err(|e| AuthError::InvalidToken(format!("base64 decode failed: {e}")))?;
        let claims: TokenClaims = serde_json::from_slice(&payload)
            .map_err(|e| AuthError::InvalidToken(format!("claims parse failed: {e}")))?;

        let role = parse_role(claims.role.as_deref())?;
        let permissions = claims
            .perms
            .map_or_else(|| Permissions::for_role(role), Permissions::from_bits);
        let expires_at = DateTime::from_timestamp(claims.exp, 0)
            .ok_or_else(|| AuthError::InvalidToken("exp timestamp out of range".into()))?;

        Ok(Self {
            raw_token: token.to_string(),
            identity: StaffIdentity {
                user_id: claims.sub,
                email: claims.email,
                role,
                permissions,
            },
            expires_at,
        })
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }

    /// Check if the session is expired or expires within `buffer_secs`.
    #[must_use]
    pub fn is_near_expiry(&self, buffer_secs: i64) -> bool {
        let threshold = Utc::now() + chrono::TimeDelta::seconds(buffer_secs);
        self.expires_at <= threshold
    }
}

/// Missing role means least privilege; a label this client does not know
/// is rejected rather than guessed at.
fn parse_role(raw: Option<&str>) -> Result<StaffRole, AuthError> {
    match raw {
        None => Ok(StaffRole::Subadmin),
        Some("admin") => Ok(StaffRole::Admin),
        Some("subadmin") => Ok(StaffRole::Subadmin),
        Some(other) => Err(AuthError::InvalidToken(format!("unrecognized role '{other}'"))),
    }
}
