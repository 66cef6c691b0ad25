//! Shared HTTP response helpers for the backend client.
//!
//! Centralizes status-code handling (401 → session expired, non-success →
//! [`ApiError::Api`] with `detail` extraction) so endpoint modules stay
//! focused on request construction and response mapping.

use case_auth::StaffSession;

use crate::error::ApiError;

/// Reject an expired session before any request is sent.
pub(crate) fn ensure_live(session: &StaffSession) -> Result<(), ApiError> {
    if session.is_expired() {
        return Err(ApiError::SessionExpired);
    }
    Ok(())
}

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **401 Unauthorized** → [`ApiError::SessionExpired`]; the backend
///   invalidated the session after the client-side expiry check passed.
/// - **Non-success status** → [`ApiError::Api`] with status code and the
///   body's `detail` field when present, otherwise the raw body.
pub(crate) async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if resp.status() == 401 {
        return Err(ApiError::SessionExpired);
    }
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Api {
            status,
            message: extract_detail(&body).unwrap_or(body),
        });
    }
    Ok(resp)
}

/// Pull the `detail` field out of an error body, if it is JSON with one.
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("detail")?.as_str().map(ToString::to_string)
}

#[cfg(test)]
pub(crate) mod testing {
    use chrono::{TimeDelta, Utc};

    use case_auth::StaffSession;
    use case_core::enums::StaffRole;
    use case_core::identity::StaffIdentity;
    use case_core::permissions::Permissions;

    pub(crate) fn session_expiring_in(secs: i64) -> StaffSession {
        StaffSession {
            raw_token: "tok".to_string(),
            identity: StaffIdentity {
                user_id: "staff_1".to_string(),
                email: None,
                role: StaffRole::Admin,
                permissions: Permissions::ALL,
            },
            expires_at: Utc::now() + TimeDelta::seconds(secs),
        }
    }

    pub(crate) fn live_session() -> StaffSession {
        session_expiring_in(3600)
    }
}
