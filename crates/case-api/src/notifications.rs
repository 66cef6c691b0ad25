//! Notification endpoints.
//!
//! The notification routes predate the admin API's snake_case convention
//! and take camelCase query parameters (`unreadOnly`), matching what the
//! backend actually parses.

use chrono::{DateTime, Utc};

use case_auth::StaffSession;
use case_core::entities::Notification;
use case_core::enums::NotificationKind;

use crate::error::ApiError;
use crate::http::{check_response, ensure_live};
use crate::ApiClient;

/// Query options for [`ApiClient::fetch_notifications`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationQuery {
    pub unread_only: bool,
    pub kind: Option<NotificationKind>,
    pub limit: Option<u32>,
    pub since: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
}

impl NotificationQuery {
    /// Wire query pairs; unset options are omitted entirely.
    fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if self.unread_only {
            params.push(("unreadOnly", "true".to_string()));
        }
        if let Some(kind) = self.kind {
            params.push(("type", kind.as_str().to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(since) = self.since {
            params.push(("since", since.to_rfc3339()));
        }
        if let Some(until) = self.until {
            params.push(("until", until.to_rfc3339()));
        }
        params
    }
}

#[derive(serde::Deserialize)]
struct NotificationsEnvelope {
    data: Vec<Notification>,
}

impl ApiClient {
    /// Fetch notifications: `GET /api/notifications`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the session is dead, the request fails, or
    /// the response cannot be parsed.
    pub async fn fetch_notifications(
        &self,
        session: &StaffSession,
        query: &NotificationQuery,
    ) -> Result<Vec<Notification>, ApiError> {
        ensure_live(session)?;
        let resp = self
            .http
            .get(self.url("/api/notifications"))
            .bearer_auth(&session.raw_token)
            .query(&query.to_params())
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let envelope: NotificationsEnvelope = resp.json().await?;
        Ok(envelope.data)
    }

    /// Mark one notification as read: `POST /api/notifications/{id}/read`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a blank id, otherwise any
    /// transport/API error.
    pub async fn mark_notification_read(
        &self,
        session: &StaffSession,
        id: &str,
    ) -> Result<(), ApiError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ApiError::Validation("notification id is required".into()));
        }
        ensure_live(session)?;

        let resp = self
            .http
            .post(self.url(&format!(
                "/api/notifications/{}/read",
                urlencoding::encode(id)
            )))
            .bearer_auth(&session.raw_token)
            .send()
            .await?;
        check_response(resp).await?;
        Ok(())
    }
}
