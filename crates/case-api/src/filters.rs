//! Saved filter endpoints.
//!
//! Saved filters are stored server-side as a name-keyed map. Saving is
//! last-write-wins: re-using a name overwrites the record without
//! prompting. The save endpoint predates the JSON API and still takes a
//! form post with the criteria serialized into the `filter_data` field.

use case_auth::StaffSession;
use case_core::entities::{SavedFilterRecord, SavedFilters};
use case_core::filter::FilterCriteria;

use crate::error::ApiError;
use crate::http::{check_response, ensure_live};
use crate::ApiClient;

#[derive(serde::Deserialize)]
struct FiltersEnvelope {
    data: serde_json::Value,
}

impl ApiClient {
    /// Fetch all saved filters: `GET /api/admin/filters`.
    ///
    /// Records that no longer parse (written by older clients) are skipped
    /// with a warning rather than failing the whole listing.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the session is dead, the request fails, or
    /// the envelope is not a name-keyed object.
    pub async fn fetch_saved_filters(
        &self,
        session: &StaffSession,
    ) -> Result<SavedFilters, ApiError> {
        ensure_live(session)?;
        let resp = self
            .http
            .get(self.url("/api/admin/filters"))
            .bearer_auth(&session.raw_token)
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let envelope: FiltersEnvelope = resp.json().await?;
        let entries = envelope
            .data
            .as_object()
            .ok_or_else(|| ApiError::Parse("saved filter data is not an object".into()))?;

        let mut filters = SavedFilters::new();
        for (name, value) in entries {
            match serde_json::from_value::<SavedFilterRecord>(value.clone()) {
                Ok(record) => {
                    filters.insert(name.clone(), record);
                }
                Err(error) => {
                    tracing::warn!(%name, %error, "skipping unparseable saved filter");
                }
            }
        }
        Ok(filters)
    }

    /// Save (or overwrite) a filter under `name`: `POST /api/admin/filters`.
    ///
    /// The name is trimmed; a blank name is rejected before any request is
    /// sent.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a blank name, otherwise any
    /// transport/API error.
    pub async fn save_filter(
        &self,
        session: &StaffSession,
        name: &str,
        criteria: &FilterCriteria,
    ) -> Result<(), ApiError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::Validation("filter name is required".into()));
        }
        ensure_live(session)?;

        let filter_data =
            serde_json::to_string(criteria).map_err(|e| ApiError::Parse(e.to_string()))?;
        let resp = self
            .http
            .post(self.url("/api/admin/filters"))
            .bearer_auth(&session.raw_token)
            .form(&[("filter_name", name), ("filter_data", filter_data.as_str())])
            .send()
            .await?;
        check_response(resp).await?;
        Ok(())
    }

    /// Delete the saved filter named `name`: `DELETE /api/admin/filters/{name}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a blank name, otherwise any
    /// transport/API error (including 404 when no such filter exists).
    pub async fn delete_filter(
        &self,
        session: &StaffSession,
        name: &str,
    ) -> Result<(), ApiError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::Validation("filter name is required".into()));
        }
        ensure_live(session)?;

        let resp = self
            .http
            .delete(self.url(&format!(
                "/api/admin/filters/{}",
                urlencoding::encode(name)
            )))
            .bearer_auth(&session.raw_token)
            .send()
            .await?;
        check_response(resp).await?;
        Ok(())
    }
}
