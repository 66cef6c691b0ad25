//! Case listing endpoints.

use case_auth::StaffSession;
use case_core::entities::{CaseRow, UserCase};
use case_core::filter::CaseFilterRequest;

use crate::error::ApiError;
use crate::http::{check_response, ensure_live};
use crate::ApiClient;

/// One page of filtered cases plus the unpaged match count.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredCases {
    pub rows: Vec<CaseRow>,
    /// Total matches across all pages, for "showing X of Y" displays.
    pub total: u64,
}

#[derive(serde::Deserialize)]
struct FilteredEnvelope {
    data: Vec<CaseRow>,
    total: u64,
}

#[derive(serde::Deserialize)]
struct RowsEnvelope {
    data: Vec<CaseRow>,
}

#[derive(serde::Deserialize)]
struct UserCasesEnvelope {
    data: Vec<UserCase>,
}

impl ApiClient {
    /// Run a case filter: `POST /api/admin/cases/filter`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::SessionExpired`] before sending if the session
    /// is dead, otherwise any transport/API/parse error.
    pub async fn filter_cases(
        &self,
        session: &StaffSession,
        request: &CaseFilterRequest,
    ) -> Result<FilteredCases, ApiError> {
        ensure_live(session)?;
        let resp = self
            .http
            .post(self.url("/api/admin/cases/filter"))
            .bearer_auth(&session.raw_token)
            .json(request)
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let envelope: FilteredEnvelope = resp.json().await?;
        Ok(FilteredCases {
            rows: envelope.data,
            total: envelope.total,
        })
    }

    /// Fetch the unfiltered claims table page: `GET /api/admin/claims-table`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the session is dead, the request fails, or
    /// the response cannot be parsed.
    pub async fn claims_table(
        &self,
        session: &StaffSession,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<CaseRow>, ApiError> {
        ensure_live(session)?;
        let resp = self
            .http
            .get(self.url("/api/admin/claims-table"))
            .bearer_auth(&session.raw_token)
            .query(&[("limit", limit), ("offset", offset)])
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let envelope: RowsEnvelope = resp.json().await?;
        Ok(envelope.data)
    }

    /// Fetch the signed-in claimant's own cases: `GET /api/user/cases`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the session is dead, the request fails, or
    /// the response cannot be parsed.
    pub async fn user_cases(&self, session: &StaffSession) -> Result<Vec<UserCase>, ApiError> {
        ensure_live(session)?;
        let resp = self
            .http
            .get(self.url("/api/user/cases"))
            .bearer_auth(&session.raw_token)
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let envelope: UserCasesEnvelope = resp.json().await?;
        Ok(envelope.data)
    }
}
