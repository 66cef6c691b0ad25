use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::CaseStatus;

/// One row of the admin case table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CaseRow {
    pub case_id: String,
    pub client_name: String,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub status: CaseStatus,
    /// Screening score, 0 to 100. Absent until the intake call is scored.
    pub ai_score: Option<u32>,
    pub estimated_claim_amount: Option<f64>,
    pub recent_activity: Option<String>,
    /// Opaque product tags, passed through for badge rendering only.
    pub products: Option<serde_json::Value>,
    /// Opaque call summary blob, never interpreted client-side.
    pub call_summary: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A claimant's own case as returned by `/api/user/cases`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserCase {
    pub case_id: String,
    pub status: CaseStatus,
    /// Raw onboarding step label as stored by the backend. Legacy rows
    /// carry old names; resolve with [`crate::onboarding::resume_step`].
    pub current_step: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
