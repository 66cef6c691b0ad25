//! Status and selector enums for casedesk.
//!
//! `CaseStatus` keeps the backend's exact display-cased wire labels via
//! per-variant serde renames; the claims API predates this client and does
//! not speak snake_case for statuses. Everything else serializes snake_case.
//! `FromStr` impls accept kebab/snake/lowercase aliases so CLI flags stay
//! ergonomic while the wire shape stays fixed.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// CaseStatus
// ---------------------------------------------------------------------------

/// Status of a claim case through the fixed intake sequence.
///
/// ```text
/// Initial questionnaire → Document submission → Submission pending → Submitted
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum CaseStatus {
    #[serde(rename = "Initial questionnaire")]
    InitialQuestionnaire,
    #[serde(rename = "Document submission")]
    DocumentSubmission,
    #[serde(rename = "Submission pending")]
    SubmissionPending,
    #[serde(rename = "Submitted")]
    Submitted,
}

impl CaseStatus {
    /// All statuses in sequence order.
    pub const ALL: [Self; 4] = [
        Self::InitialQuestionnaire,
        Self::DocumentSubmission,
        Self::SubmissionPending,
        Self::Submitted,
    ];

    /// The exact wire label the backend stores and filters on.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InitialQuestionnaire => "Initial questionnaire",
            Self::DocumentSubmission => "Document submission",
            Self::SubmissionPending => "Submission pending",
            Self::Submitted => "Submitted",
        }
    }

    /// Zero-based position in the fixed intake sequence.
    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            Self::InitialQuestionnaire => 0,
            Self::DocumentSubmission => 1,
            Self::SubmissionPending => 2,
            Self::Submitted => 3,
        }
    }

    /// The step a case advances to next, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::InitialQuestionnaire => Some(Self::DocumentSubmission),
            Self::DocumentSubmission => Some(Self::SubmissionPending),
            Self::SubmissionPending => Some(Self::Submitted),
            Self::Submitted => None,
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseStatus {
    type Err = CoreError;

    /// Accepts the wire label or a kebab/snake/lowercase alias
    /// (`document-submission`, `submission_pending`, …).
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let folded = fold_label(raw);
        match folded.as_str() {
            "initial_questionnaire" | "questionnaire" => Ok(Self::InitialQuestionnaire),
            "document_submission" | "documents" => Ok(Self::DocumentSubmission),
            "submission_pending" | "pending" => Ok(Self::SubmissionPending),
            "submitted" => Ok(Self::Submitted),
            _ => Err(CoreError::UnknownLabel {
                field: "case status",
                value: raw.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// NotificationKind
// ---------------------------------------------------------------------------

/// Category of a notification (the `type` query parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    CaseUpdate,
    DocumentRequest,
    System,
}

impl NotificationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CaseUpdate => "case_update",
            Self::DocumentRequest => "document_request",
            Self::System => "system",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationKind {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match fold_label(raw).as_str() {
            "case_update" => Ok(Self::CaseUpdate),
            "document_request" => Ok(Self::DocumentRequest),
            "system" => Ok(Self::System),
            _ => Err(CoreError::UnknownLabel {
                field: "notification kind",
                value: raw.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// TimeRange
// ---------------------------------------------------------------------------

/// Reporting window for the analytics endpoint (`time_range` parameter).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum TimeRange {
    #[serde(rename = "7d")]
    Week,
    #[default]
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
    #[serde(rename = "all")]
    All,
}

impl TimeRange {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Week => "7d",
            Self::Month => "30d",
            Self::Quarter => "90d",
            Self::All => "all",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "7d" | "week" => Ok(Self::Week),
            "30d" | "month" => Ok(Self::Month),
            "90d" | "quarter" => Ok(Self::Quarter),
            "all" => Ok(Self::All),
            _ => Err(CoreError::UnknownLabel {
                field: "time range",
                value: raw.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// StaffRole
// ---------------------------------------------------------------------------

/// Role carried in a staff session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    Admin,
    Subadmin,
}

impl StaffRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Subadmin => "subadmin",
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lowercase a label and collapse separators so `Document-Submission`,
/// `document_submission`, and the wire label all fold to the same key.
fn fold_label(raw: &str) -> String {
    raw.trim()
        .to_ascii_lowercase()
        .replace(['-', ' '], "_")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
