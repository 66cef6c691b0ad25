//! Case filter drafts, normalization, and the wire-ready request shape.
//!
//! Staff enter filter values as free text (CLI flags, form fields). A
//! [`FilterDraft`] holds that raw input verbatim. [`FilterDraft::normalize`]
//! is the single place where raw input becomes typed [`FilterCriteria`]:
//! every consumer (apply, save, schema output) goes through it, so the
//! backend only ever sees one canonical shape.
//!
//! Wire contract, matched by the backend's filter handler:
//! - `status` and `search_query` are omitted entirely when unset
//! - numeric and date bounds serialize as explicit `null` when unset
//! - the literal status `"all"` anywhere in the draft clears the status
//!   constraint rather than filtering on a status named "all"
//! - `start_date` bounds case creation, `end_date` bounds last update;
//!   the asymmetry is load-bearing and mirrored by the backend query

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::CaseStatus;

/// Sentinel status label that clears the status constraint.
pub const STATUS_ALL: &str = "all";

/// Page size sent when the caller does not choose one.
pub const DEFAULT_LIMIT: u32 = 200;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw, unvalidated filter input as the user typed it.
///
/// Field values are kept as strings so the draft can hold whatever was
/// entered; nothing is rejected until [`FilterDraft::normalize`] runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterDraft {
    pub statuses: Vec<String>,
    pub min_ai_score: Option<String>,
    pub max_ai_score: Option<String>,
    pub min_income_potential: Option<String>,
    pub max_income_potential: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub search_query: Option<String>,
}

impl FilterDraft {
    /// Convert raw input into typed criteria.
    ///
    /// Unparseable values become unset constraints rather than errors: a
    /// score of `"abc"` filters on nothing, exactly as if the field had
    /// been left blank. Unknown status labels are dropped individually;
    /// [`STATUS_ALL`] anywhere clears the whole status constraint.
    #[must_use]
    pub fn normalize(&self) -> FilterCriteria {
        FilterCriteria {
            status: normalize_statuses(&self.statuses),
            min_ai_score: self.min_ai_score.as_deref().and_then(parse_score),
            max_ai_score: self.max_ai_score.as_deref().and_then(parse_score),
            min_income_potential: self.min_income_potential.as_deref().and_then(parse_amount),
            max_income_potential: self.max_income_potential.as_deref().and_then(parse_amount),
            start_date: self.start_date.as_deref().and_then(parse_date),
            end_date: self.end_date.as_deref().and_then(parse_date),
            search_query: self.search_query.as_deref().and_then(normalize_search),
        }
    }
}

/// Typed, canonical filter constraints.
///
/// This is the savable unit: `filter save` serializes exactly this struct
/// (no paging) into a saved filter's `filter_data`, and applying a saved
/// filter deserializes it back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FilterCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<CaseStatus>>,
    pub min_ai_score: Option<u32>,
    pub max_ai_score: Option<u32>,
    pub min_income_potential: Option<f64>,
    pub max_income_potential: Option<f64>,
    /// Lower bound on case creation date, inclusive.
    pub start_date: Option<NaiveDate>,
    /// Upper bound on last-update date, inclusive.
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
}

impl FilterCriteria {
    /// True when no constraint is set, i.e. the filter matches every case.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.status.is_none()
            && self.min_ai_score.is_none()
            && self.max_ai_score.is_none()
            && self.min_income_potential.is_none()
            && self.max_income_potential.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.search_query.is_none()
    }
}

/// Body of `POST /api/admin/cases/filter`: criteria plus paging.
///
/// Paging lives here and not on [`FilterCriteria`] so saved filters never
/// capture a page position.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct CaseFilterRequest {
    #[serde(flatten)]
    pub criteria: FilterCriteria,
    pub limit: u32,
    pub offset: u32,
}

impl CaseFilterRequest {
    /// Wrap criteria with the default first page.
    #[must_use]
    pub fn new(criteria: FilterCriteria) -> Self {
        Self {
            criteria,
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }

    #[must_use]
    pub fn with_page(mut self, limit: u32, offset: u32) -> Self {
        self.limit = limit;
        self.offset = offset;
        self
    }
}

/// Parse a score bound. Scores are whole numbers; negatives, fractions,
/// and non-numeric input all mean "no bound".
fn parse_score(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

/// Parse a currency bound. `"NaN"` and infinities parse as valid `f64`s,
/// so the finite check is required, not defensive.
fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

fn normalize_search(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Fold raw status labels into a typed, deduplicated list.
///
/// Returns `None` (no constraint) when the list is empty, when every label
/// is unknown, or when any label is [`STATUS_ALL`].
fn normalize_statuses(raw: &[String]) -> Option<Vec<CaseStatus>> {
    if raw.iter().any(|label| label.trim().eq_ignore_ascii_case(STATUS_ALL)) {
        return None;
    }
    let mut statuses: Vec<CaseStatus> = Vec::new();
    for label in raw {
        if let Ok(status) = label.parse::<CaseStatus>() {
            if !statuses.contains(&status) {
                statuses.push(status);
            }
        }
    }
    if statuses.is_empty() {
        None
    } else {
        Some(statuses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn draft_with_statuses(labels: &[&str]) -> FilterDraft {
        FilterDraft {
            statuses: labels.iter().map(ToString::to_string).collect(),
            ..FilterDraft::default()
        }
    }

    #[rstest]
    #[case("70", Some(70))]
    #[case(" 85 ", Some(85))]
    #[case("0", Some(0))]
    #[case("-5", None)]
    #[case("7.5", None)]
    #[case("NaN", None)]
    #[case("abc", None)]
    #[case("", None)]
    fn score_parsing(#[case] raw: &str, #[case] expected: Option<u32>) {
        assert_eq!(parse_score(raw), expected);
    }

    #[rstest]
    #[case("1500", Some(1500.0))]
    #[case("1500.50", Some(1500.5))]
    #[case(" 2000 ", Some(2000.0))]
    #[case("NaN", None)]
    #[case("inf", None)]
    #[case("-inf", None)]
    #[case("12k", None)]
    #[case("", None)]
    fn amount_parsing(#[case] raw: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_amount(raw), expected);
    }

    #[rstest]
    #[case("2026-01-15", Some((2026, 1, 15)))]
    #[case(" 2025-12-01 ", Some((2025, 12, 1)))]
    #[case("2026-13-01", None)]
    #[case("15/01/2026", None)]
    #[case("yesterday", None)]
    #[case("", None)]
    fn date_parsing(#[case] raw: &str, #[case] expected: Option<(i32, u32, u32)>) {
        let want = expected.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap());
        assert_eq!(parse_date(raw), want);
    }

    #[test]
    fn search_is_trimmed_and_blank_means_unset() {
        assert_eq!(normalize_search("  Maria Lopez  "), Some("Maria Lopez".to_string()));
        assert_eq!(normalize_search("   "), None);
        assert_eq!(normalize_search(""), None);
    }

    #[test]
    fn statuses_dedupe_and_skip_unknown_labels() {
        let draft = draft_with_statuses(&["Submitted", "submitted", "archived", "Submission pending"]);
        let criteria = draft.normalize();
        assert_eq!(
            criteria.status,
            Some(vec![CaseStatus::Submitted, CaseStatus::SubmissionPending])
        );
    }

    #[test]
    fn all_sentinel_clears_status_constraint() {
        let draft = draft_with_statuses(&["Submitted", "all"]);
        assert_eq!(draft.normalize().status, None);

        let draft = draft_with_statuses(&["ALL"]);
        assert_eq!(draft.normalize().status, None);
    }

    #[test]
    fn empty_or_all_unknown_statuses_mean_no_constraint() {
        assert_eq!(draft_with_statuses(&[]).normalize().status, None);
        assert_eq!(draft_with_statuses(&["archived", "closed"]).normalize().status, None);
    }

    #[test]
    fn empty_draft_normalizes_to_unconstrained_criteria() {
        let criteria = FilterDraft::default().normalize();
        assert!(criteria.is_unconstrained());
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn request_payload_matches_backend_contract() {
        let draft = FilterDraft {
            statuses: vec!["Submitted".to_string()],
            min_ai_score: Some("70".to_string()),
            ..FilterDraft::default()
        };
        let request = CaseFilterRequest::new(draft.normalize());
        let payload = serde_json::to_value(&request).unwrap();

        // Unset bounds are explicit nulls; unset search is absent entirely.
        assert_eq!(
            payload,
            json!({
                "status": ["Submitted"],
                "min_ai_score": 70,
                "max_ai_score": null,
                "min_income_potential": null,
                "max_income_potential": null,
                "start_date": null,
                "end_date": null,
                "limit": 200,
                "offset": 0
            })
        );
        assert!(payload.get("search_query").is_none());
    }

    #[test]
    fn unconstrained_request_still_carries_paging() {
        let request = CaseFilterRequest::new(FilterCriteria::default()).with_page(50, 100);
        let payload = serde_json::to_value(&request).unwrap();
        assert_eq!(payload["limit"], json!(50));
        assert_eq!(payload["offset"], json!(100));
        assert!(payload.get("status").is_none());
        assert_eq!(payload["min_ai_score"], json!(null));
    }

    #[test]
    fn criteria_roundtrip_preserves_dates_and_search() {
        let draft = FilterDraft {
            statuses: vec!["Document submission".to_string()],
            min_income_potential: Some("1200.50".to_string()),
            start_date: Some("2026-01-01".to_string()),
            end_date: Some("2026-06-30".to_string()),
            search_query: Some("  back injury ".to_string()),
            ..FilterDraft::default()
        };
        let criteria = draft.normalize();
        let json = serde_json::to_string(&criteria).unwrap();
        let back: FilterCriteria = serde_json::from_str(&json).unwrap();
        assert_eq!(back, criteria);
        assert_eq!(back.search_query.as_deref(), Some("back injury"));
        assert_eq!(back.start_date, NaiveDate::from_ymd_opt(2026, 1, 1));
    }

    #[test]
    fn garbage_numeric_input_filters_on_nothing() {
        let draft = FilterDraft {
            min_ai_score: Some("seventy".to_string()),
            max_income_potential: Some("NaN".to_string()),
            start_date: Some("01/01/2026".to_string()),
            ..FilterDraft::default()
        };
        let criteria = draft.normalize();
        assert!(criteria.is_unconstrained());
    }
}
