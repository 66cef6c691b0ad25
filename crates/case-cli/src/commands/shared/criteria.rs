//! Criteria flags → filter draft plumbing.

use std::str::FromStr;

use case_core::enums::CaseStatus;
use case_core::filter::{FilterCriteria, FilterDraft, STATUS_ALL};

use crate::cli::subcommands::CriteriaArgs;

/// Map criteria flags onto the filter draft.
///
/// The draft keeps everything as entered; normalization decides what
/// reaches the wire. `--created-after` bounds creation time and
/// `--updated-before` bounds last-update time, mirroring how the backend
/// interprets `start_date` and `end_date`.
#[must_use]
pub fn draft_from_args(args: &CriteriaArgs) -> FilterDraft {
    FilterDraft {
        statuses: args.statuses.clone(),
        min_ai_score: args.min_score.clone(),
        max_ai_score: args.max_score.clone(),
        min_income_potential: args.min_amount.clone(),
        max_income_potential: args.max_amount.clone(),
        start_date: args.created_after.clone(),
        end_date: args.updated_before.clone(),
        search_query: args.search.clone(),
    }
}

/// Warn about flag values normalization dropped, so a typo in
/// `--min-score` is visible instead of silently widening the result set.
pub fn warn_dropped(draft: &FilterDraft, criteria: &FilterCriteria) {
    for warning in collect_dropped_warnings(draft, criteria) {
        tracing::warn!("{warning}");
    }
}

fn collect_dropped_warnings(draft: &FilterDraft, criteria: &FilterCriteria) -> Vec<String> {
    let mut warnings = Vec::new();

    for status in &draft.statuses {
        if status != STATUS_ALL && CaseStatus::from_str(status).is_err() {
            warnings.push(format!("--status '{status}' ignored: unknown status"));
        }
    }

    let dropped = [
        (
            "--min-score",
            draft.min_ai_score.is_some() && criteria.min_ai_score.is_none(),
            "not a whole number",
        ),
        (
            "--max-score",
            draft.max_ai_score.is_some() && criteria.max_ai_score.is_none(),
            "not a whole number",
        ),
        (
            "--min-amount",
            draft.min_income_potential.is_some() && criteria.min_income_potential.is_none(),
            "not a finite number",
        ),
        (
            "--max-amount",
            draft.max_income_potential.is_some() && criteria.max_income_potential.is_none(),
            "not a finite number",
        ),
        (
            "--created-after",
            draft.start_date.is_some() && criteria.start_date.is_none(),
            "expected YYYY-MM-DD",
        ),
        (
            "--updated-before",
            draft.end_date.is_some() && criteria.end_date.is_none(),
            "expected YYYY-MM-DD",
        ),
    ];
    for (flag, was_dropped, reason) in dropped {
        if was_dropped {
            warnings.push(format!("{flag} value ignored: {reason}"));
        }
    }

    warnings
}
