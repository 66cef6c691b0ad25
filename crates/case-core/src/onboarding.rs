//! Intake wizard steps and legacy step-name normalization.
//!
//! The backend stores the claimant's current step as a free string, and
//! several generations of the intake flow wrote different labels for the
//! same step. [`normalize_step`] folds all known spellings to the canonical
//! step; [`resume_step`] adds the fallback rule used when deciding where a
//! claimant picks the wizard back up.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical intake wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    Eligibility,
    PersonalDetails,
    ConditionDetails,
    Documents,
    Review,
    Complete,
}

impl OnboardingStep {
    /// All steps in wizard order.
    pub const ALL: [Self; 6] = [
        Self::Eligibility,
        Self::PersonalDetails,
        Self::ConditionDetails,
        Self::Documents,
        Self::Review,
        Self::Complete,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eligibility => "eligibility",
            Self::PersonalDetails => "personal_details",
            Self::ConditionDetails => "condition_details",
            Self::Documents => "documents",
            Self::Review => "review",
            Self::Complete => "complete",
        }
    }

    /// Zero-based position in the wizard.
    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            Self::Eligibility => 0,
            Self::PersonalDetails => 1,
            Self::ConditionDetails => 2,
            Self::Documents => 3,
            Self::Review => 4,
            Self::Complete => 5,
        }
    }

    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Eligibility => Some(Self::PersonalDetails),
            Self::PersonalDetails => Some(Self::ConditionDetails),
            Self::ConditionDetails => Some(Self::Documents),
            Self::Documents => Some(Self::Review),
            Self::Review => Some(Self::Complete),
            Self::Complete => None,
        }
    }
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fold a raw step label to its canonical step.
///
/// Case, surrounding whitespace, and `-`/space separators are ignored.
/// Legacy labels written by earlier intake flows map to their modern
/// equivalents. Unknown labels return `None`.
#[must_use]
pub fn normalize_step(raw: &str) -> Option<OnboardingStep> {
    let folded = raw.trim().to_ascii_lowercase().replace(['-', ' '], "_");
    match folded.as_str() {
        "eligibility" | "intro" | "start" => Some(OnboardingStep::Eligibility),
        "personal_details" | "personal_info" | "contact" => Some(OnboardingStep::PersonalDetails),
        "condition_details" | "condition" | "medical" => Some(OnboardingStep::ConditionDetails),
        "documents" | "docs" | "document_upload" => Some(OnboardingStep::Documents),
        "review" | "summary" => Some(OnboardingStep::Review),
        "complete" | "completed" | "done" => Some(OnboardingStep::Complete),
        _ => None,
    }
}

/// The step a claimant resumes at.
///
/// Unknown or missing labels fall back to the first step rather than
/// erroring; a claimant must never be locked out of the wizard by a bad
/// stored label.
#[must_use]
pub fn resume_step(raw: Option<&str>) -> OnboardingStep {
    raw.and_then(normalize_step).unwrap_or(OnboardingStep::Eligibility)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("eligibility", Some(OnboardingStep::Eligibility))]
    #[case("  Personal-Details ", Some(OnboardingStep::PersonalDetails))]
    #[case("personal_info", Some(OnboardingStep::PersonalDetails))]
    #[case("medical", Some(OnboardingStep::ConditionDetails))]
    #[case("document upload", Some(OnboardingStep::Documents))]
    #[case("DONE", Some(OnboardingStep::Complete))]
    #[case("payment", None)]
    #[case("", None)]
    fn step_normalization(#[case] raw: &str, #[case] expected: Option<OnboardingStep>) {
        assert_eq!(normalize_step(raw), expected);
    }

    #[test]
    fn resume_falls_back_to_first_step() {
        assert_eq!(resume_step(Some("review")), OnboardingStep::Review);
        assert_eq!(resume_step(Some("not-a-step")), OnboardingStep::Eligibility);
        assert_eq!(resume_step(None), OnboardingStep::Eligibility);
    }

    #[test]
    fn steps_are_ordered() {
        for (idx, step) in OnboardingStep::ALL.iter().enumerate() {
            assert_eq!(step.position(), idx);
        }
        assert_eq!(OnboardingStep::Review.next(), Some(OnboardingStep::Complete));
        assert_eq!(OnboardingStep::Complete.next(), None);
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&OnboardingStep::ConditionDetails).unwrap();
        assert_eq!(json, "\"condition_details\"");
    }
}
