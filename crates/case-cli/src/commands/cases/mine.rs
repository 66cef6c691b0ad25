use chrono::{DateTime, Utc};
use serde::Serialize;

use case_core::entities::UserCase;
use case_core::enums::CaseStatus;
use case_core::onboarding::{self, OnboardingStep};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// One of the claimant's cases with onboarding progress resolved.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct MyCaseRow {
    case_id: String,
    status: CaseStatus,
    /// Step to resume from, normalized from whatever the backend stored.
    resume_step: &'static str,
    /// Position within the onboarding flow, e.g. "3/6".
    progress: String,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
struct MyCasesResponse {
    cases: Vec<MyCaseRow>,
    count: usize,
}

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let fetched = ctx
        .client
        .user_cases(&ctx.session)
        .await
        .map_err(|error| anyhow::anyhow!(error.user_message()))?;

    let cases: Vec<MyCaseRow> = fetched.into_iter().map(to_row).collect();
    output(
        &MyCasesResponse {
            count: cases.len(),
            cases,
        },
        flags.format,
    )
}

fn to_row(case: UserCase) -> MyCaseRow {
    let step = onboarding::resume_step(case.current_step.as_deref());
    MyCaseRow {
        case_id: case.case_id,
        status: case.status,
        resume_step: step.as_str(),
        progress: format!("{}/{}", step.position() + 1, OnboardingStep::ALL.len()),
        updated_at: case.updated_at,
    }
}
