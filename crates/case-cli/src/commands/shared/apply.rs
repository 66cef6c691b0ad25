//! Common runner for commands that apply criteria to the case list.

use serde::Serialize;

use case_core::entities::CaseRow;
use case_core::filter::CaseFilterRequest;
use case_store::CaseListStore;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct FilteredCasesResponse {
    rows: Vec<CaseRow>,
    total: u64,
    limit: u32,
    offset: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<&'static str>,
}

/// Run a filter request through the case list store and render the result.
///
/// The request goes through [`CaseListStore`] so failure keeps whatever
/// rows were committed before it; the recorded error is what the user
/// sees. Zero matching rows is a successful outcome, marked with a note
/// rather than an error.
pub async fn apply_and_render(
    request: &CaseFilterRequest,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let store = CaseListStore::new();
    let ticket = store.begin_apply();
    let result = match ctx.client.filter_cases(&ctx.session, request).await {
        Ok(fetched) => Ok((fetched.rows, fetched.total)),
        Err(error) => {
            tracing::error!(%error, "case filter request failed");
            Err(error.user_message())
        }
    };
    store.complete_apply(ticket, result);

    let snapshot = store.snapshot();
    if let Some(message) = snapshot.last_error {
        anyhow::bail!(message);
    }

    let note = (snapshot.total == 0).then_some("no matching cases");
    output(
        &FilteredCasesResponse {
            rows: snapshot.rows,
            total: snapshot.total,
            limit: request.limit,
            offset: request.offset,
            note,
        },
        flags.format,
    )
}
