use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
}

pub fn handle(flags: &GlobalFlags, config: &case_config::CaseConfig) -> anyhow::Result<()> {
    case_auth::logout(&config.auth.keyring_service)?;
    output(&AuthLogoutResponse { cleared: true }, flags.format)
}
