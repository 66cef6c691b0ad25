use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    user_id: Option<String>,
    email: Option<String>,
    role: Option<&'static str>,
    permissions: Option<Vec<&'static str>>,
    expires_at: Option<String>,
    token_source: Option<&'static str>,
    note: Option<String>,
}

pub fn handle(flags: &GlobalFlags, config: &case_config::CaseConfig) -> anyhow::Result<()> {
    let service = &config.auth.keyring_service;
    let inline = config
        .auth
        .has_inline_token()
        .then(|| config.auth.token.as_str());

    let status = match case_auth::resolve_session(inline, service) {
        Ok(session) => AuthStatusResponse {
            authenticated: true,
            user_id: Some(session.identity.user_id),
            email: session.identity.email,
            role: Some(session.identity.role.as_str()),
            permissions: Some(session.identity.permissions.names()),
            expires_at: Some(session.expires_at.to_rfc3339()),
            token_source: case_auth::resolve_token(inline, service)
                .map(|(_, source)| source.as_str()),
            note: None,
        },
        Err(error) => AuthStatusResponse {
            authenticated: false,
            user_id: None,
            email: None,
            role: None,
            permissions: None,
            expires_at: None,
            token_source: None,
            note: Some(error.to_string()),
        },
    };

    output(&status, flags.format)
}
