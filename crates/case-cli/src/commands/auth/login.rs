use std::io::{BufRead, IsTerminal, Write};

use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    user_id: String,
    email: Option<String>,
    role: &'static str,
    permissions: Vec<&'static str>,
    expires_at: String,
    stored_in: Option<&'static str>,
}

pub fn handle(
    args: &AuthLoginArgs,
    flags: &GlobalFlags,
    config: &case_config::CaseConfig,
) -> anyhow::Result<()> {
    let token = match &args.token {
        Some(token) => token.clone(),
        None => read_token_from_stdin()?,
    };
    let token = token.trim();
    if token.is_empty() {
        anyhow::bail!("auth login: no token provided");
    }

    let service = &config.auth.keyring_service;
    let session = case_auth::login(service, token)?;
    let stored_in = case_auth::token_store::detect_source(service).map(|source| source.as_str());

    output(
        &AuthLoginResponse {
            authenticated: true,
            user_id: session.identity.user_id,
            email: session.identity.email,
            role: session.identity.role.as_str(),
            permissions: session.identity.permissions.names(),
            expires_at: session.expires_at.to_rfc3339(),
            stored_in,
        },
        flags.format,
    )
}

fn read_token_from_stdin() -> anyhow::Result<String> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprint!("Paste session token: ");
        std::io::stderr().flush().ok();
    }
    let mut token = String::new();
    stdin
        .lock()
        .read_line(&mut token)
        .context("failed to read token from stdin")?;
    Ok(token)
}
