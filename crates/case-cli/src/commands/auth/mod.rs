mod login;
mod logout;
mod status;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;

/// Handle `csd auth <subcommand>`.
///
/// Auth commands run against the token store and never need a live
/// session, so they are dispatched before the application context exists.
pub fn handle(
    action: &AuthCommands,
    flags: &GlobalFlags,
    config: &case_config::CaseConfig,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, flags, config),
        AuthCommands::Logout => logout::handle(flags, config),
        AuthCommands::Status => status::handle(flags, config),
    }
}
