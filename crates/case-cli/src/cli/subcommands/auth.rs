use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Validate and store a session token.
    Login(AuthLoginArgs),
    /// Clear stored credentials.
    Logout,
    /// Show current auth status.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Session token. Read from stdin when omitted.
    #[arg(long)]
    pub token: Option<String>,
}
