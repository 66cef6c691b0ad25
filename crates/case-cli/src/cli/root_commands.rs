use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AuthCommands, CasesCommands, FilterCommands, NotificationCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Case listings.
    Cases {
        #[command(subcommand)]
        action: CasesCommands,
    },
    /// Saved filters.
    Filter {
        #[command(subcommand)]
        action: FilterCommands,
    },
    /// Notifications.
    Notifications {
        #[command(subcommand)]
        action: NotificationCommands,
    },
    /// Aggregate case metrics.
    Analytics(AnalyticsArgs),
    /// Authentication.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Dump the JSON Schema for a wire type.
    Schema(SchemaArgs),
    /// Write a starter project config file.
    Init(InitArgs),
}

/// Arguments for `csd analytics`.
#[derive(Clone, Debug, Args)]
pub struct AnalyticsArgs {
    /// Reporting window: 7d, 30d, 90d, all.
    #[arg(long)]
    pub time_range: Option<String>,
}

/// Arguments for `csd schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type name (see `csd schema list`).
    pub type_name: String,
}

/// Arguments for `csd init`.
#[derive(Clone, Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(long)]
    pub force: bool,
}
