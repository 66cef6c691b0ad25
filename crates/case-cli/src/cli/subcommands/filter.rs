use clap::{Args, Subcommand};

use crate::cli::subcommands::CriteriaArgs;

/// Saved filter commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FilterCommands {
    /// List saved filters.
    List,
    /// Save (or overwrite) a named filter from criteria flags.
    Save(FilterSaveArgs),
    /// Run a saved filter's criteria against the case list.
    Apply(FilterApplyArgs),
    /// Delete a saved filter.
    Delete {
        /// Filter name.
        name: String,
    },
}

#[derive(Clone, Debug, Args)]
pub struct FilterSaveArgs {
    /// Filter name. Saving an existing name overwrites it.
    pub name: String,

    #[command(flatten)]
    pub criteria: CriteriaArgs,
}

#[derive(Clone, Debug, Args)]
pub struct FilterApplyArgs {
    /// Filter name.
    pub name: String,

    /// Row offset.
    #[arg(long)]
    pub offset: Option<u32>,
}
