use clap::{Args, Subcommand};

use crate::cli::subcommands::CriteriaArgs;

/// Case listing commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CasesCommands {
    /// Filtered admin case listing.
    Filter(CasesFilterArgs),
    /// Unfiltered claims table.
    List {
        /// Row offset.
        #[arg(long)]
        offset: Option<u32>,
    },
    /// The signed-in claimant's own cases with onboarding progress.
    Mine,
}

#[derive(Clone, Debug, Args)]
pub struct CasesFilterArgs {
    #[command(flatten)]
    pub criteria: CriteriaArgs,

    /// Row offset.
    #[arg(long)]
    pub offset: Option<u32>,
}
