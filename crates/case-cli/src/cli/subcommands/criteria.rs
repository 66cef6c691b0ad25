use clap::Args;

/// Case filter criteria, shared by `cases filter` and `filter save`.
///
/// Values are taken as free text and normalized the way the filter page
/// normalizes its inputs: unparseable entries drop out of the wire
/// payload instead of failing the command (a warning is logged).
#[derive(Clone, Debug, Default, Args)]
pub struct CriteriaArgs {
    /// Status to include; repeat for several. "all" clears the constraint.
    #[arg(long = "status")]
    pub statuses: Vec<String>,

    /// Minimum AI assessment score (0-100).
    #[arg(long)]
    pub min_score: Option<String>,

    /// Maximum AI assessment score (0-100).
    #[arg(long)]
    pub max_score: Option<String>,

    /// Minimum estimated claim amount.
    #[arg(long)]
    pub min_amount: Option<String>,

    /// Maximum estimated claim amount.
    #[arg(long)]
    pub max_amount: Option<String>,

    /// Only cases created on or after this date (YYYY-MM-DD).
    #[arg(long)]
    pub created_after: Option<String>,

    /// Only cases last updated on or before this date (YYYY-MM-DD).
    #[arg(long)]
    pub updated_before: Option<String>,

    /// Free-text search over client name, email, and case id.
    #[arg(long)]
    pub search: Option<String>,
}
