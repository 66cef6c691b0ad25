use clap::{Args, Subcommand};

/// Notification commands.
#[derive(Clone, Debug, Subcommand)]
pub enum NotificationCommands {
    /// List notifications, newest first.
    List(NotificationListArgs),
    /// Mark one notification as read.
    MarkRead {
        /// Notification id.
        id: String,
    },
}

#[derive(Clone, Debug, Args)]
pub struct NotificationListArgs {
    /// Only unread notifications.
    #[arg(long)]
    pub unread: bool,

    /// Filter by kind (e.g. case_update, document_request).
    #[arg(long)]
    pub kind: Option<String>,

    /// Only notifications created at or after this time (RFC 3339 or YYYY-MM-DD).
    #[arg(long)]
    pub since: Option<String>,

    /// Only notifications created at or before this time (RFC 3339 or YYYY-MM-DD).
    #[arg(long)]
    pub until: Option<String>,

    /// Keep polling and print updates as they arrive.
    #[arg(long)]
    pub watch: bool,

    /// Poll interval in seconds (with --watch).
    #[arg(long, requires = "watch")]
    pub interval: Option<u64>,
}
