mod list;
mod mark_read;
mod watch;

use case_api::notifications::NotificationQuery;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::NotificationCommands;
use crate::cli::subcommands::notifications::NotificationListArgs;
use crate::commands::shared::parse::{parse_enum, parse_timestamp};
use crate::context::AppContext;

/// Handle `csd notifications <subcommand>`.
pub async fn handle(
    action: &NotificationCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        NotificationCommands::List(args) => {
            let query = build_query(args, flags)?;
            if args.watch {
                let interval = args
                    .interval
                    .unwrap_or(ctx.config.general.watch_interval_secs);
                watch::run(query, interval, ctx, flags).await
            } else {
                list::run(&query, ctx, flags).await
            }
        }
        NotificationCommands::MarkRead { id } => mark_read::run(id, ctx, flags).await,
    }
}

fn build_query(args: &NotificationListArgs, flags: &GlobalFlags) -> anyhow::Result<NotificationQuery> {
    Ok(NotificationQuery {
        unread_only: args.unread,
        kind: args
            .kind
            .as_deref()
            .map(|raw| parse_enum(raw, "--kind"))
            .transpose()?,
        limit: flags.limit,
        since: args
            .since
            .as_deref()
            .map(|raw| parse_timestamp(raw, "--since"))
            .transpose()?,
        until: args
            .until
            .as_deref()
            .map(|raw| parse_timestamp(raw, "--until"))
            .transpose()?,
    })
}

#[cfg(test)]
mod tests {
    use case_core::enums::NotificationKind;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::build_query;
    use crate::cli::global::{ColorMode, GlobalFlags, OutputFormat};
    use crate::cli::subcommands::notifications::NotificationListArgs;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            limit: Some(25),
            quiet: false,
            verbose: false,
            color: ColorMode::Never,
        }
    }

    fn args() -> NotificationListArgs {
        NotificationListArgs {
            unread: true,
            kind: Some("case-update".to_string()),
            since: Some("2026-03-01".to_string()),
            until: None,
            watch: false,
            interval: None,
        }
    }

    #[test]
    fn query_is_built_from_flags() {
        let query = build_query(&args(), &flags()).expect("query should build");
        assert!(query.unread_only);
        assert_eq!(query.kind, Some(NotificationKind::CaseUpdate));
        assert_eq!(query.limit, Some(25));
        assert_eq!(
            query.since,
            Some(Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(query.until, None);
    }

    #[test]
    fn bad_kind_is_rejected() {
        let mut bad = args();
        bad.kind = Some("carrier-pigeon".to_string());
        let error = build_query(&bad, &flags()).expect_err("should fail");
        assert!(error.to_string().contains("--kind"));
    }
}
