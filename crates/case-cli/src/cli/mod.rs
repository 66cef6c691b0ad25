use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `csd` binary.
#[derive(Debug, Parser)]
#[command(
    name = "csd",
    version,
    about = "casedesk - staff console for the disability claims backend"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// When to color table output
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, ColorMode, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "csd",
            "--format",
            "table",
            "--limit",
            "10",
            "--verbose",
            "cases",
            "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Cases { .. }));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["csd", "cases", "mine", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Cases { .. }));
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["csd", "--verbose", "--color", "never", "analytics"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert!(flags.verbose);
        assert!(!flags.quiet);
        assert_eq!(flags.color, ColorMode::Never);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["csd", "--format", "xml", "cases", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn output_format_accepts_all_supported_values() {
        for value in ["json", "table", "raw"] {
            let cli = Cli::try_parse_from(["csd", "--format", value, "analytics"])
                .expect("cli should parse");
            assert!(matches!(cli.command, Commands::Analytics(_)));
        }
    }

    #[test]
    fn criteria_flags_parse_on_cases_filter() {
        let cli = Cli::try_parse_from([
            "csd",
            "cases",
            "filter",
            "--status",
            "Submitted",
            "--status",
            "Submission pending",
            "--min-score",
            "70",
            "--created-after",
            "2026-01-01",
            "--search",
            "  maria  ",
        ])
        .expect("cli should parse");

        let Commands::Cases { action } = cli.command else {
            panic!("expected cases subcommand");
        };
        let super::subcommands::CasesCommands::Filter(args) = action else {
            panic!("expected cases filter");
        };
        assert_eq!(args.criteria.statuses, ["Submitted", "Submission pending"]);
        assert_eq!(args.criteria.min_score.as_deref(), Some("70"));
        assert_eq!(args.criteria.created_after.as_deref(), Some("2026-01-01"));
        assert_eq!(args.criteria.search.as_deref(), Some("  maria  "));
    }
}
