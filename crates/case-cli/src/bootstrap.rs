//! Process startup: tracing and configuration.

/// Initialize the tracing subscriber.
///
/// `CASEDESK_LOG` overrides the level derived from `--quiet`/`--verbose`.
pub fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("CASEDESK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Load configuration, honoring a `.env` file in the working directory.
pub fn load_config() -> anyhow::Result<case_config::CaseConfig> {
    case_config::CaseConfig::load_with_dotenv().map_err(anyhow::Error::from)
}
