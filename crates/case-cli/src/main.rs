use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("csd error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    bootstrap::init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    // init and schema run without configuration or a session.
    match &cli.command {
        cli::Commands::Init(args) => return commands::init::handle(args, &flags),
        cli::Commands::Schema(args) => return commands::schema::handle(args, &flags),
        _ => {}
    }

    let config = bootstrap::load_config()?;
    context::warn_env_typos(&config);

    // auth commands work on the token store itself, before any session check.
    if let cli::Commands::Auth { action } = &cli.command {
        return commands::auth::handle(action, &flags, &config);
    }

    let ctx = context::AppContext::init(config)?;
    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}
