mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `detect --json` output stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::run(),
        Commands::Detect(args) => commands::detect::run(&args),
        Commands::Watchlist { file } => commands::watchlist::run(file.as_deref()),
        Commands::History { stats, term } => commands::history::run(stats, term.as_deref()),
        Commands::Version => commands::version::run(),
    }
}
