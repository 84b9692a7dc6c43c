// marquee/src/main.rs

mod cli;
mod commands;
mod render;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::Session;
use marquee_core::application::Request;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1. Setup Logging (Tracing) on stderr, stdout stays for results.
    // RUST_LOG=debug marquee load movies.csv to see every step
    init_tracing(cli.verbose);

    let options = commands::SessionOptions {
        config: cli.config,
        format: cli.format,
    };

    match cli.command {
        // --- USE CASE: INGEST ONLY ---
        Commands::Load { file } => {
            let session = Session::open(&file, &options)?;
            commands::load::execute(&session)
        }

        // --- USE CASE: QUERIES ---
        Commands::ByYear { file, year } => {
            let session = Session::open(&file, &options)?;
            commands::query::execute(&session, Request::ByYear(year))
        }
        Commands::TopRated { file } => {
            let session = Session::open(&file, &options)?;
            commands::query::execute(&session, Request::HighestRatedPerYear)
        }
        Commands::ByLanguage { file, language } => {
            let session = Session::open(&file, &options)?;
            commands::query::execute(&session, Request::ByLanguage(language))
        }

        // --- USE CASE: JSON EXPORT ---
        Commands::Export { file, out } => {
            let session = Session::open(&file, &options)?;
            commands::export::execute(&session, &out)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
