// marquee/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Movie catalog ingestion and query engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (default: ./marquee.yaml or ./marquee.yml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format, overrides the configuration
    #[arg(long, global = true, value_parser = ["text", "json"])]
    pub format: Option<String>,

    /// Debug logs on stderr (RUST_LOG wins when set)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 📥 Parses a movie file and reports how many movies were accepted
    Load {
        /// Movie file: a header line, then `title,year,[lang;...],rating`
        file: PathBuf,
    },

    /// 📅 Lists the movies released in a given year
    ByYear {
        file: PathBuf,

        #[arg(allow_negative_numbers = true)]
        year: i32,
    },

    /// ⭐ Shows the highest rated movie of every year
    TopRated { file: PathBuf },

    /// 🌐 Lists the movies available in a language (exact, case-sensitive)
    ByLanguage { file: PathBuf, language: String },

    /// 📦 Exports the catalog and per-year ranking as JSON
    Export {
        file: PathBuf,

        /// Destination of the JSON artifact
        #[arg(long, short, default_value = "catalog.json")]
        out: PathBuf,
    },
}
