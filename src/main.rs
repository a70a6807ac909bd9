//! Word Pattern Solver - CLI
//!
//! Serves the match engine over HTTP or runs one-shot queries from the
//! command line.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wordmatch::{
    commands::{QueryConfig, ServeConfig, run_query, run_serve},
    dictionary,
};

#[derive(Parser)]
#[command(
    name = "wordmatch",
    about = "Find five-letter words matching a pattern and letter constraints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = dictionary::EMBEDDED)]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server (default)
    Serve {
        /// Address to bind
        #[arg(short, long, default_value = "127.0.0.1")]
        bind: String,

        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },

    /// Solve a single query and print the matches
    Query {
        /// 5-character pattern: letters or '_' for unknown positions
        pattern: String,

        /// Letters that must appear somewhere in a match
        #[arg(short, long, default_value = "")]
        included: String,

        /// Letters that must not appear anywhere in a match
        #[arg(short = 'x', long, default_value = "")]
        excluded: String,

        /// Emit the HTTP response payload instead of the terminal listing
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // The dictionary must load before anything runs; a bad wordlist path is
    // a startup error, not a request error.
    let dictionary = dictionary::load(&cli.wordlist)?;
    tracing::info!(words = dictionary.len(), source = %cli.wordlist, "dictionary loaded");

    // Default to Serve mode if no command given
    let command = cli.command.unwrap_or(Commands::Serve {
        bind: "127.0.0.1".to_string(),
        port: 3000,
    });

    match command {
        Commands::Serve { bind, port } => run_serve(&ServeConfig { bind, port }, dictionary),
        Commands::Query {
            pattern,
            included,
            excluded,
            json,
        } => run_query(
            &QueryConfig {
                pattern,
                included,
                excluded,
                json,
            },
            &dictionary,
        ),
    }
}
