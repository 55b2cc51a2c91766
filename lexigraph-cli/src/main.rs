//! lexigraph CLI - WordNet definitions as word graphs
//!
//! Looks up words in a WordNet database and prints either a token graph
//! (responses, nodes, edges) ready for visualisation or a human-readable
//! summary of their senses.

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod input;
mod output;
mod run;

use config::LexigraphConfig;
use lexigraph_core::OutputMode;
use run::RunOptions;

/// Turn WordNet definitions into word graphs.
///
/// Every sense of every word becomes a response row holding its definition,
/// plus one node and one edge per distinct token of that definition.
#[derive(Parser, Debug)]
#[command(name = "lexigraph")]
#[command(author, version)]
#[command(about = "Turn WordNet definitions into word graphs")]
#[command(after_help = "Examples:
  lexigraph dog cat               Graph for two words as JSON
  lexigraph -u dog                Human-readable sense summary
  lexigraph -f words.txt -o g.json
  lexigraph -r dog                Raw database lookup")]
pub struct Cli {
    /// Words to look up
    words: Vec<String>,

    /// Load newline-delimited words from FILE
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Write indented JSON to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Human-readable sense summary instead of the graph
    #[arg(short = 'u', long)]
    human: bool,

    /// Colorized structural dump on stdout
    #[arg(short, long)]
    color: bool,

    /// Print the raw database lookup and stop
    #[arg(short, long)]
    raw: bool,

    /// Echo options and output to stdout, enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all logging except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// WordNet dict/ directory or JSON snapshot file
    #[arg(short, long, value_name = "PATH", env = "LEXIGRAPH_DATABASE")]
    database: Option<PathBuf>,
}

impl Cli {
    /// Merge flags over configuration defaults.
    fn into_options(self, config: &LexigraphConfig) -> RunOptions {
        RunOptions {
            database: config.database_path(self.database.as_deref()),
            mode: OutputMode::from_human_flag(self.human || config.human()),
            color: self.color || config.use_color(),
            words: self.words,
            file: self.file,
            output: self.output,
            raw: self.raw,
            verbose: self.verbose,
        }
    }
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // Load configuration from .lexigraphrc.toml
    let config = LexigraphConfig::load(std::path::Path::new("."));
    let options = cli.into_options(&config);

    if options.color {
        colored::control::set_override(true);
    }

    match run::run(options).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
