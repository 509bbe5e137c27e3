//! Command-line front-end: loads a corpus from a file or a URL and prints
//! text generated from a word-level Markov chain.

mod error;
mod source;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use env_logger::Env;
use log::{LevelFilter, info, warn};
use rs_markov_core::{ChainOrder, DEFAULT_MAX_WORDS, GenerationInput, Generator};

use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(name = "rs-markov", author, version, about = "Markov chain text generator", long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (-q, -qq)
    #[arg(short = 'q', long, global = true, action = ArgAction::Count)]
    quiet: u8,

    /// Chain order: 1 (single words) or 2 (word pairs)
    #[arg(short, long, global = true, value_name = "ORDER", default_value_t = ChainOrder::Bigram)]
    order: ChainOrder,

    /// Maximum number of generated words
    #[arg(short = 'n', long, global = true, value_name = "COUNT", default_value_t = DEFAULT_MAX_WORDS)]
    max_words: usize,

    /// Seed for reproducible output
    #[arg(short, long, global = true, value_name = "SEED")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the chain from a local text file
    File {
        /// Path to the corpus
        path: PathBuf,
    },
    /// Build the chain from a document downloaded over HTTP(S)
    Url {
        /// Address of the corpus
        url: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8, quiet: u8) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    builder.format_timestamp_millis();

    // Explicit flags win over RUST_LOG.
    let level = match (quiet, verbose) {
        (0, 0) => None,
        (1, _) => Some(LevelFilter::Error),
        (q, _) if q > 1 => Some(LevelFilter::Off),
        (_, 1) => Some(LevelFilter::Info),
        (_, 2) => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    };
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let _ = builder.try_init();
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let corpus = match &cli.command {
        Commands::File { path } => source::read_file(path)?,
        Commands::Url { url } => source::fetch_url(url)?,
    };

    let input = GenerationInput {
        order: cli.order,
        max_words: cli.max_words,
        seed: cli.seed,
    };
    let generator = Generator::new(&corpus, &input);
    info!(
        "Order-{} chain: {} states, {} transitions",
        generator.order(),
        generator.states(),
        generator.transitions()
    );
    if generator.is_empty() {
        warn!(
            "Corpus is too short for an order-{} chain, nothing to generate",
            generator.order()
        );
    }

    Ok(generator.generate())
}
