// wordidx-spell: report the words of a text that are not in a dictionary.
//
// Usage:
//   wordidx-spell [-d DICTIONARY] [OPTIONS] TEXT
//
// The dictionary is a whitespace-separated word list. When -d is not
// given, WORDIDX_DICT_PATH is used, then ./dictionaries/large.
// Diagnostics go to stderr; set RUST_LOG=debug for load details.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wordidx::IndexConfig;
use wordidx_core::limits::{DEFAULT_BUCKETS, MAX_WORD_LEN};

#[derive(Parser)]
#[command(name = "wordidx-spell", version)]
#[command(about = "Report the words of a text that are not in a dictionary", long_about = None)]
struct Args {
    /// Word list to load
    #[arg(short, long, env = "WORDIDX_DICT_PATH")]
    dictionary: Option<PathBuf>,

    /// Number of hash buckets
    #[arg(long, env = "WORDIDX_BUCKETS", default_value_t = DEFAULT_BUCKETS)]
    buckets: usize,

    /// Longest accepted word, in bytes
    #[arg(long, env = "WORDIDX_MAX_WORD_LEN", default_value_t = MAX_WORD_LEN)]
    max_word_len: usize,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Only print the summary, not each misspelled word
    #[arg(short, long)]
    quiet: bool,

    /// Text to check
    text: PathBuf,
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = IndexConfig::default()
        .with_buckets(args.buckets)
        .with_max_word_len(args.max_word_len);
    let dictionary = wordidx_cli::resolve_dictionary(args.dictionary.as_deref());
    let text = std::fs::read(&args.text)
        .with_context(|| format!("could not open {}", args.text.display()))?;

    let report = wordidx_cli::spell_check(config, &dictionary, &text)?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    if args.json {
        report.write_json(&mut out)?;
    } else {
        report.write_text(&mut out, !args.quiet)?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
