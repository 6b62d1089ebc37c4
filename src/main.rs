//! Anagram Finder - CLI
//!
//! Groups each word list given on the command line into anagram equivalence
//! classes and writes one output file per source.

use anagram_finder::{
    commands::run_batch,
    dictionaries::Source,
    output::{print_run_failure, print_run_report},
};
use anyhow::Result;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "anagram_finder",
    about = "Groups the words of each word list into anagram equivalence classes",
    version,
    author
)]
struct Cli {
    /// Word list sources, each `path` or `path=destination`
    ///
    /// Without an explicit destination, the classes of `dict1.txt` are
    /// written to `anagram-dict1.txt`.
    #[arg(required = true)]
    sources: Vec<String>,

    /// Directory for derived destination files (created if absent)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Process sources on multiple threads (sources stay independent)
    #[arg(short, long)]
    parallel: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(dir) = &cli.output_dir {
        fs::create_dir_all(dir)?;
    }

    let sources: Vec<Source> = cli
        .sources
        .iter()
        .map(|arg| Source::from_arg(arg, cli.output_dir.as_deref()))
        .collect();

    // A failed source is reported and skipped; the remaining sources still
    // run, and the process exits successfully either way.
    for outcome in run_batch(&sources, cli.parallel) {
        match outcome {
            Ok(run) => print_run_report(&run),
            Err(error) => print_run_failure(&error),
        }
    }

    Ok(())
}
