//! Batch processing
//!
//! Runs a set of dictionary sources independently: a failure in one source
//! never stops the others. Sources run sequentially by default; `parallel`
//! fans them out across threads, since no state is shared between runs.

use super::run::{RunError, RunReport, run_source};
use crate::dictionaries::Source;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

/// Process every source, collecting one outcome per source in input order.
#[must_use]
pub fn run_batch(sources: &[Source], parallel: bool) -> Vec<Result<RunReport, RunError>> {
    let pb = batch_progress(sources.len());

    let outcomes: Vec<Result<RunReport, RunError>> = if parallel {
        sources
            .par_iter()
            .map(|source| {
                let outcome = run_source(source);
                pb.inc(1);
                outcome
            })
            .collect()
    } else {
        sources
            .iter()
            .map(|source| {
                let outcome = run_source(source);
                pb.inc(1);
                outcome
            })
            .collect()
    };

    pb.finish_and_clear();
    outcomes
}

/// Progress bar for multi-source batches; hidden for a single source.
fn batch_progress(len: usize) -> ProgressBar {
    if len < 2 {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb
}
