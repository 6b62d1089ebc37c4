//! Single-dictionary processing
//!
//! Reads one word list, orders it into anagram classes, and writes the
//! classes to the source's destination. Failures are returned as values so
//! the batch driver can log them and keep going.

use crate::classify::classify;
use crate::dictionaries::Source;
use crate::dictionaries::loader::load_from_file;
use crate::report::{ReportStats, report};
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Why processing one dictionary failed.
///
/// A failure is scoped to a single source; it never aborts the rest of a
/// batch.
#[derive(Debug)]
pub enum RunError {
    /// The input word list could not be opened or read. No output file is
    /// created for the source.
    SourceUnavailable {
        source: String,
        cause: io::Error,
    },
    /// The output destination could not be opened or written.
    SinkUnavailable {
        destination: String,
        cause: io::Error,
    },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceUnavailable { source, cause } => {
                write!(f, "word list '{source}' unavailable: {cause}")
            }
            Self::SinkUnavailable { destination, cause } => {
                write!(f, "output destination '{destination}' unavailable: {cause}")
            }
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SourceUnavailable { cause, .. } | Self::SinkUnavailable { cause, .. } => {
                Some(cause)
            }
        }
    }
}

/// Outcome of processing one dictionary.
#[derive(Debug)]
pub struct RunReport {
    /// Short name of the processed source.
    pub source: String,
    /// Where the classes were written.
    pub destination: PathBuf,
    /// Counts gathered while writing.
    pub stats: ReportStats,
    /// Wall-clock time for the whole run, reads and writes included.
    pub duration: Duration,
}

/// Process one dictionary source end to end.
///
/// Loads the word list, sorts it into class order, and writes one line per
/// anagram class to the source's destination. An empty word list still
/// produces its (empty) output file.
///
/// # Errors
///
/// Returns [`RunError::SourceUnavailable`] when the word list cannot be read
/// and [`RunError::SinkUnavailable`] when the destination cannot be created
/// or written.
pub fn run_source(source: &Source) -> Result<RunReport, RunError> {
    let start = Instant::now();

    let mut entries =
        load_from_file(source.path()).map_err(|cause| RunError::SourceUnavailable {
            source: source.name().to_string(),
            cause,
        })?;

    classify(&mut entries);

    let destination = source.destination();
    let file = File::create(destination).map_err(|cause| sink_unavailable(destination, cause))?;
    let mut sink = BufWriter::new(file);
    let stats =
        report(&entries, &mut sink).map_err(|cause| sink_unavailable(destination, cause))?;
    sink.flush()
        .map_err(|cause| sink_unavailable(destination, cause))?;

    Ok(RunReport {
        source: source.name().to_string(),
        destination: destination.to_path_buf(),
        stats,
        duration: start.elapsed(),
    })
}

fn sink_unavailable(destination: &Path, cause: io::Error) -> RunError {
    RunError::SinkUnavailable {
        destination: destination.display().to_string(),
        cause,
    }
}
