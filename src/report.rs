//! Class serialization
//!
//! Walks a classified dictionary once and writes each anagram class as a
//! single line of double-space-separated words, counting classes as their
//! boundaries are crossed.

use crate::core::Entry;
use rustc_hash::FxHashMap;
use std::io::{self, Write};

/// Separator between words of one class.
const WORD_SEPARATOR: &str = "  ";

/// Terminator between classes.
#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Counts produced while writing one dictionary's classes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportStats {
    /// Number of classes written.
    pub class_count: usize,
    /// Number of words written; equals the dictionary size.
    pub word_count: usize,
    /// How many classes were written of each member count.
    pub class_sizes: FxHashMap<usize, usize>,
}

/// Write every anagram class in `entries` to `sink`, one class per line.
///
/// `entries` must already be in class order (see [`crate::classify`]); each
/// maximal run of equal canonical forms becomes one line. The scan looks one
/// entry ahead: a length or canonical mismatch ends the current class, and
/// the end of the sequence ends the last one, so the final entry is always
/// flushed and every word of the dictionary appears in the output exactly
/// once. An empty dictionary writes nothing.
///
/// # Errors
///
/// Returns any I/O error raised by `sink`; the write is abandoned at the
/// point of failure.
pub fn report<W: Write>(entries: &[Entry], sink: &mut W) -> io::Result<ReportStats> {
    let mut stats = ReportStats::default();
    let mut run_len = 0_usize;

    for (i, entry) in entries.iter().enumerate() {
        run_len += 1;
        sink.write_all(entry.original().as_bytes())?;

        let continues = entries.get(i + 1).is_some_and(|next| {
            next.char_len() == entry.char_len() && next.canonical() == entry.canonical()
        });

        if continues {
            sink.write_all(WORD_SEPARATOR.as_bytes())?;
        } else {
            sink.write_all(LINE_ENDING.as_bytes())?;
            stats.class_count += 1;
            *stats.class_sizes.entry(run_len).or_insert(0) += 1;
            run_len = 0;
        }
        stats.word_count += 1;
    }

    Ok(stats)
}
