//! Word list loading
//!
//! Reads whitespace-delimited word lists into dictionary entries.

use crate::core::Entry;
use std::fs;
use std::io;
use std::path::Path;

/// Parse whitespace-delimited words into dictionary entries.
///
/// Tokens may appear one or more per line; blank lines contribute nothing.
/// Input order is preserved and no token is dropped or deduplicated.
///
/// # Examples
/// ```
/// use anagram_finder::dictionaries::loader::entries_from_str;
///
/// let entries = entries_from_str("listen silent\nbanana\n");
/// assert_eq!(entries.len(), 3);
/// assert_eq!(entries[0].original(), "listen");
/// ```
#[must_use]
pub fn entries_from_str(content: &str) -> Vec<Entry> {
    content.split_whitespace().map(Entry::new).collect()
}

/// Load a word list from a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Entry>> {
    let content = fs::read_to_string(path)?;
    Ok(entries_from_str(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_tokens_across_lines() {
        let entries = entries_from_str("listen silent\nenlists\nbanana abanan\n");
        let words: Vec<&str> = entries.iter().map(Entry::original).collect();
        assert_eq!(words, ["listen", "silent", "enlists", "banana", "abanan"]);
    }

    #[test]
    fn tolerates_extra_whitespace() {
        let entries = entries_from_str("  dog \t god \n\n  cat  ");
        let words: Vec<&str> = entries.iter().map(Entry::original).collect();
        assert_eq!(words, ["dog", "god", "cat"]);
    }

    #[test]
    fn empty_content_yields_no_entries() {
        assert!(entries_from_str("").is_empty());
        assert!(entries_from_str(" \n \t ").is_empty());
    }

    #[test]
    fn preserves_input_order_and_duplicates() {
        let entries = entries_from_str("dog dog god");
        let words: Vec<&str> = entries.iter().map(Entry::original).collect();
        assert_eq!(words, ["dog", "dog", "god"]);
    }

    #[test]
    fn entries_carry_canonical_forms() {
        let entries = entries_from_str("listen");
        assert_eq!(entries[0].canonical(), "eilnst");
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = load_from_file("definitely/not/a/real/wordlist.txt");
        assert!(result.is_err());
    }
}
