//! Canonical forms
//!
//! A word's canonical form is its characters rearranged into non-decreasing
//! character-code order. Two words are anagrams exactly when their canonical
//! forms are equal.

use crate::sort::quicksort_by;

/// Compute the canonical form of a word.
///
/// Returns a new string holding the same multiset of characters as `word`,
/// sorted ascending by character code. Comparison is case-sensitive; callers
/// wanting case-insensitive grouping normalize before calling.
///
/// The empty string canonicalizes to itself, as does any single-character
/// word. Applying `canonicalize` to an already-canonical string is a no-op.
///
/// # Examples
/// ```
/// use anagram_finder::core::canonicalize;
///
/// assert_eq!(canonicalize("listen"), "eilnst");
/// assert_eq!(canonicalize("silent"), "eilnst");
/// assert_eq!(canonicalize(""), "");
/// ```
#[must_use]
pub fn canonicalize(word: &str) -> String {
    let mut letters: Vec<char> = word.chars().collect();
    quicksort_by(&mut letters, &|a, b| a < b);
    letters.into_iter().collect()
}
