//! Anagram class ordering
//!
//! Sorts a dictionary so that every anagram class becomes a maximal
//! contiguous run: shorter words first, and classes of equal length ordered
//! by canonical form.

use crate::core::Entry;
use crate::sort::quicksort_by;
use std::cmp::Ordering;

/// Compare two entries by class position.
///
/// Word length is the primary key, canonical form the secondary. Entries
/// that compare `Equal` are anagrams of each other.
#[must_use]
pub fn class_order(a: &Entry, b: &Entry) -> Ordering {
    a.char_len()
        .cmp(&b.char_len())
        .then_with(|| a.canonical().cmp(b.canonical()))
}

/// Sort `entries` in place into class order.
///
/// After this returns, the members of each anagram class occupy adjacent
/// positions, classes of shorter words come first, and classes of equal
/// length appear in non-decreasing canonical order. The relative order of
/// entries within one class is unspecified. No entries are added, dropped,
/// or replaced; the slice is only permuted.
pub fn classify(entries: &mut [Entry]) {
    quicksort_by(entries, &|a, b| class_order(a, b) == Ordering::Less);
}
