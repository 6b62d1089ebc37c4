//! Anagram Finder
//!
//! Groups the words of a word list into anagram equivalence classes: sets of
//! words that are permutations of one another. Each class is written to an
//! output file as one line of double-space-separated words, ordered by word
//! length and then by canonical (letter-sorted) form within each length.
//!
//! # Quick Start
//!
//! ```rust
//! use anagram_finder::classify::classify;
//! use anagram_finder::core::Entry;
//! use anagram_finder::report::report;
//!
//! let mut entries: Vec<Entry> = ["listen", "silent", "banana"]
//!     .into_iter()
//!     .map(Entry::new)
//!     .collect();
//!
//! classify(&mut entries);
//!
//! let mut out = Vec::new();
//! let stats = report(&entries, &mut out).unwrap();
//! assert_eq!(stats.class_count, 2);
//! ```

// Core domain types
pub mod core;

// In-place comparison sorting
pub mod sort;

// Anagram class ordering
pub mod classify;

// Class serialization
pub mod report;

// Word list sources
pub mod dictionaries;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
