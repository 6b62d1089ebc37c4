//! Word list sources
//!
//! Names each word list, maps it to the destination its anagram classes are
//! written to, and loads its entries.

pub mod loader;
mod source;

pub use source::Source;
