//! Named dictionary sources
//!
//! A source pairs an input word list with the destination its anagram
//! classes are written to. The destination is given explicitly as
//! `path=destination` or derived from the source file name.

use std::path::{Path, PathBuf};

/// Prefix for derived destination file names.
const DERIVED_PREFIX: &str = "anagram-";

/// One word list to process: where to read it and where to write its classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    name: String,
    path: PathBuf,
    destination: PathBuf,
}

impl Source {
    /// Build a source from a command-line argument of the form `path` or
    /// `path=destination`.
    ///
    /// Without an explicit destination, the classes of `dict1.txt` go to
    /// `anagram-dict1.txt`, placed in `output_dir` when one is given and in
    /// the current directory otherwise.
    ///
    /// # Examples
    /// ```
    /// use anagram_finder::dictionaries::Source;
    /// use std::path::Path;
    ///
    /// let source = Source::from_arg("wordlists/dict1.txt", None);
    /// assert_eq!(source.name(), "dict1");
    /// assert_eq!(source.destination(), Path::new("anagram-dict1.txt"));
    /// ```
    #[must_use]
    pub fn from_arg(arg: &str, output_dir: Option<&Path>) -> Self {
        let (input, explicit) = match arg.split_once('=') {
            Some((input, destination)) => (input, Some(PathBuf::from(destination))),
            None => (arg, None),
        };

        let path = PathBuf::from(input);
        let name = path.file_stem().map_or_else(
            || input.to_string(),
            |stem| stem.to_string_lossy().into_owned(),
        );

        let destination = explicit.unwrap_or_else(|| {
            let file_name = format!("{DERIVED_PREFIX}{name}.txt");
            output_dir.map_or_else(|| PathBuf::from(&file_name), |dir| dir.join(&file_name))
        });

        Self {
            name,
            path,
            destination,
        }
    }

    /// Short name of the source, taken from its file stem.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of the input word list.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path the anagram classes are written to.
    #[inline]
    #[must_use]
    pub fn destination(&self) -> &Path {
        &self.destination
    }
}
