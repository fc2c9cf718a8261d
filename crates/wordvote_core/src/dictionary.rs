//! Dictionary lookup.
//!
//! A dictionary file is a newline-delimited list of lowercase words. A word
//! is legal if it equals one whole line exactly (a trailing `\r` is
//! ignored, so files with CRLF line endings work). Lines are compared as
//! bytes, so lines in other encodings are tolerated and simply never
//! match. Lookups never pass the word to an external process.

use crate::error::LookupError;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// A read-only set of legal words.
pub trait WordList: Send + Sync {
    /// Returns true if `word` is a legal word.
    ///
    /// # Errors
    ///
    /// Returns an error if the word list cannot be consulted.
    fn contains(&self, word: &str) -> Result<bool, LookupError>;
}

fn normalize_line(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// A dictionary loaded into memory once.
///
/// Lookups are in-memory set checks and cannot fail.
///
/// # Example
///
/// ```rust
/// use wordvote_core::{Dictionary, WordList};
///
/// let dictionary = Dictionary::from_words(["cat", "dog"]);
/// assert!(dictionary.contains("cat").unwrap());
/// assert!(!dictionary.contains("cats").unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<Vec<u8>>,
}

impl Dictionary {
    /// Loads a dictionary file.
    ///
    /// Empty lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains no words.
    pub fn load(path: &Path) -> Result<Self, LookupError> {
        let io_err = |source| LookupError::Io {
            path: path.to_path_buf(),
            source,
        };

        let reader = BufReader::new(File::open(path).map_err(io_err)?);
        let mut words = HashSet::new();
        for line in reader.split(b'\n') {
            let line = line.map_err(io_err)?;
            let word = normalize_line(&line);
            if !word.is_empty() {
                words.insert(word.to_vec());
            }
        }

        if words.is_empty() {
            return Err(LookupError::Empty {
                path: path.to_path_buf(),
            });
        }

        tracing::debug!(path = %path.display(), words = words.len(), "loaded dictionary");
        Ok(Self { words })
    }

    /// Builds a dictionary from words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(|w| Into::<String>::into(w).into_bytes()).collect(),
        }
    }

    /// Returns the number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the dictionary has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordList for Dictionary {
    fn contains(&self, word: &str) -> Result<bool, LookupError> {
        Ok(self.words.contains(word.as_bytes()))
    }
}

/// A dictionary that scans its file on every lookup.
///
/// Keeps no words in memory and always reflects the file's current
/// content, at the cost of one sequential read per lookup.
#[derive(Debug, Clone)]
pub struct ScanningDictionary {
    path: PathBuf,
}

impl ScanningDictionary {
    /// Creates a scanning dictionary over `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened now.
    pub fn open(path: &Path) -> Result<Self, LookupError> {
        File::open(path).map_err(|source| LookupError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Returns the dictionary path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordList for ScanningDictionary {
    fn contains(&self, word: &str) -> Result<bool, LookupError> {
        let io_err = |source| LookupError::Io {
            path: self.path.clone(),
            source,
        };

        let reader = BufReader::new(File::open(&self.path).map_err(io_err)?);
        for line in reader.split(b'\n') {
            let line = line.map_err(io_err)?;
            if normalize_line(&line) == word.as_bytes() {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
