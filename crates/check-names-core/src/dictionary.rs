//! Vocabulary used as the reference for spelling checks.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Errors that can occur while loading a dictionary.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// IO error reading the dictionary file.
    #[error("Failed to read dictionary {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// Ordered list of words.
///
/// Order matters: when several words are equally close to a misspelled
/// token, the earliest one is suggested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Creates an empty dictionary. Spelling checks against it never report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dictionary from words, keeping their order.
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses whitespace-separated words.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        Self::from_words(content.split_whitespace())
    }

    /// Loads a dictionary file of whitespace-separated words.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| DictionaryError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let dictionary = Self::parse(&content);
        debug!(
            "Loaded {} dictionary words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Loads a dictionary file, falling back to an empty dictionary when the
    /// file is missing or unreadable.
    #[must_use]
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            warn!("{e}; spelling checks disabled");
            Self::new()
        })
    }

    /// Returns the words in order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Iterates over the words in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Returns the number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if there are no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
