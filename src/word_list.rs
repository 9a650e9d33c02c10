//! Loading and validating the word list.
//!
//! One word per line, lowercase `a`-`z` only. Surrounding whitespace is
//! trimmed and blank lines are skipped; anything else outside the alphabet
//! rejects the whole list.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Lists shorter than this are rejected.
pub const MIN_WORDS: usize = 10;

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("could not read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: word {word:?} contains {ch:?}; only lowercase a-z is allowed")]
    InvalidCharacter { line: usize, word: String, ch: char },

    #[error("word list has {found} words, at least {min} are required", min = MIN_WORDS)]
    TooFewWords { found: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    pub words: Vec<String>,
}

impl WordList {
    pub fn parse_from_str(contents: &str) -> Result<Self, WordListError> {
        let mut words = Vec::new();
        for (i, raw) in contents.lines().enumerate() {
            let word = raw.trim();
            if word.is_empty() {
                continue;
            }
            if let Some(ch) = word.chars().find(|c| !c.is_ascii_lowercase()) {
                return Err(WordListError::InvalidCharacter {
                    line: i + 1,
                    word: word.to_string(),
                    ch,
                });
            }
            words.push(word.to_string());
        }

        if words.len() < MIN_WORDS {
            return Err(WordListError::TooFewWords { found: words.len() });
        }
        Ok(WordList { words })
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| WordListError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_from_str(&contents)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
