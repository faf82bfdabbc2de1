//! The fixed word list a round is played over.
//!
//! ## Layout
//!
//! - Index `0`: opening sentinel, always shown in full
//! - `1..=len-2`: guessable words, played in order
//! - Index `len-1`: closing sentinel, always shown in full
//!
//! Sentinels are never guessed and never scored, so a playable list needs
//! at least three entries.
//!
//! ```
//! use word_reveal::core::WordList;
//!
//! let words = WordList::new(["apple", "brick", "crane"]);
//! assert!(words.is_sentinel(0));
//! assert!(!words.is_sentinel(1));
//! assert!(words.is_sentinel(2));
//! assert_eq!(words.last_guessable_index(), 1);
//! ```

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Words used when no list is configured.
pub const DEFAULT_WORDS: [&str; 7] = ["apple", "brick", "crane", "delta", "eagle", "flint", "grape"];

/// Minimum list length: two sentinels plus one guessable word.
pub const MIN_WORDS: usize = 3;

/// Reasons a word list is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WordListError {
    #[error("word list needs at least {} entries, got {len}", MIN_WORDS)]
    TooShort { len: usize },

    #[error("word at index {index} is empty")]
    EmptyWord { index: usize },

    #[error("word {word:?} at index {index} contains characters outside a-z")]
    InvalidWord { index: usize, word: String },
}

/// Ordered, validated list of lowercase ASCII words.
///
/// Construct with [`WordList::new`] for lists known at compile time (panics on
/// a malformed list), or [`WordList::try_new`] for lists supplied by a host.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Create a word list, panicking if it is malformed.
    ///
    /// A malformed list is a programming error; use [`WordList::try_new`]
    /// for untrusted input.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        assert!(
            words.len() >= MIN_WORDS,
            "Word list must have at least {} entries",
            MIN_WORDS
        );
        match Self::validate(words) {
            Ok(list) => list,
            Err(e) => panic!("Invalid word list: {}", e),
        }
    }

    /// Create a word list, returning an error if it is malformed.
    pub fn try_new<I, S>(words: I) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::validate(words.into_iter().map(Into::into).collect())
    }

    fn validate(words: Vec<String>) -> Result<Self, WordListError> {
        if words.len() < MIN_WORDS {
            return Err(WordListError::TooShort { len: words.len() });
        }

        for (index, word) in words.iter().enumerate() {
            if word.is_empty() {
                return Err(WordListError::EmptyWord { index });
            }
            if !word.bytes().all(|b| b.is_ascii_lowercase()) {
                return Err(WordListError::InvalidWord {
                    index,
                    word: word.clone(),
                });
            }
        }

        Ok(Self { words })
    }

    /// Number of words, sentinels included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: a valid list has at least [`MIN_WORDS`] entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Get a word by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Get a word by index, panicking if out of range.
    #[must_use]
    pub fn word(&self, index: usize) -> &str {
        &self.words[index]
    }

    /// Index of the closing sentinel.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.words.len() - 1
    }

    /// Index of the final word the player guesses.
    #[must_use]
    pub fn last_guessable_index(&self) -> usize {
        self.words.len() - 2
    }

    /// Indices of all guessable words.
    pub fn guessable_indices(&self) -> RangeInclusive<usize> {
        1..=self.last_guessable_index()
    }

    /// Check if an index is the opening or closing sentinel.
    #[must_use]
    pub fn is_sentinel(&self, index: usize) -> bool {
        index == 0 || index == self.last_index()
    }

    /// Iterate over all words in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS)
    }
}

impl TryFrom<Vec<String>> for WordList {
    type Error = WordListError;

    fn try_from(words: Vec<String>) -> Result<Self, Self::Error> {
        Self::validate(words)
    }
}

impl From<WordList> for Vec<String> {
    fn from(list: WordList) -> Self {
        list.words
    }
}
