//! Per-word guess records.

use serde::{Deserialize, Serialize};

/// Outcome of the latest attempt on a word.
///
/// Written on every submission for the active word; the record left in
/// place once the word resolves is its final result.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuessRecord {
    /// The target word (not the typed text).
    pub word: String,

    /// Whether the attempt matched the target.
    pub correct: bool,

    /// Failed attempts before this one.
    pub tries: u32,
}

impl GuessRecord {
    /// Create a new guess record.
    #[must_use]
    pub fn new(word: impl Into<String>, correct: bool, tries: u32) -> Self {
        Self {
            word: word.into(),
            correct,
            tries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_record() {
        let record = GuessRecord::new("brick", true, 2);
        assert_eq!(record.word, "brick");
        assert!(record.correct);
        assert_eq!(record.tries, 2);
    }
}
