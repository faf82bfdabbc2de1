//! Round state: everything that changes while a game is played.
//!
//! ## Fields
//!
//! - Active word index, typed input, reveal count, retry count
//! - Game-over flag
//! - Per-index guess and score records
//!
//! ## Snapshots
//!
//! Records are stored in `im` persistent vectors, so cloning a `RoundState`
//! is O(1). Hosts can keep a snapshot per frame without copying the board.
//!
//! Deserialized states are checked against the same invariants `new`
//! establishes; a malformed snapshot is rejected with `RoundStateError`.

use im::Vector;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use super::record::GuessRecord;
use super::words::MIN_WORDS;

/// Reasons a deserialized round state is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RoundStateError {
    #[error("round needs at least {} words, got {word_count}", MIN_WORDS)]
    TooFewWords { word_count: usize },

    #[error("current index {current_index} out of range 1..={max}")]
    IndexOutOfRange { current_index: usize, max: usize },

    #[error("reveal count must be at least 1")]
    ZeroRevealCount,

    #[error("input {input:?} contains characters outside a-z")]
    InvalidInput { input: String },

    #[error("record lengths ({guesses} guesses, {scores} scores) do not match {word_count} words")]
    RecordLength {
        guesses: usize,
        scores: usize,
        word_count: usize,
    },
}

/// Mutable state of a single game.
///
/// Only the rules engine mutates this; everything else reads it.
/// Indices match the word list, sentinels included, so slot `0` and the last
/// slot of each record vector stay `None` for the whole game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundState {
    word_count: usize,

    /// Index of the active word (or `word_count - 1` once all are resolved).
    current_index: usize,

    /// Filtered text typed for the active word.
    input: String,

    /// Leading characters of the active word shown as hints.
    reveal_count: usize,

    /// Failed attempts on the active word.
    tries: u32,

    game_over: bool,

    guesses: Vector<Option<GuessRecord>>,
    scores: Vector<Option<u32>>,
}

impl RoundState {
    /// Create the initial state for a list of `word_count` words.
    ///
    /// ## Defaults
    ///
    /// - `current_index`: 1 (first guessable word)
    /// - `reveal_count`: 1
    /// - `tries`: 0
    /// - no records, not game over
    #[must_use]
    pub fn new(word_count: usize) -> Self {
        assert!(
            word_count >= MIN_WORDS,
            "Round needs at least {} words",
            MIN_WORDS
        );

        Self {
            word_count,
            current_index: 1,
            input: String::new(),
            reveal_count: 1,
            tries: 0,
            game_over: false,
            guesses: std::iter::repeat(None).take(word_count).collect(),
            scores: std::iter::repeat(None).take(word_count).collect(),
        }
    }

    /// Number of words this state tracks.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Index of the active word.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Text typed for the active word.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Number of hint characters shown for the active word.
    #[must_use]
    pub fn reveal_count(&self) -> usize {
        self.reveal_count
    }

    /// Failed attempts on the active word.
    #[must_use]
    pub fn tries(&self) -> u32 {
        self.tries
    }

    /// Whether the game-over flag has been raised.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Whether a guessable word is still active.
    #[must_use]
    pub fn has_active_word(&self) -> bool {
        self.current_index <= self.word_count - 2
    }

    // === Records ===

    /// Latest guess record for an index.
    #[must_use]
    pub fn guess(&self, index: usize) -> Option<&GuessRecord> {
        self.guesses.get(index).and_then(Option::as_ref)
    }

    /// Committed score for an index.
    #[must_use]
    pub fn score(&self, index: usize) -> Option<u32> {
        self.scores.get(index).copied().flatten()
    }

    /// Check if the word at an index has resolved.
    #[must_use]
    pub fn is_resolved(&self, index: usize) -> bool {
        self.score(index).is_some()
    }

    /// Sum of all committed scores.
    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.scores
            .iter()
            .flatten()
            .fold(0u32, |total, &score| total.saturating_add(score))
    }

    // === Mutation (engine only) ===

    pub(crate) fn set_input(&mut self, input: String) {
        self.input = input;
    }

    pub(crate) fn record_guess(&mut self, record: GuessRecord) {
        self.guesses.set(self.current_index, Some(record));
    }

    /// Commit the active word's score. Each index is committed once.
    pub(crate) fn commit_score(&mut self, score: u32) {
        let previous = self.scores.set(self.current_index, Some(score));
        debug_assert!(previous.is_none(), "Score for index {} committed twice", self.current_index);
    }

    /// Move to the next word, resetting per-word counters.
    pub(crate) fn advance(&mut self) {
        debug_assert!(self.has_active_word(), "Cannot advance past the last guessable word");
        self.current_index += 1;
        self.reveal_count = 1;
        self.input.clear();
        self.tries = 0;
    }

    /// Reveal one more letter and count a failed attempt.
    pub(crate) fn retry(&mut self) {
        self.reveal_count += 1;
        self.tries += 1;
        self.input.clear();
    }

    pub(crate) fn set_game_over(&mut self) {
        self.game_over = true;
    }
}

/// Wire shape of `RoundState`, before validation.
#[derive(Deserialize)]
struct RawRoundState {
    word_count: usize,
    current_index: usize,
    input: String,
    reveal_count: usize,
    tries: u32,
    game_over: bool,
    guesses: Vector<Option<GuessRecord>>,
    scores: Vector<Option<u32>>,
}

impl RawRoundState {
    fn validate(self) -> Result<RoundState, RoundStateError> {
        if self.word_count < MIN_WORDS {
            return Err(RoundStateError::TooFewWords {
                word_count: self.word_count,
            });
        }

        let max = self.word_count - 1;
        if self.current_index < 1 || self.current_index > max {
            return Err(RoundStateError::IndexOutOfRange {
                current_index: self.current_index,
                max,
            });
        }

        if self.reveal_count < 1 {
            return Err(RoundStateError::ZeroRevealCount);
        }

        if !self.input.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(RoundStateError::InvalidInput { input: self.input });
        }

        if self.guesses.len() != self.word_count || self.scores.len() != self.word_count {
            return Err(RoundStateError::RecordLength {
                guesses: self.guesses.len(),
                scores: self.scores.len(),
                word_count: self.word_count,
            });
        }

        Ok(RoundState {
            word_count: self.word_count,
            current_index: self.current_index,
            input: self.input,
            reveal_count: self.reveal_count,
            tries: self.tries,
            game_over: self.game_over,
            guesses: self.guesses,
            scores: self.scores,
        })
    }
}

impl<'de> Deserialize<'de> for RoundState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawRoundState::deserialize(deserializer)?
            .validate()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let state = RoundState::new(7);

        assert_eq!(state.word_count(), 7);
        assert_eq!(state.current_index(), 1);
        assert_eq!(state.input(), "");
        assert_eq!(state.reveal_count(), 1);
        assert_eq!(state.tries(), 0);
        assert!(!state.is_game_over());
        assert!(state.has_active_word());
        assert_eq!(state.total_score(), 0);
        for i in 0..7 {
            assert!(state.guess(i).is_none());
            assert!(state.score(i).is_none());
        }
    }

    #[test]
    #[should_panic(expected = "Round needs at least 3 words")]
    fn test_new_too_few_words() {
        RoundState::new(2);
    }

    #[test]
    fn test_retry_then_advance() {
        let mut state = RoundState::new(5);
        state.set_input("abc".to_string());
        state.retry();

        assert_eq!(state.reveal_count(), 2);
        assert_eq!(state.tries(), 1);
        assert_eq!(state.input(), "");

        state.set_input("xyz".to_string());
        state.advance();

        assert_eq!(state.current_index(), 2);
        assert_eq!(state.reveal_count(), 1);
        assert_eq!(state.tries(), 0);
        assert_eq!(state.input(), "");
    }

    #[test]
    fn test_records_and_total() {
        let mut state = RoundState::new(5);

        state.record_guess(GuessRecord::new("brick", true, 0));
        state.commit_score(30);
        state.advance();
        state.record_guess(GuessRecord::new("crane", false, 3));
        state.commit_score(0);
        state.advance();

        assert_eq!(state.guess(1), Some(&GuessRecord::new("brick", true, 0)));
        assert_eq!(state.score(1), Some(30));
        assert_eq!(state.score(2), Some(0));
        assert!(state.is_resolved(2));
        assert!(!state.is_resolved(3));
        assert_eq!(state.total_score(), 30);
    }

    #[test]
    fn test_has_active_word_bounds() {
        let mut state = RoundState::new(3);
        assert!(state.has_active_word());
        state.advance();
        assert_eq!(state.current_index(), 2);
        assert!(!state.has_active_word());
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut state = RoundState::new(5);
        let snapshot = state.clone();

        state.record_guess(GuessRecord::new("brick", true, 0));
        state.commit_score(30);

        assert_eq!(snapshot.score(1), None);
        assert_eq!(state.score(1), Some(30));
    }

    #[test]
    fn test_serialization() {
        let mut state = RoundState::new(4);
        state.record_guess(GuessRecord::new("brick", true, 0));
        state.commit_score(30);
        state.advance();

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: RoundState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    fn state_json(patch: impl FnOnce(&mut serde_json::Value)) -> String {
        let mut value = serde_json::to_value(RoundState::new(4)).unwrap();
        patch(&mut value);
        value.to_string()
    }

    #[test]
    fn test_deserialize_rejects_malformed_state() {
        let cases: Vec<(&str, String)> = vec![
            ("at least 3 words", state_json(|v| v["word_count"] = 1.into())),
            ("out of range", state_json(|v| v["current_index"] = 0.into())),
            ("out of range", state_json(|v| v["current_index"] = 4.into())),
            ("reveal count", state_json(|v| v["reveal_count"] = 0.into())),
            ("outside a-z", state_json(|v| v["input"] = "ABC123".into())),
            ("record lengths", state_json(|v| v["scores"] = serde_json::json!([null, 30]))),
        ];

        for (expected, json) in cases {
            let err = serde_json::from_str::<RoundState>(&json).unwrap_err();
            assert!(
                err.to_string().contains(expected),
                "expected {:?} in {:?}",
                expected,
                err.to_string()
            );
        }
    }

    #[test]
    fn test_deserialize_accepts_finished_state() {
        let mut state = RoundState::new(3);
        state.record_guess(GuessRecord::new("cat", true, 0));
        state.commit_score(30);
        state.advance();
        state.set_game_over();

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: RoundState = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.current_index(), 2);
        assert!(!deserialized.has_active_word());
        assert!(deserialized.is_game_over());
    }

    #[test]
    fn test_total_score_saturates() {
        let mut state = RoundState::new(4);
        state.commit_score(u32::MAX);
        state.advance();
        state.commit_score(u32::MAX);

        assert_eq!(state.total_score(), u32::MAX);
    }
}
