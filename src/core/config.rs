//! Round configuration.
//!
//! Hosts configure a round at startup by providing:
//! - `WordList`: the words to play, sentinels included
//! - `ScoringConfig`: points for a correct guess and the per-retry penalty
//! - A game-over delay so the last revealed word stays visible
//!
//! Everything has a default matching the stock game, so
//! `RoundConfig::default()` is a complete configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::words::WordList;

/// Default pause between resolving the last word and ending the game.
pub const DEFAULT_GAME_OVER_DELAY_MS: u64 = 500;

/// Points awarded for a correct guess.
///
/// A correct guess after `tries` failed attempts scores
/// `max(0, base_points - tries * retry_penalty)`.
///
/// ```
/// use word_reveal::core::ScoringConfig;
///
/// let scoring = ScoringConfig::default();
/// assert_eq!(scoring.points_for(0), 30);
/// assert_eq!(scoring.points_for(2), 10);
/// assert_eq!(scoring.points_for(5), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Points for a first-attempt correct guess.
    pub base_points: u32,

    /// Points lost per failed attempt before the correct one.
    pub retry_penalty: u32,
}

impl ScoringConfig {
    /// Create a scoring configuration.
    #[must_use]
    pub const fn new(base_points: u32, retry_penalty: u32) -> Self {
        Self {
            base_points,
            retry_penalty,
        }
    }

    /// Points for a correct guess after `tries` failed attempts.
    #[must_use]
    pub fn points_for(&self, tries: u32) -> u32 {
        self.base_points
            .saturating_sub(tries.saturating_mul(self.retry_penalty))
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::new(30, 10)
    }
}

/// Complete round configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Words to play, sentinels included.
    pub words: WordList,

    /// Scoring rules.
    pub scoring: ScoringConfig,

    /// Delay before the game-over flag is raised, in milliseconds.
    pub game_over_delay_ms: u64,
}

impl RoundConfig {
    /// Create a configuration with the default scoring and delay.
    pub fn new(words: WordList) -> Self {
        Self {
            words,
            ..Self::default()
        }
    }

    /// Set the word list.
    #[must_use]
    pub fn with_words(mut self, words: WordList) -> Self {
        self.words = words;
        self
    }

    /// Set the scoring rules.
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self
    }

    /// Set the game-over delay.
    #[must_use]
    pub fn with_game_over_delay(mut self, delay: Duration) -> Self {
        self.game_over_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Get the game-over delay.
    #[must_use]
    pub fn game_over_delay(&self) -> Duration {
        Duration::from_millis(self.game_over_delay_ms)
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            words: WordList::default(),
            scoring: ScoringConfig::default(),
            game_over_delay_ms: DEFAULT_GAME_OVER_DELAY_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_default() {
        let scoring = ScoringConfig::default();
        assert_eq!(scoring.points_for(0), 30);
        assert_eq!(scoring.points_for(1), 20);
        assert_eq!(scoring.points_for(2), 10);
        assert_eq!(scoring.points_for(3), 0);
        assert_eq!(scoring.points_for(100), 0);
    }

    #[test]
    fn test_scoring_no_overflow() {
        let scoring = ScoringConfig::new(30, u32::MAX);
        assert_eq!(scoring.points_for(u32::MAX), 0);
    }

    #[test]
    fn test_round_config_default() {
        let config = RoundConfig::default();
        assert_eq!(config.words.len(), 7);
        assert_eq!(config.scoring, ScoringConfig::default());
        assert_eq!(config.game_over_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_round_config_builder() {
        let config = RoundConfig::default()
            .with_words(WordList::new(["ox", "cat", "dog", "yak"]))
            .with_scoring(ScoringConfig::new(50, 5))
            .with_game_over_delay(Duration::from_secs(2));

        assert_eq!(config.words.last_guessable_index(), 2);
        assert_eq!(config.scoring.points_for(1), 45);
        assert_eq!(config.game_over_delay_ms, 2000);
    }

    #[test]
    fn test_round_config_partial_json() {
        let config: RoundConfig =
            serde_json::from_str(r#"{"words": ["ox", "cat", "yak"]}"#).unwrap();

        assert_eq!(config.words.word(1), "cat");
        assert_eq!(config.scoring, ScoringConfig::default());
        assert_eq!(config.game_over_delay_ms, DEFAULT_GAME_OVER_DELAY_MS);
    }

    #[test]
    fn test_round_config_rejects_bad_words() {
        let result: Result<RoundConfig, _> = serde_json::from_str(r#"{"words": ["ox", "cat"]}"#);
        assert!(result.is_err());
    }
}
