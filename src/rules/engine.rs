//! The round engine: guess submission and derived display values.
//!
//! `RoundEngine` owns the word list, the configuration and the
//! `RoundState`. The host calls:
//! - `set_input` when the typed text changes
//! - `submit_guess` when the player confirms
//! - `fire` when a requested timer elapses
//! - `restart` to play again
//!
//! and reads the accessors after every change.

use tracing::{debug, info, warn};

use crate::core::{accept_input, GuessRecord, RoundConfig, RoundState, WordList};
use crate::timer::{TimerEvent, TimerRequest};

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// The word at `index` is active.
    Playing { index: usize },
    /// The last word has resolved; the game-over timer is pending.
    Finishing,
    /// The game-over flag is raised.
    GameOver,
}

/// Result of a `submit_guess` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// No word was active; nothing changed.
    Ignored,

    /// The guess matched; `score` was committed and play advanced.
    Correct {
        index: usize,
        score: u32,
        game_over: Option<TimerRequest>,
    },

    /// The guess missed and the reveal ran out; 0 was committed and play
    /// advanced.
    Revealed {
        index: usize,
        game_over: Option<TimerRequest>,
    },

    /// The guess missed; one more letter is shown and the word stays active.
    Retry {
        index: usize,
        reveal_count: usize,
        tries: u32,
    },
}

impl GuessOutcome {
    /// Check if the submitted word resolved and play advanced.
    #[must_use]
    pub fn advanced(&self) -> bool {
        matches!(self, GuessOutcome::Correct { .. } | GuessOutcome::Revealed { .. })
    }

    /// Score committed by this submission, if the word resolved.
    #[must_use]
    pub fn committed_score(&self) -> Option<u32> {
        match self {
            GuessOutcome::Correct { score, .. } => Some(*score),
            GuessOutcome::Revealed { .. } => Some(0),
            GuessOutcome::Ignored | GuessOutcome::Retry { .. } => None,
        }
    }

    /// Game-over timer the host must schedule, if any.
    #[must_use]
    pub fn timer(&self) -> Option<TimerRequest> {
        match self {
            GuessOutcome::Correct { game_over, .. } | GuessOutcome::Revealed { game_over, .. } => {
                *game_over
            }
            GuessOutcome::Ignored | GuessOutcome::Retry { .. } => None,
        }
    }
}

/// Owns all game state and applies guesses to it.
///
/// ## Example
///
/// ```
/// use word_reveal::rules::{GuessOutcome, RoundEngine};
///
/// let mut engine = RoundEngine::default();
/// engine.set_input("BRICK");
/// let outcome = engine.submit_guess();
///
/// assert_eq!(outcome.committed_score(), Some(30));
/// assert_eq!(engine.state().current_index(), 2);
/// assert_eq!(engine.score_label_for(1), "+30");
/// assert_eq!(engine.active_display().as_deref(), Some("c____"));
/// ```
#[derive(Clone, Debug)]
pub struct RoundEngine {
    config: RoundConfig,
    state: RoundState,
    /// Bumped on restart so timers from an earlier game are ignored.
    epoch: u64,
}

impl RoundEngine {
    /// Create an engine at the start of a game.
    #[must_use]
    pub fn new(config: RoundConfig) -> Self {
        let state = RoundState::new(config.words.len());
        Self {
            config,
            state,
            epoch: 0,
        }
    }

    /// Create an engine for a word list with default scoring and delay.
    #[must_use]
    pub fn with_words(words: WordList) -> Self {
        Self::new(RoundConfig::new(words))
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Get the word list.
    #[must_use]
    pub fn words(&self) -> &WordList {
        &self.config.words
    }

    /// Get the current state.
    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Restart counter; identifies the current game.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Get the lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.state.is_game_over() {
            Phase::GameOver
        } else if self.state.has_active_word() {
            Phase::Playing {
                index: self.state.current_index(),
            }
        } else {
            Phase::Finishing
        }
    }

    /// Whether the game-over flag is raised.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// The active target word, if any.
    #[must_use]
    pub fn active_word(&self) -> Option<&str> {
        if self.state.has_active_word() {
            Some(self.config.words.word(self.state.current_index()))
        } else {
            None
        }
    }

    // === Events ===

    /// Replace the typed text, filtered for the active word.
    ///
    /// Ignored when no word is active.
    pub fn set_input(&mut self, raw: &str) {
        let Some(target) = self.active_word() else {
            return;
        };
        let input = accept_input(raw, target.len());
        debug!(index = self.state.current_index(), input = %input, "input changed");
        self.state.set_input(input);
    }

    /// Submit the typed text as a guess for the active word.
    ///
    /// Returns `GuessOutcome::Ignored` once every word has resolved. When
    /// the last guessable word resolves, the outcome carries the game-over
    /// timer the host must schedule.
    pub fn submit_guess(&mut self) -> GuessOutcome {
        if !self.state.has_active_word() {
            debug!("guess ignored: no active word");
            return GuessOutcome::Ignored;
        }

        // Checked before advancing: resolving this index ends the game.
        let index = self.state.current_index();
        let is_last = index == self.config.words.last_guessable_index();

        let target = self.config.words.word(index).to_string();
        let is_correct = self.state.input().to_lowercase() == target;
        let tries = self.state.tries();
        let score = if is_correct {
            self.config.scoring.points_for(tries)
        } else {
            0
        };

        debug!(index, input = %self.state.input(), is_correct, tries, "guess submitted");

        self.state
            .record_guess(GuessRecord::new(target.as_str(), is_correct, tries));

        if is_correct {
            self.state.commit_score(score);
            self.state.advance();
            info!(index, score, "word guessed");
            GuessOutcome::Correct {
                index,
                score,
                game_over: self.game_over_timer(is_last),
            }
        } else if self.state.reveal_count() + 1 >= target.len() {
            self.state.commit_score(0);
            self.state.advance();
            info!(index, word = %target, "word revealed");
            GuessOutcome::Revealed {
                index,
                game_over: self.game_over_timer(is_last),
            }
        } else {
            self.state.retry();
            GuessOutcome::Retry {
                index,
                reveal_count: self.state.reveal_count(),
                tries: self.state.tries(),
            }
        }
    }

    fn game_over_timer(&self, is_last: bool) -> Option<TimerRequest> {
        is_last.then(|| {
            info!(
                total_score = self.state.total_score(),
                delay_ms = self.config.game_over_delay_ms,
                "last word resolved, scheduling game over"
            );
            TimerRequest::new(
                self.config.game_over_delay(),
                TimerEvent::GameOver { epoch: self.epoch },
            )
        })
    }

    /// Apply a timer event delivered by the scheduler.
    ///
    /// Returns true if the event changed state. Events issued before the
    /// last restart are ignored.
    pub fn fire(&mut self, event: TimerEvent) -> bool {
        match event {
            TimerEvent::GameOver { epoch } => {
                if epoch != self.epoch {
                    warn!(epoch, current = self.epoch, "ignoring game-over timer from a previous game");
                    return false;
                }
                if self.state.is_game_over() {
                    return false;
                }
                self.state.set_game_over();
                info!(total_score = self.state.total_score(), "game over");
                true
            }
        }
    }

    /// Discard all state and start a new game with the same configuration.
    pub fn restart(&mut self) {
        self.state = RoundState::new(self.config.words.len());
        self.epoch = self.epoch.wrapping_add(1);
        info!(epoch = self.epoch, "game restarted");
    }

    // === Derived values ===

    /// Text shown for the word at `index` when it is not being typed into.
    ///
    /// Sentinels and resolved words show in full; everything else is an
    /// underscore placeholder of the target's length.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the word list.
    #[must_use]
    pub fn display_for(&self, index: usize) -> String {
        let word = self.config.words.word(index);
        if self.config.words.is_sentinel(index) {
            return word.to_string();
        }

        let guess = self.state.guess(index);
        match guess {
            Some(record) if record.correct => record.word.clone(),
            Some(record) if index < self.state.current_index() => record.word.clone(),
            _ => placeholder(word.len()),
        }
    }

    /// Text shown for the active word: hints, then typed letters, then
    /// underscores. `None` once no word is active.
    #[must_use]
    pub fn active_display(&self) -> Option<String> {
        let target = self.active_word()?;
        let reveal = self.state.reveal_count();
        let typed = self.state.input().as_bytes();

        let display = target
            .bytes()
            .enumerate()
            .map(|(i, ch)| {
                if i < reveal {
                    ch as char
                } else if let Some(&typed_ch) = typed.get(i) {
                    typed_ch as char
                } else {
                    '_'
                }
            })
            .collect();
        Some(display)
    }

    /// Score column text for `index`: `"+N"` once resolved, else empty.
    #[must_use]
    pub fn score_label_for(&self, index: usize) -> String {
        if self.config.words.is_sentinel(index) {
            return String::new();
        }
        match self.state.score(index) {
            Some(score) => format!("+{}", score),
            None => String::new(),
        }
    }

    /// Sum of all committed scores.
    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.state.total_score()
    }
}

impl Default for RoundEngine {
    fn default() -> Self {
        Self::new(RoundConfig::default())
    }
}

fn placeholder(len: usize) -> String {
    "_".repeat(len)
}
