//! Core game types: word list, configuration, records, round state, input.
//!
//! These are the building blocks the rules engine operates on. None of them
//! know about timers or rendering.

pub mod words;
pub mod config;
pub mod record;
pub mod state;
pub mod input;

pub use words::{WordList, WordListError, DEFAULT_WORDS, MIN_WORDS};
pub use config::{RoundConfig, ScoringConfig, DEFAULT_GAME_OVER_DELAY_MS};
pub use record::GuessRecord;
pub use state::{RoundState, RoundStateError};
pub use input::accept_input;
