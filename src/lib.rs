//! # word-reveal
//!
//! A progressive-reveal word guessing game engine.
//!
//! A fixed list of words is played one at a time. Each wrong guess reveals
//! one more leading letter; a word resolves when it is guessed or when one
//! more reveal would show it whole. Scores are tallied across words.
//!
//! ## Design Principles
//!
//! 1. **UI-Agnostic**: The engine never renders, sleeps, or reads input
//!    devices. Presentation layers forward events and read derived values.
//!
//! 2. **Synchronous Transitions**: `submit_guess` is a plain state
//!    transition. The one delayed effect (raising game over) is returned as
//!    a `TimerRequest` for the host's `Scheduler` to run.
//!
//! 3. **Cheap Snapshots**: Round state uses `im` persistent vectors, so a
//!    host can clone it every frame.
//!
//! ## Modules
//!
//! - `core`: Word list, configuration, records, round state, input filter
//! - `rules`: `RoundEngine`, guess submission and display accessors
//! - `timer`: Timer requests and schedulers
//! - `session`: Host driver tying engine, scheduler and UI events together
//! - `view`: Serializable board snapshots and text rendering

pub mod core;
pub mod rules;
pub mod timer;
pub mod session;
pub mod view;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    accept_input, GuessRecord, RoundConfig, RoundState, RoundStateError, ScoringConfig, WordList,
    WordListError,
};

pub use crate::rules::{GuessOutcome, Phase, RoundEngine};

pub use crate::timer::{ManualScheduler, Scheduler, TimerEvent, TimerRequest};

pub use crate::session::GameSession;

pub use crate::view::{BoardRow, BoardView};
