//! Game rules.
//!
//! `RoundEngine` defines:
//! - How a submitted guess changes the round state
//! - When a word resolves and what it scores
//! - When the game ends
//! - What each word slot displays
//!
//! Hosts drive it through events and never touch `RoundState` directly.

pub mod engine;

pub use engine::{GuessOutcome, Phase, RoundEngine};
