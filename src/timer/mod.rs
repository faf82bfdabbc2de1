//! Delayed events.
//!
//! The rules engine never sleeps or spawns. When something has to happen
//! later (raising the game-over flag after the last word has been on screen
//! for a moment) it returns a `TimerRequest` and leaves the waiting to a
//! `Scheduler` owned by the host:
//!
//! - `ManualScheduler`: clock advanced explicitly, for tests and frame loops
//! - `Vec<TimerRequest>`: records requests without running them
//!
//! Events are tagged with the engine epoch they were issued in, so a timer
//! that outlives a restart is recognized and ignored.

pub mod scheduler;

pub use scheduler::{ManualScheduler, Scheduler, TimerEvent, TimerRequest};
