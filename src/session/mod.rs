//! Host-side game driver.
//!
//! `GameSession` sits at the rendering boundary: the UI forwards text-change
//! and confirm events into it, reads a `BoardView` back after every change,
//! and (for `ManualScheduler` sessions) calls `tick` from its frame loop.

mod host;

pub use host::GameSession;
