//! Read-only board snapshots for presentation layers.

pub mod board;

pub use board::{BoardRow, BoardView};
