//! Python bindings for the word-reveal engine.
//!
//! Lets a Python UI act as the presentation layer.
//!
//! # Quick Start
//!
//! ```python
//! import word_reveal as wr
//!
//! game = wr.RoundEngine()
//! game.set_input("brick")
//! game.submit_guess()          # "correct"
//! print(game.render())
//!
//! # From the UI loop, pass elapsed milliseconds
//! game.tick(16)
//! if game.game_over:
//!     game.restart()
//! ```

use pyo3::prelude::*;

mod py_engine;
mod py_view;

pub use py_engine::*;
pub use py_view::*;

/// word_reveal: a progressive-reveal word guessing game.
#[pymodule]
fn word_reveal(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyRoundEngine>()?;
    m.add_class::<PyBoardView>()?;
    m.add_class::<PyBoardRow>()?;

    Ok(())
}
