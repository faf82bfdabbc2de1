//! Engine bindings for Python.

use std::time::Duration;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{RoundConfig, ScoringConfig, WordList, DEFAULT_GAME_OVER_DELAY_MS};
use crate::rules::GuessOutcome;
use crate::session::GameSession;
use crate::timer::ManualScheduler;

use super::py_view::PyBoardView;

/// Python wrapper for a game session with a manually driven clock.
///
/// The Python side owns the frame loop: call `tick(ms)` with the time since
/// the last frame so the game-over delay elapses.
#[pyclass(name = "RoundEngine")]
pub struct PyRoundEngine {
    session: GameSession<ManualScheduler>,
}

#[pymethods]
impl PyRoundEngine {
    /// Create a new game.
    ///
    /// # Arguments
    /// - words: Word list including both sentinels (default list if None)
    /// - base_points: Points for a first-attempt correct guess
    /// - retry_penalty: Points lost per failed attempt
    /// - game_over_delay_ms: Pause before the game-over flag is raised
    #[new]
    #[pyo3(signature = (
        words = None,
        base_points = 30,
        retry_penalty = 10,
        game_over_delay_ms = DEFAULT_GAME_OVER_DELAY_MS
    ))]
    fn new(
        words: Option<Vec<String>>,
        base_points: u32,
        retry_penalty: u32,
        game_over_delay_ms: u64,
    ) -> PyResult<Self> {
        let words = match words {
            Some(words) => {
                WordList::try_new(words).map_err(|e| PyValueError::new_err(e.to_string()))?
            }
            None => WordList::default(),
        };
        let config = RoundConfig::new(words)
            .with_scoring(ScoringConfig::new(base_points, retry_penalty))
            .with_game_over_delay(Duration::from_millis(game_over_delay_ms));
        Ok(Self {
            session: GameSession::manual(config),
        })
    }

    /// Set the typed text (filtered to lowercase letters).
    fn set_input(&mut self, raw: &str) {
        self.session.on_text(raw);
    }

    /// Submit the typed text.
    ///
    /// Returns "ignored", "correct", "revealed" or "retry".
    fn submit_guess(&mut self) -> &'static str {
        match self.session.on_confirm() {
            GuessOutcome::Ignored => "ignored",
            GuessOutcome::Correct { .. } => "correct",
            GuessOutcome::Revealed { .. } => "revealed",
            GuessOutcome::Retry { .. } => "retry",
        }
    }

    /// Advance the clock by `ms` milliseconds. Returns true if the game changed.
    fn tick(&mut self, ms: u64) -> bool {
        self.session.tick(Duration::from_millis(ms))
    }

    /// Start a new game.
    fn restart(&mut self) {
        self.session.restart();
    }

    fn display_for(&self, index: usize) -> PyResult<String> {
        self.check_index(index)?;
        Ok(self.session.engine().display_for(index))
    }

    fn active_display(&self) -> Option<String> {
        self.session.engine().active_display()
    }

    fn score_label_for(&self, index: usize) -> PyResult<String> {
        self.check_index(index)?;
        Ok(self.session.engine().score_label_for(index))
    }

    #[getter]
    fn total_score(&self) -> u32 {
        self.session.engine().total_score()
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.session.engine().is_game_over()
    }

    #[getter]
    fn current_index(&self) -> usize {
        self.session.engine().state().current_index()
    }

    #[getter]
    fn word_count(&self) -> usize {
        self.session.engine().words().len()
    }

    /// Snapshot of the board.
    fn view(&self) -> PyBoardView {
        PyBoardView(self.session.view())
    }

    /// Plain-text rendering of the board.
    fn render(&self) -> String {
        self.session.view().render_text()
    }

    fn __repr__(&self) -> String {
        let engine = self.session.engine();
        format!(
            "RoundEngine(index={}, score={}, game_over={})",
            engine.state().current_index(),
            engine.total_score(),
            engine.is_game_over()
        )
    }
}

impl PyRoundEngine {
    fn check_index(&self, index: usize) -> PyResult<()> {
        let len = self.session.engine().words().len();
        if index >= len {
            return Err(PyValueError::new_err(format!(
                "index {} out of range for {} words",
                index, len
            )));
        }
        Ok(())
    }
}
