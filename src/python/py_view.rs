//! Board view bindings for Python.

use pyo3::prelude::*;

use crate::view::{BoardRow, BoardView};

/// Python wrapper for a board row.
#[pyclass(name = "BoardRow")]
#[derive(Clone, Debug)]
pub struct PyBoardRow(pub BoardRow);

#[pymethods]
impl PyBoardRow {
    #[getter]
    fn index(&self) -> usize {
        self.0.index
    }

    #[getter]
    fn score_label(&self) -> String {
        self.0.score_label.clone()
    }

    #[getter]
    fn text(&self) -> String {
        self.0.text.clone()
    }

    #[getter]
    fn active(&self) -> bool {
        self.0.active
    }

    fn __repr__(&self) -> String {
        format!("BoardRow({}, {:?}, {:?})", self.0.index, self.0.text, self.0.score_label)
    }
}

/// Python wrapper for a board snapshot.
#[pyclass(name = "BoardView")]
#[derive(Clone, Debug)]
pub struct PyBoardView(pub BoardView);

#[pymethods]
impl PyBoardView {
    #[getter]
    fn rows(&self) -> Vec<PyBoardRow> {
        self.0.rows.iter().cloned().map(PyBoardRow).collect()
    }

    #[getter]
    fn current_index(&self) -> usize {
        self.0.current_index
    }

    #[getter]
    fn total_score(&self) -> u32 {
        self.0.total_score
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.0.game_over
    }

    fn render(&self) -> String {
        self.0.render_text()
    }

    fn __repr__(&self) -> String {
        format!(
            "BoardView(rows={}, total_score={}, game_over={})",
            self.0.rows.len(),
            self.0.total_score,
            self.0.game_over
        )
    }
}
