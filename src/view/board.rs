//! Board snapshot for rendering.

use serde::{Deserialize, Serialize};

use crate::rules::RoundEngine;

/// One word slot on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardRow {
    pub index: usize,

    /// `"+N"` once the word has resolved, else empty.
    pub score_label: String,

    /// Letters and underscores to draw.
    pub text: String,

    /// True for the slot currently being typed into.
    pub active: bool,
}

/// Everything a UI needs to draw the game.
///
/// Built fresh after each state change; holds no reference to the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub rows: Vec<BoardRow>,
    pub current_index: usize,
    pub total_score: u32,
    pub game_over: bool,
}

impl BoardView {
    /// Snapshot the engine's derived values.
    #[must_use]
    pub fn from_engine(engine: &RoundEngine) -> Self {
        let active_index = engine
            .active_word()
            .map(|_| engine.state().current_index());

        let rows = (0..engine.words().len())
            .map(|index| {
                let active = active_index == Some(index);
                let text = if active {
                    engine
                        .active_display()
                        .unwrap_or_else(|| engine.display_for(index))
                } else {
                    engine.display_for(index)
                };
                BoardRow {
                    index,
                    score_label: engine.score_label_for(index),
                    text,
                    active,
                }
            })
            .collect();

        Self {
            rows,
            current_index: engine.state().current_index(),
            total_score: engine.total_score(),
            game_over: engine.is_game_over(),
        }
    }

    /// The row being typed into, if any.
    #[must_use]
    pub fn active_row(&self) -> Option<&BoardRow> {
        self.rows.iter().find(|row| row.active)
    }

    /// Render as plain text: a numbered list with a score column, plus the
    /// final score once the game is over.
    ///
    /// ```
    /// use word_reveal::rules::RoundEngine;
    /// use word_reveal::view::BoardView;
    ///
    /// let engine = RoundEngine::default();
    /// let text = BoardView::from_engine(&engine).render_text();
    /// assert!(text.starts_with("1.       apple\n2.       b____ <\n"));
    /// ```
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out: String = self
            .rows
            .iter()
            .map(|row| {
                let marker = if row.active { " <" } else { "" };
                let number = format!("{}.", row.index + 1);
                format!("{:<3}{:>5} {}{}\n", number, row.score_label, row.text, marker)
            })
            .collect();
        if self.game_over {
            out.push_str(&format!("\nGame Over! Your Total Score: {}\n", self.total_score));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordList;

    #[test]
    fn test_initial_board() {
        let engine = RoundEngine::default();
        let view = BoardView::from_engine(&engine);

        assert_eq!(view.rows.len(), 7);
        assert_eq!(view.current_index, 1);
        assert_eq!(view.total_score, 0);
        assert!(!view.game_over);

        assert_eq!(view.rows[0].text, "apple");
        assert!(!view.rows[0].active);
        assert_eq!(view.rows[1].text, "b____");
        assert!(view.rows[1].active);
        assert_eq!(view.rows[2].text, "_____");
        assert_eq!(view.rows[6].text, "grape");
        assert!(view.rows.iter().all(|row| row.score_label.is_empty()));
        assert_eq!(view.active_row().map(|row| row.index), Some(1));
    }

    #[test]
    fn test_board_after_guess() {
        let mut engine = RoundEngine::default();
        engine.set_input("brick");
        engine.submit_guess();
        engine.set_input("cr");
        let view = BoardView::from_engine(&engine);

        assert_eq!(view.rows[1].text, "brick");
        assert_eq!(view.rows[1].score_label, "+30");
        assert_eq!(view.rows[2].text, "cr___");
        assert!(view.rows[2].active);
        assert_eq!(view.total_score, 30);
    }

    #[test]
    fn test_no_active_row_after_last_word() {
        let mut engine = RoundEngine::with_words(WordList::new(["ox", "cat", "yak"]));
        engine.set_input("cat");
        engine.submit_guess();
        let view = BoardView::from_engine(&engine);

        assert!(view.active_row().is_none());
        assert_eq!(view.rows[2].text, "yak");
        assert_eq!(view.current_index, 2);
    }

    #[test]
    fn test_render_game_over() {
        let mut engine = RoundEngine::with_words(WordList::new(["ox", "cat", "yak"]));
        engine.set_input("cat");
        let timer = engine.submit_guess().timer().unwrap();
        engine.fire(timer.event);

        let text = BoardView::from_engine(&engine).render_text();
        assert_eq!(
            text,
            "1.       ox\n2.   +30 cat\n3.       yak\n\nGame Over! Your Total Score: 30\n"
        );
    }

    #[test]
    fn test_serialization() {
        let view = BoardView::from_engine(&RoundEngine::default());
        let json = serde_json::to_string(&view).unwrap();
        let deserialized: BoardView = serde_json::from_str(&json).unwrap();
        assert_eq!(view, deserialized);
    }

    #[test]
    fn test_render_active_row_with_score_column() {
        let mut engine = RoundEngine::with_words(WordList::new(["ox", "cat", "dog", "yak"]));
        engine.set_input("cat");
        engine.submit_guess();
        engine.set_input("zz");
        engine.submit_guess();

        let text = BoardView::from_engine(&engine).render_text();
        assert_eq!(text, "1.       ox\n2.   +30 cat\n3.       do_ <\n4.       yak\n");
        assert!(!text.contains("Game Over"));
    }
}
