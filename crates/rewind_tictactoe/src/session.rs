//! Interaction surface for a view layer.
//!
//! A view forwards cell activations, history selections and sort toggles
//! here and re-renders from the read-only accessors. Rejected input is
//! logged and otherwise ignored, so the view never has to handle errors.

use super::status::describe_status;
use super::{Board, Game, Move, Outcome, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Display order of the move list. Has no effect on the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label of the control that switches to the other order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Ascending => "Sort Descending",
            Self::Descending => "Sort Ascending",
        }
    }
}

/// One row of the rendered move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct MoveEntry {
    /// History index this row jumps to.
    pub index: usize,
    /// Whether this row is the displayed move (rendered as plain text).
    pub is_current: bool,
    /// Precomputed label.
    pub label: String,
}

impl MoveEntry {
    /// Builds the row for history entry `index`.
    pub fn describe(index: usize, entry: &Move, current: usize) -> Self {
        let label = if index == current {
            format!("You are at move #{}", index)
        } else if let Some((row, col)) = entry.coordinates() {
            format!("Go to move #{} ({}, {})", index, row, col)
        } else {
            "Go to game start".to_string()
        };
        Self::new(index, index == current, label)
    }
}

/// A game plus the view-only sort flag.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameSession {
    game: Game,
    sort_order: SortOrder,
}

impl GameSession {
    /// Creates a session for a new game.
    #[instrument]
    pub fn new(sort_order: SortOrder) -> Self {
        Self::with_game(Game::new(), sort_order)
    }

    /// Wraps an existing game.
    pub fn with_game(game: Game, sort_order: SortOrder) -> Self {
        Self { game, sort_order }
    }

    /// Cell activated in the view.
    #[instrument(skip(self))]
    pub fn on_cell_activate(&mut self, cell: usize) {
        if let Err(e) = self.game.apply_move(cell) {
            debug!(error = %e, "Ignoring cell activation");
        }
    }

    /// History row selected in the view.
    #[instrument(skip(self))]
    pub fn on_history_select(&mut self, index: usize) {
        if let Err(e) = self.game.jump_to(index) {
            debug!(error = %e, "Ignoring history selection");
        }
    }

    /// Sort control activated in the view.
    #[instrument(skip(self))]
    pub fn on_toggle_sort(&mut self) {
        self.sort_order = self.sort_order.toggle();
        debug!(sort_order = ?self.sort_order, "Sort order toggled");
    }

    /// The underlying game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Current sort order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Board at the cursor.
    pub fn board(&self) -> &Board {
        self.game.current_board()
    }

    /// Status line for the displayed board.
    pub fn status(&self) -> String {
        describe_status(self.game.current_board(), self.game.current_index())
    }

    /// Outcome of the displayed board.
    pub fn outcome(&self) -> Outcome {
        self.game.outcome()
    }

    /// Whether `pos` belongs to the winning line on the displayed board.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.outcome().contains(pos)
    }

    /// Move list in the current sort order.
    pub fn moves(&self) -> Vec<MoveEntry> {
        let current = self.game.current_index();
        let entries = self
            .game
            .history()
            .iter()
            .enumerate()
            .map(|(i, entry)| MoveEntry::describe(i, entry, current));

        match self.sort_order {
            SortOrder::Ascending => entries.collect(),
            SortOrder::Descending => entries.rev().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let mut session = GameSession::with_game(
            Game::replay(&[4, 0]).unwrap(),
            SortOrder::Ascending,
        );
        session.on_history_select(1);

        let labels: Vec<String> = session.moves().into_iter().map(|m| m.label).collect();
        assert_eq!(
            labels,
            vec![
                "Go to game start".to_string(),
                "You are at move #1".to_string(),
                "Go to move #2 (0, 0)".to_string(),
            ]
        );
    }

    #[test]
    fn test_start_label_when_current() {
        let session = GameSession::new(SortOrder::Ascending);
        let moves = session.moves();
        assert_eq!(moves.len(), 1);
        assert!(moves[0].is_current);
        assert_eq!(moves[0].label, "You are at move #0");
    }

    #[test]
    fn test_invalid_input_ignored() {
        let mut session = GameSession::with_game(Game::replay(&[4]).unwrap(), SortOrder::Ascending);
        let before = session.clone();

        session.on_cell_activate(4);
        session.on_cell_activate(42);
        session.on_history_select(7);

        assert_eq!(session, before);
    }

    #[test]
    fn test_deserialize_rejects_invalid_game() {
        let json = r#"{"game":{"history":[],"current":3},"sort_order":"descending"}"#;
        assert!(serde_json::from_str::<GameSession>(json).is_err());

        let session = GameSession::with_game(Game::replay(&[0, 4]).unwrap(), SortOrder::Descending);
        let restored: GameSession =
            serde_json::from_str(&serde_json::to_string(&session).unwrap()).unwrap();
        assert_eq!(restored.status(), "Next player: X");
        assert_eq!(restored.moves()[0].label, "You are at move #2");
    }

    #[test]
    fn test_toggle_label() {
        assert_eq!(SortOrder::Ascending.toggle_label(), "Sort Descending");
        assert_eq!(SortOrder::Descending.toggle_label(), "Sort Ascending");
        assert_eq!(SortOrder::Ascending.toggle().toggle(), SortOrder::Ascending);
    }
}
