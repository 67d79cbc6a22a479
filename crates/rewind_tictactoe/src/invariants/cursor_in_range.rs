//! Cursor invariant: the cursor selects an existing snapshot.

use super::super::{Game, Move};
use super::Invariant;

/// Invariant: the history starts at the empty board and the cursor
/// points inside it.
pub struct CursorInRangeInvariant;

impl Invariant<Game> for CursorInRangeInvariant {
    fn holds(game: &Game) -> bool {
        game.history().first() == Some(&Move::start()) && game.current_index() < game.len()
    }

    fn description() -> &'static str {
        "History starts empty and the cursor is within it"
    }
}
