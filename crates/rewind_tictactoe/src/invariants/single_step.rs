//! Single step invariant: each snapshot fills exactly one empty cell.

use super::super::rules::evaluate;
use super::super::{Cell, Game, Outcome, Position};
use super::Invariant;

/// Invariant: `history[i - 1]` is still in progress, `history[i]` differs
/// from it in exactly one cell, that cell was empty, and the entry's
/// location names it.
pub struct SingleStepInvariant;

impl Invariant<Game> for SingleStepInvariant {
    fn holds(game: &Game) -> bool {
        game.history().windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            if evaluate(before) != Outcome::InProgress {
                return false;
            }
            let changed: Vec<Position> = Position::ALL
                .iter()
                .copied()
                .filter(|pos| before.get(*pos) != after.get(*pos))
                .collect();

            match changed.as_slice() {
                [pos] => {
                    before.get(*pos) == Cell::Empty && pair[1].location() == Some(*pos)
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each history entry fills exactly one empty cell of an unfinished board"
    }
}
