//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::super::{Game, status::turn_for};
use super::Invariant;

/// Invariant: the mark placed by entry `i` belongs to the player whose
/// turn it was at entry `i - 1`.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        game.history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(i, entry)| entry.player() == Some(turn_for(i - 1)))
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
