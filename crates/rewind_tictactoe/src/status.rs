//! Turn and status derivation.

use super::rules::evaluate;
use super::{Board, Outcome, Player};
use tracing::instrument;

/// The mark to be placed at history index `index`: X on even, O on odd.
pub fn turn_for(index: usize) -> Player {
    if index % 2 == 0 { Player::X } else { Player::O }
}

/// Status line shown above the board.
#[instrument(level = "trace")]
pub fn describe_status(board: &Board, current_index: usize) -> String {
    match evaluate(board) {
        Outcome::Winner { player, .. } => format!("Winner: {}", player),
        Outcome::Draw => "It's a draw!".to_string(),
        Outcome::InProgress => format!("Next player: {}", turn_for(current_index)),
    }
}
