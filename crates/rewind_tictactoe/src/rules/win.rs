//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Line, Outcome, Player, Position};
use super::draw::is_full;
use tracing::instrument;

/// The eight winning lines in priority order: rows top to bottom, columns
/// left to right, then the two diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the player and the first complete line in [`LINES`] order.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<(Player, Line)> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        match board.get(a) {
            Cell::Occupied(player) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some((player, line))
            }
            _ => None,
        }
    })
}

/// Evaluates a board snapshot.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, line)) = check_winner(board) {
        Outcome::Winner { player, line }
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Player)]) -> Board {
        marks
            .iter()
            .fold(Board::new(), |b, (pos, player)| b.with_mark(*pos, *player))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(
            evaluate(&board),
            Outcome::Winner {
                player: Player::X,
                line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
            }
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Player::O),
            (Position::Center, Player::O),
            (Position::BottomLeft, Player::O),
        ]);
        let outcome = evaluate(&board);
        assert_eq!(outcome.winner(), Some(Player::O));
        assert_eq!(
            outcome.line(),
            Some([Position::TopRight, Position::Center, Position::BottomLeft])
        );
    }

    #[test]
    fn test_row_beats_column_when_both_complete() {
        // X X X / X . . / X . .
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::X),
            (Position::BottomLeft, Player::X),
        ]);
        assert_eq!(evaluate(&board).line(), Some(LINES[0]));
    }

    #[test]
    fn test_first_line_wins_across_players() {
        // Middle row O, bottom row X: the middle row comes first.
        let board = board_with(&[
            (Position::MiddleLeft, Player::O),
            (Position::Center, Player::O),
            (Position::MiddleRight, Player::O),
            (Position::BottomLeft, Player::X),
            (Position::BottomCenter, Player::X),
            (Position::BottomRight, Player::X),
        ]);
        assert_eq!(evaluate(&board).winner(), Some(Player::O));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }
}
