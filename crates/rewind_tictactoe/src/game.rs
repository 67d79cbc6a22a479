//! Game state machine with move history and time travel.
//!
//! The game owns every board snapshot reached along the chosen line of
//! play plus a cursor selecting the displayed one. Applying a move from a
//! rewound position discards the snapshots after the cursor.

use super::action::{HistoryError, JumpError, MoveError};
use super::invariants::{HistoryInvariants, InvariantSet, assert_invariants};
use super::rules::evaluate;
use super::status::turn_for;
use super::{Board, Outcome, Player, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// One entry in the history: a board snapshot and the cell just filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Move {
    board: Board,
    location: Option<Position>,
}

impl Move {
    /// The starting entry: empty board, no location.
    pub fn start() -> Self {
        Self::new(Board::new(), None)
    }

    /// Board after this move.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell filled by this move, `None` for the starting entry.
    pub fn location(&self) -> Option<Position> {
        self.location
    }

    /// `(row, col)` of the filled cell.
    pub fn coordinates(&self) -> Option<(usize, usize)> {
        self.location.map(Position::coordinates)
    }

    /// Mark placed by this move.
    pub fn player(&self) -> Option<Player> {
        self.location.and_then(|pos| self.board.get(pos).mark())
    }
}

/// Tic-tac-toe game with rewindable history.
///
/// Deserialization checks the history invariants, so a stored game can
/// never hold an empty history or a dangling cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameRecord")]
pub struct Game {
    pub(crate) history: Vec<Move>,
    pub(crate) current: usize,
}

/// Unchecked serialized form of [`Game`].
#[derive(Deserialize)]
struct GameRecord {
    history: Vec<Move>,
    current: usize,
}

impl TryFrom<GameRecord> for Game {
    type Error = HistoryError;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        let game = Self {
            history: record.history,
            current: record.current,
        };
        HistoryInvariants::check_all(&game).map_err(HistoryError::from_violations)?;
        Ok(game)
    }
}

impl Game {
    /// Creates a new game holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Move::start()],
            current: 0,
        }
    }

    /// Builds a game by applying cell indices in order.
    ///
    /// # Errors
    ///
    /// Returns the first rejected move.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &cell in cells {
            game.apply_move(cell)?;
        }
        Ok(game)
    }

    /// Marks `cell` for the player whose turn it is at the cursor.
    ///
    /// Any history after the cursor is discarded before the new snapshot
    /// is appended, and the cursor advances to it. On error nothing changes.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if `cell` is not 0-8.
    /// - [`MoveError::GameOver`] if the displayed board is won or drawn.
    /// - [`MoveError::SquareOccupied`] if the cell holds a mark.
    #[instrument(skip(self), fields(current = self.current, len = self.history.len()))]
    pub fn apply_move(&mut self, cell: usize) -> Result<Position, MoveError> {
        let pos = Position::from_index(cell).ok_or(MoveError::OutOfBounds(cell))?;
        let board = *self.current_board();

        let outcome = evaluate(&board);
        if outcome.is_over() {
            return Err(MoveError::GameOver(outcome));
        }
        if !board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.current_turn();
        let discarded = self.history.len() - (self.current + 1);
        self.history.truncate(self.current + 1);
        self.history.push(Move::new(board.with_mark(pos, player), Some(pos)));
        self.current = self.history.len() - 1;

        info!(%player, position = %pos, discarded, move_number = self.current, "Move applied");
        assert_invariants(self);
        Ok(pos)
    }

    /// Moves the cursor to history entry `index`.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::OutOfRange`] past the end of the history.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), JumpError> {
        let len = self.history.len();
        if index >= len {
            return Err(JumpError::OutOfRange { index, len });
        }
        if index == self.current {
            debug!("Already at requested move");
            return Ok(());
        }
        self.current = index;
        debug!(index, "Jumped to move");
        Ok(())
    }

    /// Board at the cursor.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current].board
    }

    /// Player to move at the cursor.
    pub fn current_turn(&self) -> Player {
        turn_for(self.current)
    }

    /// Cursor into the history.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Every snapshot along the chosen line of play.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of history entries (always at least one).
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false; a game holds at least the starting board.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Evaluates the board at the cursor.
    pub fn outcome(&self) -> Outcome {
        evaluate(self.current_board())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
