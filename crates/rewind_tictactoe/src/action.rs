//! Errors for rejected game actions.
//!
//! A rejected action never changes the game. Callers that only care about
//! the resulting state can discard these errors.

use super::invariants::InvariantViolation;
use super::{Outcome, Position};

/// Error returned when a cell activation is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a cell (must be 0-8).
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The cell already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The displayed board is already won or drawn.
    #[display("Game is already over: {}", _0)]
    GameOver(Outcome),
}

impl std::error::Error for MoveError {}

/// Error returned when a history selection is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// The index is past the end of the history.
    #[display("Move #{} does not exist (history has {} entries)", index, len)]
    OutOfRange {
        /// Requested history index.
        index: usize,
        /// Current history length.
        len: usize,
    },
}

impl std::error::Error for JumpError {}

/// Error returned when a stored history breaks a history invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryError {
    /// Descriptions of the violated invariants.
    pub violations: Vec<String>,
}

impl HistoryError {
    /// Collects invariant violations into one error.
    pub fn from_violations(violations: Vec<InvariantViolation>) -> Self {
        Self {
            violations: violations.into_iter().map(|v| v.description).collect(),
        }
    }
}

impl std::fmt::Display for HistoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid history: {}", self.violations.join("; "))
    }
}

impl std::error::Error for HistoryError {}
