//! Evaluated state of a board snapshot.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// Three positions forming a winning line.
pub type Line = [Position; 3];

/// Result of evaluating a board.
///
/// Outcomes are derived from a board on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player holds a complete line.
    Winner {
        /// The winning player.
        player: Player,
        /// First complete line in priority order.
        line: Line,
    },
    /// Board is full with no complete line.
    Draw,
    /// Moves remain and nobody has won.
    InProgress,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<Line> {
        match self {
            Outcome::Winner { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true once no further moves are accepted.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Whether `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line().is_some_and(|line| line.contains(&pos))
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner { player, .. } => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::InProgress => write!(f, "In progress"),
        }
    }
}
