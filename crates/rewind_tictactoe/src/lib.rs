//! Tic-tac-toe with a rewindable move history.
//!
//! # Architecture
//!
//! - **Board**: cells, positions and the [`Board`] snapshot type
//! - **Rules**: pure evaluation of a snapshot ([`rules::evaluate`])
//! - **Game**: owned history of snapshots plus a cursor ([`Game`])
//! - **Session**: the surface a view layer drives ([`GameSession`])
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Game, Outcome, Player};
//!
//! let mut game = Game::replay(&[0, 4, 1, 5]).unwrap();
//! game.apply_move(2).unwrap();
//! assert_eq!(game.outcome().winner(), Some(Player::X));
//!
//! // Rewind and branch.
//! game.jump_to(2).unwrap();
//! game.apply_move(8).unwrap();
//! assert_eq!(game.len(), 4);
//! assert_eq!(game.outcome(), Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod outcome;
mod position;
mod session;
mod status;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{HistoryError, JumpError, MoveError};
pub use game::{Game, Move};
pub use outcome::{Line, Outcome};
pub use position::Position;
pub use session::{GameSession, MoveEntry, SortOrder};
pub use status::{describe_status, turn_for};
pub use types::{Board, Cell, Player};
