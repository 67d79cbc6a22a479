//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board snapshot.
//! Rules are separated from history bookkeeping so the same board can be
//! evaluated wherever the cursor points.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, evaluate};
