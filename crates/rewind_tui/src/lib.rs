//! Terminal front-end for rewind_tictactoe.
//!
//! The binary wires these modules together; they are exposed as a library
//! so rendering and input handling can be tested without a terminal.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod replay;
pub mod terminal;
pub mod ui;

pub use app::{Action, App, Focus};
pub use config::{ConfigError, TuiConfig};
