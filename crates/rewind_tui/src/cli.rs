//! Command-line interface for the rewind binary.

use clap::{Parser, Subcommand};
use rewind_tictactoe::Position;
use std::path::PathBuf;

/// Parses a cell given as 0-8 or a label such as `center` or `top-left`.
pub fn parse_position(s: &str) -> Result<Position, String> {
    Position::from_label_or_number(s)
        .ok_or_else(|| format!("'{}' is not a cell (use 0-8 or a label such as top-left)", s))
}

/// Converts parsed cells into the indices the game replays.
pub fn cell_indices(moves: &[Position]) -> Vec<usize> {
    moves.iter().map(|pos| pos.to_index()).collect()
}

/// Tic-tac-toe with a rewindable move history
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to TOML config (ignored if missing)
        #[arg(short, long, default_value = "rewind.toml")]
        config: PathBuf,

        /// List newest moves first
        #[arg(long)]
        descending: bool,

        /// Cells (0-8 or labels) to play before the UI opens
        #[arg(long, value_delimiter = ',', value_parser = parse_position)]
        moves: Vec<Position>,
    },

    /// Print the board, status and move list for a sequence of moves
    Replay {
        /// Cells (0-8 or labels) in play order
        #[arg(long, value_delimiter = ',', required = true, value_parser = parse_position)]
        moves: Vec<Position>,

        /// History entry to display after replaying
        #[arg(long)]
        jump: Option<usize>,

        /// List newest moves first
        #[arg(long)]
        descending: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::try_parse_from(["rewind", "replay", "--moves", "0,4,1", "--jump", "2"])
            .unwrap();
        match cli.command {
            Command::Replay { moves, jump, descending } => {
                assert_eq!(
                    moves,
                    vec![Position::TopLeft, Position::Center, Position::TopCenter]
                );
                assert_eq!(jump, Some(2));
                assert!(!descending);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_play_defaults() {
        let cli = Cli::try_parse_from(["rewind", "play"]).unwrap();
        match cli.command {
            Command::Play { config, descending, moves } => {
                assert_eq!(config, PathBuf::from("rewind.toml"));
                assert!(!descending);
                assert!(moves.is_empty());
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_labels_and_numbers() {
        let cli = Cli::try_parse_from(["rewind", "play", "--moves", "center,Top-Left,8"]).unwrap();
        match cli.command {
            Command::Play { moves, .. } => {
                assert_eq!(cell_indices(&moves), vec![4, 0, 8]);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_cell() {
        assert!(Cli::try_parse_from(["rewind", "replay", "--moves", "0,9"]).is_err());
        assert!(Cli::try_parse_from(["rewind", "replay", "--moves", "middle"]).is_err());
        assert!(parse_position("bottom-center").is_ok());
    }

    #[test]
    fn test_replay_requires_moves() {
        assert!(Cli::try_parse_from(["rewind", "replay"]).is_err());
    }
}
