//! Plain-text rendering of a session for non-interactive output.

use rewind_tictactoe::GameSession;
use std::fmt::Write;

/// Board, status and move list as printable text.
///
/// The current entry is marked with `*`; the others are jump targets.
pub fn render_text(session: &GameSession) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", session.board().display());
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", session.status());
    let _ = writeln!(out);
    for entry in session.moves() {
        let marker = if entry.is_current { '*' } else { ' ' };
        let _ = writeln!(out, "{} {:>2}. {}", marker, entry.index, entry.label);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::{Game, SortOrder};

    #[test]
    fn test_render_text() {
        let session = GameSession::with_game(Game::replay(&[4]).unwrap(), SortOrder::Ascending);
        let text = render_text(&session);
        assert_eq!(
            text,
            "1|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9\n\nNext player: O\n\n\
             \u{20}  0. Go to game start\n*  1. You are at move #1\n"
        );
    }
}
