//! Rendering tests against an in-memory terminal.

use ratatui::{Terminal, backend::TestBackend};
use rewind_tictactoe::{Game, GameSession, Position, SortOrder};
use rewind_tui::input::Direction;
use rewind_tui::{Action, App, ui};

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|frame| ui::draw(frame, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_new_game_screen() {
    let app = App::new(GameSession::new(SortOrder::Ascending));
    let screen = render(&app);

    assert!(screen.contains("Next player: X"));
    assert!(screen.contains("You are at move #0"));
    assert!(screen.contains("Sort Descending"));
}

#[test]
fn test_winning_game_screen() {
    let game = Game::replay(&[0, 4, 1, 5, 2]).unwrap();
    let app = App::new(GameSession::with_game(game, SortOrder::Ascending));
    let screen = render(&app);

    assert!(screen.contains("Winner: X"));
    assert!(screen.contains("Go to game start"));
    assert!(screen.contains("Go to move #1 (0, 0)"));
    assert!(screen.contains("You are at move #5"));
}

#[test]
fn test_rewind_through_history_pane() {
    let game = Game::replay(&[0, 4, 1, 5, 2]).unwrap();
    let mut app = App::new(GameSession::with_game(game, SortOrder::Ascending));

    app.handle(Action::ToggleFocus);
    app.handle(Action::Move(Direction::Up));
    app.handle(Action::Activate);
    let screen = render(&app);

    assert!(screen.contains("Next player: X"));
    assert!(screen.contains("You are at move #4"));
    assert!(screen.contains("Go to move #5 (0, 2)"));

    app.handle(Action::ToggleFocus);
    app.handle(Action::Place(Position::BottomRight));
    let screen = render(&app);

    assert!(screen.contains("You are at move #5"));
    assert!(screen.contains("Go to move #4 (1, 2)"));
    assert!(!screen.contains("(0, 2)"));
    assert!(screen.contains("Next player: O"));
}

#[test]
fn test_descending_screen_toggle_label() {
    let app = App::new(GameSession::new(SortOrder::Descending));
    assert!(render(&app).contains("Sort Ascending"));
}
