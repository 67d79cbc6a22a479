//! End-to-end tests for move history and time travel.

use rewind_tictactoe::{
    Game, GameSession, JumpError, MoveError, Outcome, Player, Position, SortOrder,
    describe_status,
};

#[test]
fn test_top_row_win() {
    let mut game = Game::new();
    for cell in [0, 4, 1, 5, 2] {
        game.apply_move(cell).expect("Valid move");
    }

    assert_eq!(
        game.outcome(),
        Outcome::Winner {
            player: Player::X,
            line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
        }
    );
    assert_eq!(
        describe_status(game.current_board(), game.current_index()),
        "Winner: X"
    );
}

#[test]
fn test_full_board_draw() {
    // X O X / X O O / O X X
    let game = Game::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).expect("Valid replay");

    assert_eq!(game.outcome(), Outcome::Draw);
    assert_eq!(
        describe_status(game.current_board(), game.current_index()),
        "It's a draw!"
    );
}

#[test]
fn test_moves_rejected_after_win() {
    let mut game = Game::replay(&[0, 4, 1, 5, 2]).expect("Valid replay");
    let before = game.clone();

    let result = game.apply_move(8);
    assert!(matches!(result, Err(MoveError::GameOver(Outcome::Winner { .. }))));
    assert_eq!(game, before);
}

#[test]
fn test_rewind_reopens_finished_game() {
    let mut game = Game::replay(&[0, 4, 1, 5, 2]).expect("Valid replay");
    game.jump_to(4).expect("Valid jump");

    assert_eq!(game.outcome(), Outcome::InProgress);
    assert_eq!(game.current_turn(), Player::X);
    assert_eq!(game.len(), 6);

    game.apply_move(3).expect("Move from rewound position");
    assert_eq!(game.len(), 6);
    assert_eq!(game.current_index(), 5);
    assert_eq!(game.outcome().winner(), None);
}

#[test]
fn test_branch_from_middle() {
    let mut game = Game::replay(&[0, 4, 8, 2]).expect("Valid replay");
    assert_eq!(game.len(), 5);

    game.jump_to(2).expect("Valid jump");
    game.apply_move(6).expect("Valid move");

    assert_eq!(game.len(), 4);
    assert_eq!(game.current_index(), 3);
}

#[test]
fn test_jump_never_mutates_history() {
    let mut game = Game::replay(&[0, 4, 8, 2]).expect("Valid replay");
    let history = game.history().to_vec();

    for k in [3, 0, 4, 1, 2] {
        game.jump_to(k).expect("Valid jump");
        assert_eq!(game.history(), history.as_slice());
        assert_eq!(game.current_turn() == Player::X, k % 2 == 0);
    }

    assert_eq!(game.jump_to(5), Err(JumpError::OutOfRange { index: 5, len: 5 }));
}

#[test]
fn test_sort_toggle_only_reorders() {
    let mut session = GameSession::with_game(
        Game::replay(&[0, 4, 8]).expect("Valid replay"),
        SortOrder::Ascending,
    );
    let game_before = session.game().clone();
    let ascending = session.moves();

    session.on_toggle_sort();
    let descending = session.moves();

    assert_eq!(session.game(), &game_before);
    assert_eq!(
        descending,
        ascending.iter().rev().cloned().collect::<Vec<_>>()
    );
    assert_eq!(descending[0].label, "You are at move #3");
    assert_eq!(descending[3].label, "Go to game start");
}

#[test]
fn test_highlight_follows_cursor() {
    let mut session = GameSession::with_game(
        Game::replay(&[0, 4, 1, 5, 2]).expect("Valid replay"),
        SortOrder::Ascending,
    );
    assert!(session.is_highlighted(Position::TopCenter));
    assert!(!session.is_highlighted(Position::Center));

    session.on_history_select(3);
    assert!(!session.is_highlighted(Position::TopCenter));
    assert_eq!(session.status(), "Next player: O");
}
