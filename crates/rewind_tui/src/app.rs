//! Application state and logic.

use crate::input::{Direction, move_cursor};
use rewind_tictactoe::{GameSession, MoveEntry, Position};
use tracing::{debug, instrument};

/// Pane receiving cursor keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Board,
    /// The move list.
    History,
}

/// User intent, decoded from input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Step the cursor of the focused pane.
    Move(Direction),
    /// Activate the cell or history row under the cursor.
    Activate,
    /// Mark a cell directly.
    Place(Position),
    /// Switch between board and move list.
    ToggleFocus,
    /// Flip the move list order.
    ToggleSort,
    /// Leave the application.
    Quit,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    session: GameSession,
    cursor: Position,
    selected: usize,
    focus: Focus,
    running: bool,
}

impl App {
    /// Creates an application around a session.
    #[instrument(skip(session))]
    pub fn new(session: GameSession) -> Self {
        let mut app = Self {
            session,
            cursor: Position::Center,
            selected: 0,
            focus: Focus::Board,
            running: true,
        };
        app.select_current();
        app
    }

    /// The game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Selected row of the displayed move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// False once the user has quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Move list as displayed.
    pub fn moves(&self) -> Vec<MoveEntry> {
        self.session.moves()
    }

    /// Applies an action.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle(&mut self, action: Action) {
        match (action, self.focus) {
            (Action::Move(direction), Focus::Board) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            (Action::Move(Direction::Up), Focus::History) => {
                self.selected = self.selected.saturating_sub(1);
            }
            (Action::Move(Direction::Down), Focus::History) => {
                let last = self.session.game().len() - 1;
                self.selected = (self.selected + 1).min(last);
            }
            (Action::Move(_), Focus::History) => {}
            (Action::Activate, Focus::Board) => self.activate_cell(self.cursor),
            (Action::Activate, Focus::History) => {
                if let Some(entry) = self.moves().get(self.selected) {
                    self.session.on_history_select(entry.index);
                }
            }
            (Action::Place(pos), _) => {
                self.cursor = pos;
                self.activate_cell(pos);
            }
            (Action::ToggleFocus, _) => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
            }
            (Action::ToggleSort, _) => {
                self.session.on_toggle_sort();
                // Keep the same history entry selected.
                let last = self.session.game().len() - 1;
                self.selected = last - self.selected.min(last);
            }
            (Action::Quit, _) => {
                debug!("Quit requested");
                self.running = false;
            }
        }
    }

    fn activate_cell(&mut self, pos: Position) {
        self.session.on_cell_activate(pos.to_index());
        self.select_current();
    }

    fn select_current(&mut self) {
        self.selected = self
            .moves()
            .iter()
            .position(|entry| entry.is_current)
            .unwrap_or(0);
    }
}
