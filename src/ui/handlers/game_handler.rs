//! Game state transitions triggered from the UI.

use crate::game::{CELL_COUNT, Event, GameState, GameStatus};

use super::super::{app::App, types::Focus};

const SIDE: usize = 3;

/// Helper struct that feeds events into the game and keeps selections in range.
pub struct GameHandler<'a> {
    app: &'a mut App,
}

impl<'a> GameHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Hands `event` to the game. Returns whether it was accepted.
    pub fn dispatch(&mut self, event: Event) -> bool {
        match self.app.state.handle(event) {
            Ok(()) => {
                self.app.selected_step = self.app.state.cursor();
                self.log_accepted(event);
                true
            }
            Err(err) => {
                self.app.log(format!("Ignored: {err}"));
                false
            }
        }
    }

    pub fn click_cell(&mut self, cell: usize) -> bool {
        self.app.selected_cell = cell.min(CELL_COUNT - 1);
        self.dispatch(Event::CellClicked(cell))
    }

    pub fn click_selected(&mut self) -> bool {
        let cell = self.app.selected_cell;
        self.dispatch(Event::CellClicked(cell))
    }

    pub fn jump_to(&mut self, step: usize) -> bool {
        self.dispatch(Event::HistoryJump(step))
    }

    pub fn jump_selected(&mut self) -> bool {
        let step = self.app.selected_step;
        self.jump_to(step)
    }

    pub fn jump_to_start(&mut self) -> bool {
        self.jump_to(0)
    }

    pub fn jump_to_latest(&mut self) -> bool {
        let last = self.app.state.history().len() - 1;
        self.jump_to(last)
    }

    pub fn toggle_sort(&mut self) {
        self.dispatch(Event::ToggleSort);
    }

    /// Throws the history away, keeping the list order preference.
    pub fn new_game(&mut self) {
        let descending = self.app.state.sort_descending();
        self.app.state = GameState::new().with_sort_descending(descending);
        self.app.selected_step = 0;
        self.app.selected_cell = 4;
        self.app.focus = Focus::Board;
        self.app.log("New game, X moves first");
    }

    /// Moves the board selection by whole rows/columns, stopping at the edges.
    pub fn move_cell_selection(&mut self, d_row: isize, d_col: isize) {
        let cell = self.app.selected_cell;
        let row = ((cell / SIDE) as isize + d_row).clamp(0, SIDE as isize - 1) as usize;
        let col = ((cell % SIDE) as isize + d_col).clamp(0, SIDE as isize - 1) as usize;
        self.app.selected_cell = row * SIDE + col;
    }

    /// Moves the move-list selection up or down in display order.
    pub fn move_list_selection(&mut self, delta: isize) {
        let view = self.app.view();
        let Some(pos) = view.position_of(self.app.selected_step) else {
            self.app.selected_step = self.app.state.cursor();
            return;
        };
        let last = view.move_list.len() as isize - 1;
        let next = (pos as isize + delta).clamp(0, last) as usize;
        self.app.selected_step = view.move_list[next].step;
    }

    pub fn toggle_focus(&mut self) {
        self.app.focus = match self.app.focus {
            Focus::Board => {
                self.app.selected_step = self.app.state.cursor();
                Focus::Moves
            }
            Focus::Moves => Focus::Board,
        };
    }

    fn log_accepted(&self, event: Event) {
        let state = &self.app.state;
        match event {
            Event::CellClicked(cell) => {
                if let (Some(mark), Some(location)) =
                    (state.current_board().get(cell), state.current().location)
                {
                    self.app.log(format!("{mark} played {location}"));
                }
                match state.status() {
                    GameStatus::Winner(mark) => self.app.log(format!("{mark} wins!")),
                    GameStatus::Draw => self.app.log("It's a draw!"),
                    GameStatus::Next(_) => {}
                }
            }
            Event::HistoryJump(0) => self.app.log("Back to game start"),
            Event::HistoryJump(step) => self.app.log(format!("Jumped to move #{step}")),
            Event::ToggleSort => {
                let order = if state.sort_descending() {
                    "newest first"
                } else {
                    "oldest first"
                };
                self.app.log(format!("Moves listed {order}"));
            }
        }
    }
}
