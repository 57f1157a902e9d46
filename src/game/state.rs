//! History-tracking game state and its transition function.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use super::{Board, CELL_COUNT, GameError, Location, Mark, WinResult, evaluate};

/// History length once every cell has been played: the empty board plus nine moves.
pub const MAX_HISTORY: usize = CELL_COUNT + 1;

/// A board snapshot and the cell that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub board: Board,
    /// `None` only for the initial empty board.
    pub location: Option<Location>,
}

/// A user intent delivered by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    CellClicked(usize),
    HistoryJump(usize),
    ToggleSort,
}

/// Outcome shown for the board under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    Winner(Mark),
    Draw,
    Next(Mark),
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Winner(mark) => write!(f, "Winner: {mark}"),
            GameStatus::Draw => f.write_str("It's a draw!"),
            GameStatus::Next(mark) => write!(f, "Next player: {mark}"),
        }
    }
}

/// The full game: every snapshot played so far, the one on display, and the
/// order the move list is presented in.
///
/// History is never empty and always starts with the empty board. The player
/// to move is derived from the cursor: even steps belong to X.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    history: Vec<MoveRecord>,
    cursor: usize,
    sort_descending: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            history: vec![MoveRecord {
                board: Board::new(),
                location: None,
            }],
            cursor: 0,
            sort_descending: false,
        }
    }

    pub fn with_sort_descending(mut self, descending: bool) -> Self {
        self.sort_descending = descending;
        self
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn sort_descending(&self) -> bool {
        self.sort_descending
    }

    pub fn current(&self) -> &MoveRecord {
        &self.history[self.cursor]
    }

    pub fn current_board(&self) -> &Board {
        &self.current().board
    }

    pub fn next_player(&self) -> Mark {
        if self.cursor % 2 == 0 { Mark::X } else { Mark::O }
    }

    pub fn winner(&self) -> Option<WinResult> {
        evaluate(self.current_board())
    }

    /// A draw is declared from the history length alone, so it stays on
    /// display while stepping back through a drawn game.
    pub fn is_draw(&self) -> bool {
        self.winner().is_none() && self.history.len() == MAX_HISTORY
    }

    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(win) => GameStatus::Winner(win.winner),
            None if self.is_draw() => GameStatus::Draw,
            None => GameStatus::Next(self.next_player()),
        }
    }

    /// Places the next player's mark on `cell`.
    ///
    /// Any moves after the cursor are discarded first, so playing from an
    /// earlier step starts a new branch. Rejected moves leave the state as it was.
    pub fn apply_move(&mut self, cell: usize) -> Result<(), GameError> {
        if cell >= CELL_COUNT {
            return Err(GameError::CellOutOfRange { cell });
        }
        if let Some(win) = self.winner() {
            return Err(GameError::GameOver { winner: win.winner });
        }
        if self.current_board().is_occupied(cell) {
            return Err(GameError::CellOccupied { cell });
        }

        let mut board = *self.current_board();
        board.place(cell, self.next_player());

        self.history.truncate(self.cursor + 1);
        self.history.push(MoveRecord {
            board,
            location: Some(Location::from_cell(cell)),
        });
        self.cursor = self.history.len() - 1;
        Ok(())
    }

    /// Moves the cursor to `step` without touching the history.
    pub fn jump_to(&mut self, step: usize) -> Result<(), GameError> {
        if step >= self.history.len() {
            return Err(GameError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.cursor = step;
        Ok(())
    }

    pub fn toggle_sort(&mut self) {
        self.sort_descending = !self.sort_descending;
    }

    /// Applies `event` in place.
    pub fn handle(&mut self, event: Event) -> Result<(), GameError> {
        match event {
            Event::CellClicked(cell) => self.apply_move(cell),
            Event::HistoryJump(step) => self.jump_to(step),
            Event::ToggleSort => {
                self.toggle_sort();
                Ok(())
            }
        }
    }
}

/// Returns the state that follows `state` once `event` is handled.
///
/// Rejected events are logged and produce a copy of the input.
pub fn reduce(state: &GameState, event: Event) -> GameState {
    let mut next = state.clone();
    match next.handle(event) {
        Ok(()) => {
            info!(?event, cursor = next.cursor, "event applied");
            next
        }
        Err(err) => {
            debug!(?event, %err, "event rejected");
            state.clone()
        }
    }
}

/// Folds a sequence of cell clicks through [`reduce`].
pub fn replay(state: GameState, cells: &[usize]) -> GameState {
    cells
        .iter()
        .fold(state, |state, &cell| reduce(&state, Event::CellClicked(cell)))
}
