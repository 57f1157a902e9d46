//! Game rules: the board, win detection and the history-tracking state machine.

mod board;
mod error;
mod state;
mod win;

pub use board::{Board, CELL_COUNT, Location, Mark};
pub use error::GameError;
pub use state::{Event, GameState, GameStatus, MAX_HISTORY, MoveRecord, reduce, replay};
pub use win::{LINES, WinResult, evaluate};
