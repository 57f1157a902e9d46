//! Reasons a game event is rejected.

use derive_more::{Display, Error};

use super::Mark;

/// An event the rules refused. The state that produced it is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    #[display("cell {cell} is outside the board")]
    CellOutOfRange { cell: usize },
    #[display("cell {cell} is already taken")]
    CellOccupied { cell: usize },
    #[display("game is over, {winner} already won")]
    GameOver { winner: Mark },
    #[display("step {step} is not in the history ({len} recorded)")]
    StepOutOfRange { step: usize, len: usize },
}
