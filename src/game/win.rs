//! Win detection.

use super::{Board, Mark};

/// The eight winning lines in priority order: rows top to bottom, columns
/// left to right, then the two diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A completed line and the mark that completed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinResult {
    pub winner: Mark,
    pub line: [usize; 3],
}

/// Returns the first line in [`LINES`] held entirely by one mark.
///
/// A full board without such a line yields `None`; telling a draw apart from
/// an unfinished game is up to the caller.
pub fn evaluate(board: &Board) -> Option<WinResult> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let mark = board.get(a)?;
        (board.get(b) == Some(mark) && board.get(c) == Some(mark))
            .then_some(WinResult { winner: mark, line })
    })
}
