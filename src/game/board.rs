use std::fmt;

use serde::Serialize;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

const SIDE: usize = 3;

/// The symbol a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Mark {
    X,
    O,
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => f.write_str("X"),
            Mark::O => f.write_str("O"),
        }
    }
}

/// A 3x3 board snapshot, cells stored row-major (0 = top-left, 8 = bottom-right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mark in `cell`, or `None` when the cell is empty or off the board.
    pub fn get(&self, cell: usize) -> Option<Mark> {
        self.cells.get(cell).copied().flatten()
    }

    pub fn is_occupied(&self, cell: usize) -> bool {
        self.get(cell).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Callers check bounds and occupancy first.
    pub(crate) fn place(&mut self, cell: usize, mark: Mark) {
        self.cells[cell] = Some(mark);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIDE {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            let line: Vec<String> = (0..SIDE)
                .map(|col| {
                    let cell = row * SIDE + col;
                    match self.get(cell) {
                        Some(mark) => format!(" {mark} "),
                        None => "   ".to_string(),
                    }
                })
                .collect();
            writeln!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}

/// 1-indexed column/row of a cell, rendered as `col,row`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub col: u8,
    pub row: u8,
}

impl Location {
    pub fn from_cell(cell: usize) -> Self {
        Self {
            col: (cell % SIDE) as u8 + 1,
            row: (cell / SIDE) as u8 + 1,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.col, self.row)
    }
}
