//! Board storage for the 3x3 grid.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of rows and columns on the board.
pub const SIZE: usize = 3;

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a player's marker.
    Marked(char),
}

impl Cell {
    /// Returns true if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the marker, if any.
    pub fn marker(self) -> Option<char> {
        match self {
            Cell::Empty => None,
            Cell::Marked(marker) => Some(marker),
        }
    }
}

/// Read-only 3x3 grid of optional markers, for rendering.
pub type BoardSnapshot = [[Option<char>; SIZE]; SIZE];

/// Error raised by board accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Row or column outside the 3x3 grid.
    #[display("Cell ({row}, {col}) is outside the 3x3 board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

/// 3x3 tic-tac-toe board.
///
/// Cells are stored in row-major order. Dimensions are fixed at
/// construction and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; SIZE * SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; SIZE * SIZE],
        }
    }

    /// Gets the cell at the given row and column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if either index is outside [0, 3).
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        Ok(self.cells[Self::index(row, col)?])
    }

    /// Writes a marker at the given row and column.
    ///
    /// Out-of-bounds writes are an explicit error rather than a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if either index is outside [0, 3).
    pub fn set(&mut self, row: usize, col: usize, marker: char) -> Result<(), BoardError> {
        let index = Self::index(row, col)?;
        self.cells[index] = Cell::Marked(marker);
        Ok(())
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; SIZE * SIZE];
    }

    /// Returns true if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; SIZE * SIZE] {
        &self.cells
    }

    /// Returns the grid as optional markers for rendering.
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut grid = [[None; SIZE]; SIZE];
        for row in 0..SIZE {
            for col in 0..SIZE {
                grid[row][col] = self.cells[row * SIZE + col].marker();
            }
        }
        grid
    }

    fn index(row: usize, col: usize) -> Result<usize, BoardError> {
        if row < SIZE && col < SIZE {
            Ok(row * SIZE + col)
        } else {
            Err(BoardError::OutOfBounds { row, col })
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..SIZE {
            if row > 0 {
                write!(f, "\n---------\n")?;
            }
            for col in 0..SIZE {
                if col > 0 {
                    write!(f, " | ")?;
                }
                match self.cells[row * SIZE + col] {
                    Cell::Empty => write!(f, " ")?,
                    Cell::Marked(marker) => write!(f, "{marker}")?,
                }
            }
        }
        Ok(())
    }
}
