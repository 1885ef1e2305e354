//! Win-line scanning for tic-tac-toe.
//!
//! Rules are pure functions over a [`Board`], separated from board storage
//! so the engine can evaluate them without touching cell state.

use crate::board::{Board, Cell};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A line of three cells checked for a win.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Line {
    /// Top row.
    TopRow,
    /// Middle row.
    MiddleRow,
    /// Bottom row.
    BottomRow,
    /// Left column.
    LeftColumn,
    /// Middle column.
    MiddleColumn,
    /// Right column.
    RightColumn,
    /// Top-left to bottom-right diagonal.
    MainDiagonal,
    /// Top-right to bottom-left diagonal.
    AntiDiagonal,
}

impl Line {
    /// The (row, col) cells forming this line.
    pub const fn cells(self) -> [(usize, usize); 3] {
        match self {
            Line::TopRow => [(0, 0), (0, 1), (0, 2)],
            Line::MiddleRow => [(1, 0), (1, 1), (1, 2)],
            Line::BottomRow => [(2, 0), (2, 1), (2, 2)],
            Line::LeftColumn => [(0, 0), (1, 0), (2, 0)],
            Line::MiddleColumn => [(0, 1), (1, 1), (2, 1)],
            Line::RightColumn => [(0, 2), (1, 2), (2, 2)],
            Line::MainDiagonal => [(0, 0), (1, 1), (2, 2)],
            Line::AntiDiagonal => [(0, 2), (1, 1), (2, 0)],
        }
    }
}

/// Finds a line of three `marker` cells, if one exists.
///
/// Scans rows, then columns, then diagonals, and returns the first line
/// fully held by `marker`.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, marker: char) -> Option<Line> {
    Line::iter().find(|line| {
        line.cells()
            .iter()
            .all(|&(row, col)| board.get(row, col) == Ok(Cell::Marked(marker)))
    })
}
