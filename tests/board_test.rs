//! Tests for board storage and the render snapshot.

use tictactoe::{Board, BoardError, Cell};

#[test]
fn test_get_returns_what_set_wrote() {
    for row in 0..3 {
        for col in 0..3 {
            let mut board = Board::new();
            board.set(row, col, '#').expect("in bounds");
            assert_eq!(board.get(row, col), Ok(Cell::Marked('#')));
        }
    }
}

#[test]
fn test_out_of_bounds_is_an_error() {
    let mut board = Board::new();
    assert_eq!(board.get(3, 0), Err(BoardError::OutOfBounds { row: 3, col: 0 }));
    assert_eq!(board.set(0, 3, 'X'), Err(BoardError::OutOfBounds { row: 0, col: 3 }));
    assert_eq!(board, Board::new());
}

#[test]
fn test_reset_empties_every_cell() {
    let mut board = Board::new();
    board.set(0, 0, 'X').expect("in bounds");
    board.set(2, 2, 'O').expect("in bounds");

    board.reset();
    assert!(!board.is_full());
    for row in 0..3 {
        for col in 0..3 {
            assert_eq!(board.get(row, col), Ok(Cell::Empty));
        }
    }
}

#[test]
fn test_is_full_only_when_no_cell_empty() {
    let mut board = Board::new();
    for row in 0..3 {
        for col in 0..3 {
            assert!(!board.is_full());
            board.set(row, col, 'X').expect("in bounds");
        }
    }
    assert!(board.is_full());
}

#[test]
fn test_snapshot_serializes_as_nested_arrays() {
    let mut board = Board::new();
    board.set(0, 0, 'X').expect("in bounds");
    board.set(1, 1, 'O').expect("in bounds");

    let json = serde_json::to_value(board.snapshot()).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!([
            ["X", null, null],
            [null, "O", null],
            [null, null, null],
        ])
    );
}

#[test]
fn test_display_matches_console_grid() {
    let mut board = Board::new();
    board.set(0, 0, 'X').expect("in bounds");
    board.set(1, 1, 'O').expect("in bounds");

    assert_eq!(
        board.to_string(),
        "X |   |  \n---------\n  | O |  \n---------\n  |   |  "
    );
}
