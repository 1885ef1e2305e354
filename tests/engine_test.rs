//! Tests for the game engine lifecycle.

use tictactoe::{Game, MoveError, MoveOutcome, Outcome, Phase, PlayerRecord, Seat, StartError};

fn record(name: &str, marker: char) -> PlayerRecord {
    PlayerRecord::new(name.to_string(), marker)
}

fn started() -> Game {
    let mut game = Game::new();
    game.start(record("Ada", 'X'), record("Grace", 'O'))
        .expect("start");
    game
}

fn filled_cells(game: &Game) -> usize {
    game.snapshot()
        .iter()
        .flatten()
        .filter(|cell| cell.is_some())
        .count()
}

#[test]
fn test_new_engine_is_not_started() {
    let game = Game::new();
    assert_eq!(game.phase(), Phase::NotStarted);
    assert!(game.player(Seat::A).is_none());
    assert!(game.current_player().is_none());
}

#[test]
fn test_duplicate_markers_rejected() {
    let mut game = Game::new();
    let result = game.start(record("Ada", 'X'), record("Grace", 'X'));
    assert_eq!(result, Err(StartError::DuplicateMarker { marker: 'X' }));
    assert_eq!(game.phase(), Phase::NotStarted);
    assert!(game.player(Seat::A).is_none());
}

#[test]
fn test_move_before_start_rejected() {
    let mut game = Game::new();
    assert_eq!(game.make_move(0, 0), Err(MoveError::NotStarted));
}

#[test]
fn test_turns_alternate() {
    let mut game = started();
    assert_eq!(
        game.current_player().map(|p| p.name().as_str()),
        Some("Ada")
    );
    assert_eq!(game.make_move(0, 0), Ok(MoveOutcome::Continued));
    assert_eq!(
        game.current_player().map(|p| p.name().as_str()),
        Some("Grace")
    );
    assert_eq!(game.make_move(1, 0), Ok(MoveOutcome::Continued));
    assert_eq!(
        game.current_player().map(|p| p.name().as_str()),
        Some("Ada")
    );
}

#[test]
fn test_occupied_cell_leaves_board_unchanged() {
    let mut game = started();
    game.make_move(1, 1).expect("first move");
    let before = game.snapshot();

    assert_eq!(game.make_move(1, 1), Err(MoveError::CellOccupied { row: 1, col: 1 }));
    assert_eq!(game.snapshot(), before);
    // The rejected mover keeps the turn.
    assert_eq!(
        game.current_player().map(|p| p.name().as_str()),
        Some("Grace")
    );
}

#[test]
fn test_out_of_bounds_rejected() {
    let mut game = started();
    assert_eq!(game.make_move(3, 0), Err(MoveError::OutOfBounds { row: 3, col: 0 }));
    assert_eq!(game.make_move(0, 7), Err(MoveError::OutOfBounds { row: 0, col: 7 }));
    assert_eq!(filled_cells(&game), 0);
}

#[test]
fn test_main_diagonal_win() {
    let mut game = started();
    game.make_move(0, 0).expect("Ada");
    game.make_move(0, 1).expect("Grace");
    game.make_move(1, 1).expect("Ada");
    game.make_move(0, 2).expect("Grace");

    match game.make_move(2, 2) {
        Ok(MoveOutcome::Won(winner)) => assert_eq!(winner.name(), "Ada"),
        other => panic!("Expected a win, got {other:?}"),
    }
    assert_eq!(game.phase(), Phase::Finished(Outcome::Won(Seat::A)));
    assert_eq!(game.winner().map(|p| p.name().as_str()), Some("Ada"));
    assert_eq!(filled_cells(&game), 5);
}

#[test]
fn test_full_board_without_line_is_drawn() {
    let mut game = started();
    // Fills to X O X / O X X / O X O with no line completed along the way.
    let moves = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 0),
        (1, 1),
        (2, 0),
        (1, 2),
        (2, 2),
        (2, 1),
    ];
    for (row, col) in &moves[..8] {
        assert_eq!(game.make_move(*row, *col), Ok(MoveOutcome::Continued));
    }
    assert_eq!(game.make_move(2, 1), Ok(MoveOutcome::Drawn));
    assert_eq!(game.phase(), Phase::Finished(Outcome::Drawn));
    assert!(game.winner().is_none());
}

#[test]
fn test_ninth_move_win_beats_draw() {
    let mut game = started();
    // The final cell both fills the board and completes the main diagonal.
    let moves = [
        (0, 0),
        (0, 2),
        (0, 1),
        (1, 0),
        (1, 1),
        (2, 0),
        (1, 2),
        (2, 1),
    ];
    for (row, col) in moves {
        assert_eq!(game.make_move(row, col), Ok(MoveOutcome::Continued));
    }

    match game.make_move(2, 2) {
        Ok(MoveOutcome::Won(winner)) => assert_eq!(winner.name(), "Ada"),
        other => panic!("Expected a win on the ninth move, got {other:?}"),
    }
    assert!(game.board().is_full());
    assert_eq!(game.phase(), Phase::Finished(Outcome::Won(Seat::A)));
}

#[test]
fn test_moves_after_finish_rejected() {
    let mut game = started();
    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        game.make_move(row, col).expect("move");
    }
    assert_eq!(game.phase(), Phase::Finished(Outcome::Won(Seat::A)));

    let before = game.snapshot();
    assert_eq!(game.make_move(2, 2), Err(MoveError::GameOver));
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_reset_returns_to_not_started() {
    let mut game = started();
    game.make_move(0, 0).expect("move");

    game.reset();
    assert_eq!(game.phase(), Phase::NotStarted);
    assert_eq!(filled_cells(&game), 0);
    assert_eq!(game.make_move(0, 0), Err(MoveError::NotStarted));

    game.start(record("Ada", 'X'), record("Grace", 'O'))
        .expect("restart");
    assert_eq!(game.phase(), Phase::InProgress);
}

#[test]
fn test_players_editable_after_start() {
    let mut game = started();
    game.player_mut(Seat::B).expect("registered").set_name("Hopper");
    assert_eq!(
        game.player(Seat::B).map(|p| p.name().as_str()),
        Some("Hopper")
    );

    game.make_move(0, 0).expect("Ada");
    assert_eq!(
        game.current_player().map(|p| p.name().as_str()),
        Some("Hopper")
    );
}

#[test]
fn test_custom_markers_reported_in_snapshot() {
    let mut game = Game::new();
    game.start(record("Ada", '#'), record("Grace", '*'))
        .expect("start");
    game.make_move(2, 0).expect("Ada");
    game.make_move(0, 2).expect("Grace");

    let snapshot = game.snapshot();
    assert_eq!(snapshot[2][0], Some('#'));
    assert_eq!(snapshot[0][2], Some('*'));
    assert_eq!(snapshot[1][1], None);
}
