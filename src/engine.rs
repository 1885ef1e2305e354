//! Turn-sequencing game engine.

use crate::board::{Board, BoardError, BoardSnapshot};
use crate::player::PlayerRecord;
use crate::rules;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// First seat.
    A,
    /// Second seat.
    B,
}

impl Seat {
    /// Returns the opposing seat.
    pub fn other(self) -> Self {
        match self {
            Seat::A => Seat::B,
            Seat::B => Seat::A,
        }
    }
}

/// Terminal result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The seat that completed a line.
    Won(Seat),
    /// Full board with no line.
    Drawn,
}

/// Lifecycle phase of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No players registered yet.
    NotStarted,
    /// Accepting moves.
    InProgress,
    /// Terminal. Set once per game and blocks moves until reset.
    Finished(Outcome),
}

/// Result of a successful move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The turn passed to the other player.
    Continued,
    /// The mover completed a line.
    Won(PlayerRecord),
    /// The move filled the board with no line.
    Drawn,
}

/// Error starting a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum StartError {
    /// Both players supplied the same marker.
    #[display("Players must have different markers (both use '{marker}')")]
    DuplicateMarker {
        /// The marker both players supplied.
        marker: char,
    },
}

/// Error rejecting a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// A move was attempted before `start`.
    #[display("The game has not started yet")]
    NotStarted,
    /// A move was attempted on a finished game.
    #[display("The game is over. Reset the game to play again")]
    GameOver,
    /// Target cell outside the grid.
    #[display("Cell ({row}, {col}) is outside the 3x3 board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// Target cell already holds a marker.
    #[display("Cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::OutOfBounds { row, col } => MoveError::OutOfBounds { row, col },
        }
    }
}

/// The two registered players plus whose turn it is.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Roster {
    a: PlayerRecord,
    b: PlayerRecord,
    current: Seat,
}

impl Roster {
    fn seat(&self, seat: Seat) -> &PlayerRecord {
        match seat {
            Seat::A => &self.a,
            Seat::B => &self.b,
        }
    }

    fn seat_mut(&mut self, seat: Seat) -> &mut PlayerRecord {
        match seat {
            Seat::A => &mut self.a,
            Seat::B => &mut self.b,
        }
    }
}

/// Tic-tac-toe game engine.
///
/// Each instance exclusively owns its board and player records; hosts
/// create as many independent games as they need and drive them through
/// [`Game::start`], [`Game::make_move`], and [`Game::reset`]. State is read
/// back through [`Game::snapshot`] and the other accessors; there is no
/// mutation path from outside.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    roster: Option<Roster>,
    phase: Phase,
}

impl Game {
    /// Creates an engine with an empty board and no players.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            roster: None,
            phase: Phase::NotStarted,
        }
    }

    /// Registers two players, clears the board, and begins play.
    ///
    /// The seat holding marker `'X'` moves first; seat A moves first when
    /// neither player uses `'X'`.
    ///
    /// # Errors
    ///
    /// Returns [`StartError::DuplicateMarker`] if the players share a
    /// marker. The engine stays in [`Phase::NotStarted`].
    #[instrument(skip_all, fields(a = %a.name(), b = %b.name()))]
    pub fn start(&mut self, a: PlayerRecord, b: PlayerRecord) -> Result<(), StartError> {
        if a.marker() == b.marker() {
            warn!(marker = %a.marker(), "Rejecting start: duplicate markers");
            return Err(StartError::DuplicateMarker { marker: *a.marker() });
        }

        // Distinct markers, so at most one seat can hold 'X'.
        let current = if *b.marker() == 'X' { Seat::B } else { Seat::A };

        self.board.reset();
        self.roster = Some(Roster { a, b, current });
        self.phase = Phase::InProgress;
        info!(first = ?current, "Game started");
        Ok(())
    }

    /// Places the current player's marker at the given cell.
    ///
    /// Win is evaluated strictly before draw, so a move that fills the
    /// last cell while completing a line reports a win, never a draw. On
    /// a win or a draw the turn does not pass. The board is left
    /// untouched by any rejected move.
    ///
    /// # Errors
    ///
    /// [`MoveError::NotStarted`] before [`Game::start`],
    /// [`MoveError::GameOver`] once finished,
    /// [`MoveError::OutOfBounds`] for indices outside the grid, and
    /// [`MoveError::CellOccupied`] for a cell already holding a marker.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveError> {
        let roster = match (&self.phase, self.roster.as_mut()) {
            (Phase::Finished(_), _) => return Err(MoveError::GameOver),
            (Phase::InProgress, Some(roster)) => roster,
            _ => return Err(MoveError::NotStarted),
        };

        if !self.board.get(row, col)?.is_empty() {
            debug!(row, col, "Rejecting move: cell occupied");
            return Err(MoveError::CellOccupied { row, col });
        }

        let mover = roster.current;
        let marker = *roster.seat(mover).marker();
        self.board.set(row, col, marker)?;
        debug!(row, col, %marker, "Marker placed");

        if rules::winning_line(&self.board, marker).is_some() {
            let winner = roster.seat(mover).clone();
            self.phase = Phase::Finished(Outcome::Won(mover));
            info!(winner = %winner.name(), "Game won");
            return Ok(MoveOutcome::Won(winner));
        }

        if self.board.is_full() {
            self.phase = Phase::Finished(Outcome::Drawn);
            info!("Game drawn");
            return Ok(MoveOutcome::Drawn);
        }

        roster.current = mover.other();
        Ok(MoveOutcome::Continued)
    }

    /// Clears the board, drops the registered players, and returns to
    /// [`Phase::NotStarted`]. Call [`Game::start`] again to play.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.roster = None;
        self.phase = Phase::NotStarted;
        info!("Game reset");
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the grid of optional markers for rendering.
    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    /// Returns the player at the given seat, once registered.
    pub fn player(&self, seat: Seat) -> Option<&PlayerRecord> {
        self.roster.as_ref().map(|roster| roster.seat(seat))
    }

    /// Mutable access to a registered player, so a host can rename a
    /// player or change a marker before the first move without
    /// reconstructing the game. Marker distinctness is only enforced by
    /// [`Game::start`].
    pub fn player_mut(&mut self, seat: Seat) -> Option<&mut PlayerRecord> {
        self.roster.as_mut().map(|roster| roster.seat_mut(seat))
    }

    /// Returns the player whose turn it is, while the game is in progress.
    pub fn current_player(&self) -> Option<&PlayerRecord> {
        match self.phase {
            Phase::InProgress => self.roster.as_ref().map(|roster| roster.seat(roster.current)),
            _ => None,
        }
    }

    /// Returns the winner of a finished game.
    pub fn winner(&self) -> Option<&PlayerRecord> {
        match self.phase {
            Phase::Finished(Outcome::Won(seat)) => self.player(seat),
            _ => None,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
