//! Tic-tac-toe: a pure game engine behind a small API surface.
//!
//! The engine owns a 3x3 [`Board`] and two [`PlayerRecord`]s and sequences
//! turns between them. Rendering is left to callers, which read state
//! through [`Game::snapshot`] and the other accessors and never mutate
//! engine internals.
//!
//! # Example
//!
//! ```
//! use tictactoe::{Game, MoveOutcome, PlayerRecord};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = Game::new();
//! game.start(
//!     PlayerRecord::new("Ada".to_string(), 'X'),
//!     PlayerRecord::new("Grace".to_string(), 'O'),
//! )?;
//! assert_eq!(game.make_move(1, 1)?, MoveOutcome::Continued);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod engine;
mod player;
mod rules;

// Crate-level exports - Board storage
pub use board::{Board, BoardError, BoardSnapshot, Cell, SIZE};

// Crate-level exports - Game engine
pub use engine::{Game, MoveError, MoveOutcome, Outcome, Phase, Seat, StartError};

// Crate-level exports - Player records
pub use player::PlayerRecord;

// Crate-level exports - Rules
pub use rules::{Line, winning_line};
