//! Application state bridging keystrokes to the engine.

use crossterm::event::KeyCode;
use tictactoe::{Game, MoveOutcome, PlayerRecord, StartError};
use tracing::{debug, instrument};

/// Mutable UI state wrapped around one engine instance.
pub struct App {
    game: Game,
    roster: (PlayerRecord, PlayerRecord),
    status: String,
    should_quit: bool,
}

impl App {
    /// Starts a game for the given players.
    pub fn new(a: PlayerRecord, b: PlayerRecord) -> Result<Self, StartError> {
        let mut game = Game::new();
        game.start(a.clone(), b.clone())?;
        let status = turn_banner(&game);
        Ok(Self {
            game,
            roster: (a, b),
            status,
            should_quit: false,
        })
    }

    /// The engine, for rendering.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Current status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Routes one keystroke. Digits 1-9 address cells left to right,
    /// top to bottom.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char(c) => {
                if let Some(digit) = c.to_digit(10) {
                    if (1..=9).contains(&digit) {
                        let cell = digit as usize - 1;
                        self.try_play(cell / 3, cell % 3);
                    }
                }
            }
            _ => {}
        }
    }

    fn try_play(&mut self, row: usize, col: usize) {
        debug!(row, col, "Attempting move");
        match self.game.make_move(row, col) {
            Ok(MoveOutcome::Continued) => self.status = turn_banner(&self.game),
            Ok(MoveOutcome::Won(winner)) => {
                self.status = format!(
                    "{} wins! Press 'r' to play again or 'q' to quit.",
                    winner.name()
                );
            }
            Ok(MoveOutcome::Drawn) => {
                self.status = "It's a draw! Press 'r' to play again or 'q' to quit.".to_string();
            }
            Err(err) => self.status = format!("{err}."),
        }
    }

    /// Resets the engine and starts a fresh game with the same roster.
    fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        match self.game.start(self.roster.0.clone(), self.roster.1.clone()) {
            Ok(()) => self.status = turn_banner(&self.game),
            Err(err) => self.status = format!("{err}."),
        }
    }
}

fn turn_banner(game: &Game) -> String {
    match game.current_player() {
        Some(player) => format!("Current turn: {}", player.name()),
        None => String::new(),
    }
}
