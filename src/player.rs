//! Player identity records.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A player: a display name plus the single-character marker they place on
/// the board.
///
/// Records carry no validation of their own. Marker distinctness between
/// the two players of a game is the engine's responsibility, checked at
/// start time only.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Display name.
    name: String,
    /// Board marker.
    marker: char,
}

impl PlayerRecord {
    /// Renames the player in place.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replaces the player's marker in place.
    pub fn set_marker(&mut self, marker: char) {
        self.marker = marker;
    }
}
