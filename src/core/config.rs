//! Table configuration.

use serde::{Deserialize, Serialize};

use super::player::{Seat, SEAT_COUNT};

/// Configuration for a [`Table`](crate::table::Table).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for dealing. `None` draws a fresh seed from the OS.
    /// Same seed produces the same sequence of deals.
    pub seed: Option<u64>,

    /// Display names by seat. Seat 0 is the human seat.
    pub seat_names: [String; SEAT_COUNT],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            seat_names: [
                "Player 1 (You)".to_string(),
                "Player 2".to_string(),
                "Player 3".to_string(),
                "Player 4".to_string(),
            ],
        }
    }
}

impl GameConfig {
    /// Use a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Rename one seat.
    pub fn with_seat_name(mut self, seat: Seat, name: impl Into<String>) -> Self {
        self.seat_names[seat.index()] = name.into();
        self
    }

    /// Replace all seat names.
    pub fn with_seat_names(mut self, names: [String; SEAT_COUNT]) -> Self {
        self.seat_names = names;
        self
    }
}
