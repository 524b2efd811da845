//! How a round ended.

use serde::{Deserialize, Serialize};

use crate::core::{Seat, SeatMap};

/// Result of a completed round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameResult {
    /// A seat played its last tile.
    Domino { winner: Seat },
    /// Every seat passed in a row; lowest pip total wins.
    Blocked { winner: Seat, scores: SeatMap<u32> },
}

impl GameResult {
    #[must_use]
    pub fn winner(&self) -> Seat {
        match self {
            GameResult::Domino { winner } | GameResult::Blocked { winner, .. } => *winner,
        }
    }

    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, seat: Seat) -> bool {
        self.winner() == seat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Domino {
            winner: Seat::new(1),
        };
        assert!(!result.is_winner(Seat::new(0)));
        assert!(result.is_winner(Seat::new(1)));

        let blocked = GameResult::Blocked {
            winner: Seat::new(2),
            scores: SeatMap::from_array([10, 12, 4, 9]),
        };
        assert_eq!(blocked.winner(), Seat::new(2));
        assert!(!blocked.is_winner(Seat::new(3)));
    }
}
