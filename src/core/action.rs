//! Moves submitted to the turn controller, and the history they leave.
//!
//! Only two moves change game state: placing a tile on one end of the chain,
//! and passing. Tile selection is UI focus and never reaches the controller.

use serde::{Deserialize, Serialize};

use super::player::Seat;
use crate::rules::End;
use crate::tiles::{Tile, TileId};

/// A move by the active seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Place a held tile on one end of the chain.
    Play { tile: TileId, end: End },
    /// Decline to move. Only allowed without a legal placement.
    Pass,
}

impl Action {
    #[must_use]
    pub fn play(tile: TileId, end: End) -> Self {
        Action::Play { tile, end }
    }

    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, Action::Pass)
    }
}

/// What an accepted move did to the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Played {
    /// The tile as it was oriented in the chain.
    Tile { tile: Tile, end: End },
    Pass,
}

/// An accepted move, for history tracking and replay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that moved.
    pub seat: Seat,

    /// The effect of the move.
    pub played: Played,

    /// Position of this move within the round, from 0.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(seat: Seat, played: Played, sequence: u32) -> Self {
        Self {
            seat,
            played,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_constructors() {
        let play = Action::play(TileId::new(3, 5), End::End);
        assert_eq!(
            play,
            Action::Play {
                tile: TileId::new(5, 3),
                end: End::End
            }
        );
        assert!(!play.is_pass());
        assert!(Action::Pass.is_pass());
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::play(TileId::new(1, 2), End::Start);
        let json = serde_json::to_string(&action).unwrap();
        assert_eq!(json, r#"{"type":"play","tile":"1-2","end":"start"}"#);

        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(back, action);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(
            Seat::new(1),
            Played::Tile {
                tile: Tile::new(4, 2),
                end: End::Start,
            },
            3,
        );

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
