//! Human-readable status line shown by the presentation layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status message produced by a transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatusMessage {
    Welcome,
    /// The named seat is now active.
    YourTurn { name: String },
    /// The armed tile does not fit the chosen end.
    InvalidMove,
    /// A pass was refused because a legal placement exists.
    HasPlayableTile,
    /// The named seat emptied their hand.
    Wins { name: String },
    /// Every seat passed in a row; the named seat has the lowest pip total.
    Blocked { winner: String },
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusMessage::Welcome => write!(f, "Welcome to Gaple!"),
            StatusMessage::YourTurn { name } => write!(f, "Your turn, {name}"),
            StatusMessage::InvalidMove => write!(f, "Invalid move!"),
            StatusMessage::HasPlayableTile => write!(f, "You have a playable tile!"),
            StatusMessage::Wins { name } => write!(f, "{name} wins!"),
            StatusMessage::Blocked { winner } => write!(f, "Game blocked! Winner is {winner}."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let name = "Player 2".to_string();
        assert_eq!(StatusMessage::Welcome.to_string(), "Welcome to Gaple!");
        assert_eq!(StatusMessage::InvalidMove.to_string(), "Invalid move!");
        assert_eq!(
            StatusMessage::HasPlayableTile.to_string(),
            "You have a playable tile!"
        );
        assert_eq!(
            StatusMessage::YourTurn { name: name.clone() }.to_string(),
            "Your turn, Player 2"
        );
        assert_eq!(
            StatusMessage::Wins { name: name.clone() }.to_string(),
            "Player 2 wins!"
        );
        assert_eq!(
            StatusMessage::Blocked { winner: name }.to_string(),
            "Game blocked! Winner is Player 2."
        );
    }
}
