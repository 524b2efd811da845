//! Read-only views handed to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::core::{Phase, Player, Session, StatusMessage};
use crate::rules::has_legal_move;
use crate::tiles::{Tile, TileId};

/// A tile as drawn: identity plus current orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileView {
    pub id: TileId,
    pub top: u8,
    pub bottom: u8,
}

impl From<&Tile> for TileView {
    fn from(tile: &Tile) -> Self {
        Self {
            id: tile.id(),
            top: tile.top(),
            bottom: tile.bottom(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: u8,
    pub name: String,
    pub hand: Vec<TileView>,
    pub score: u32,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            id: player.seat().0,
            name: player.name().to_string(),
            hand: player.hand().iter().map(TileView::from).collect(),
            score: player.score(),
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub phase: Phase,
    pub players: Vec<PlayerView>,
    pub chain: Vec<TileView>,
    pub active_index: Option<u8>,
    pub winner: Option<u8>,
    pub final_scores: Option<Vec<u32>>,
    /// The active seat has no legal placement, so the pass control is live.
    pub can_pass: bool,
    pub selected: Option<TileId>,
}

impl Snapshot {
    /// Capture `session` together with the armed tile.
    #[must_use]
    pub fn capture(session: &Session, selected: Option<TileId>) -> Self {
        let players = session
            .players()
            .map(|ps| ps.values().map(PlayerView::from).collect())
            .unwrap_or_default();
        let chain = session
            .chain()
            .map(|c| c.tiles().map(TileView::from).collect())
            .unwrap_or_default();
        let can_pass = session
            .round()
            .is_some_and(|r| !has_legal_move(r.active_player().hand(), r.chain()));

        Self {
            phase: session.phase(),
            players,
            chain,
            active_index: session.active_seat().map(|s| s.0),
            winner: session.winner().map(|s| s.0),
            final_scores: session
                .final_scores()
                .map(|scores| scores.values().copied().collect()),
            can_pass,
            selected,
        }
    }
}

/// Result of a table action: the new frame and an optional status line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub snapshot: Snapshot,
    pub message: Option<StatusMessage>,
}
