//! The chain of played tiles.
//!
//! Tiles are stored oriented so that the `bottom` of each tile equals the
//! `top` of the next. The left open end is the `top` of the first tile and
//! the right open end is the `bottom` of the last.
//!
//! Chains are immutable values backed by a persistent vector: applying a
//! move returns a new chain and leaves the old one usable.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::GameError;
use crate::tiles::{Tile, TileId};

/// Which end of the chain a tile is placed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum End {
    /// Head of the chain; matches the left open value.
    Start,
    /// Tail of the chain; matches the right open value.
    End,
}

impl fmt::Display for End {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            End::Start => write!(f, "start"),
            End::End => write!(f, "end"),
        }
    }
}

/// How a tile is turned when it is placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Placed with the faces as held.
    AsHeld,
    /// Turned end for end before placing.
    Flipped,
}

impl Orientation {
    /// The tile as it will sit in the chain.
    #[must_use]
    pub fn apply(self, tile: Tile) -> Tile {
        match self {
            Orientation::AsHeld => tile,
            Orientation::Flipped => tile.flipped(),
        }
    }
}

/// The exposed pip values at each extremity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpenEnds {
    pub left: u8,
    pub right: u8,
}

impl OpenEnds {
    /// The open value at `end`.
    #[must_use]
    pub fn at(self, end: End) -> u8 {
        match end {
            End::Start => self.left,
            End::End => self.right,
        }
    }

    /// Does `tile` show either open value?
    #[must_use]
    pub fn touches(self, tile: Tile) -> bool {
        tile.has(self.left) || tile.has(self.right)
    }
}

/// Ordered sequence of played tiles.
///
/// Serializes as a plain array of tiles; deserializing rejects a chain that
/// is not well formed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Tile>", try_from = "Vec<Tile>")]
pub struct Chain {
    tiles: Vector<Tile>,
}

impl From<Chain> for Vec<Tile> {
    fn from(chain: Chain) -> Self {
        chain.tiles.into_iter().collect()
    }
}

impl TryFrom<Vec<Tile>> for Chain {
    type Error = GameError;

    fn try_from(tiles: Vec<Tile>) -> Result<Self, Self::Error> {
        Chain::from_tiles(tiles).ok_or(GameError::BrokenChain)
    }
}

impl Chain {
    /// An empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a chain from tiles already in order.
    ///
    /// Returns `None` if adjacent faces do not match or an identity repeats.
    #[must_use]
    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Option<Self> {
        let chain = Self {
            tiles: tiles.into_iter().collect(),
        };
        chain.is_well_formed().then_some(chain)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Tiles from head to tail.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Open values, or `None` for an empty chain.
    #[must_use]
    pub fn open_ends(&self) -> Option<OpenEnds> {
        let first = self.tiles.front()?;
        let last = self.tiles.back()?;
        Some(OpenEnds {
            left: first.top(),
            right: last.bottom(),
        })
    }

    #[must_use]
    pub fn contains(&self, id: TileId) -> bool {
        self.tiles.iter().any(|t| t.id() == id)
    }

    /// Adjacent faces match and no identity appears twice.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let linked = self
            .tiles
            .iter()
            .zip(self.tiles.iter().skip(1))
            .all(|(a, b)| a.bottom() == b.top());

        let mut ids: Vec<TileId> = self.tiles.iter().map(|t| t.id()).collect();
        ids.sort_unstable();
        ids.dedup();

        linked && ids.len() == self.tiles.len()
    }
}

/// Place `tile` on `end` of `chain`, turned per `orientation`.
///
/// The orientation must come from
/// [`is_legal_placement`](super::validator::is_legal_placement) for this
/// exact tile, end and chain; no legality check is repeated here.
#[must_use]
pub fn apply_move(chain: &Chain, tile: Tile, end: End, orientation: Orientation) -> Chain {
    let placed = orientation.apply(tile);
    let mut tiles = chain.tiles.clone();
    match end {
        End::Start => tiles.push_front(placed),
        End::End => tiles.push_back(placed),
    }
    Chain { tiles }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_chain() {
        let chain = Chain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.open_ends(), None);
        assert!(chain.is_well_formed());
    }

    #[test]
    fn test_first_tile_sets_both_ends() {
        let chain = apply_move(&Chain::new(), Tile::new(2, 4), End::End, Orientation::AsHeld);
        assert_eq!(chain.open_ends(), Some(OpenEnds { left: 2, right: 4 }));

        let chain = apply_move(&Chain::new(), Tile::new(2, 4), End::Start, Orientation::AsHeld);
        assert_eq!(chain.open_ends(), Some(OpenEnds { left: 2, right: 4 }));
    }

    #[test]
    fn test_append_and_prepend() {
        let chain = Chain::from_tiles([Tile::new(3, 3)]).unwrap();

        let chain = apply_move(&chain, Tile::new(3, 5), End::End, Orientation::AsHeld);
        let chain = apply_move(&chain, Tile::new(3, 1), End::Start, Orientation::Flipped);

        let tiles: Vec<Tile> = chain.tiles().copied().collect();
        assert_eq!(tiles, vec![Tile::new(1, 3), Tile::new(3, 3), Tile::new(3, 5)]);
        assert_eq!(chain.open_ends(), Some(OpenEnds { left: 1, right: 5 }));
        assert!(chain.is_well_formed());
    }

    #[test]
    fn test_apply_move_leaves_original() {
        let chain = Chain::from_tiles([Tile::new(3, 3)]).unwrap();
        let next = apply_move(&chain, Tile::new(3, 5), End::End, Orientation::AsHeld);

        assert_eq!(chain.len(), 1);
        assert_eq!(next.len(), 2);
    }

    #[test]
    fn test_from_tiles_rejects_broken_links() {
        assert!(Chain::from_tiles([Tile::new(2, 4), Tile::new(5, 5)]).is_none());
        assert!(Chain::from_tiles([Tile::new(2, 2), Tile::new(2, 2)]).is_none());
        assert!(Chain::from_tiles([Tile::new(2, 4), Tile::new(4, 4)]).is_some());
    }

    #[test]
    fn test_chain_serde_checks_links() {
        let chain = Chain::from_tiles([Tile::new(2, 4), Tile::new(4, 4)]).unwrap();
        let json = serde_json::to_string(&chain).unwrap();
        assert_eq!(json, r#"[{"top":2,"bottom":4},{"top":4,"bottom":4}]"#);
        assert_eq!(serde_json::from_str::<Chain>(&json).unwrap(), chain);

        let broken = r#"[{"top":1,"bottom":2},{"top":5,"bottom":6}]"#;
        let err = serde_json::from_str::<Chain>(broken).unwrap_err();
        assert!(err.to_string().contains("not linked"));
    }

    #[test]
    fn test_contains_by_identity() {
        let chain = Chain::from_tiles([Tile::new(2, 4)]).unwrap();
        assert!(chain.contains(TileId::new(4, 2)));
        assert!(!chain.contains(TileId::new(4, 4)));
    }

    #[test]
    fn test_open_ends_helpers() {
        let ends = OpenEnds { left: 2, right: 4 };
        assert_eq!(ends.at(End::Start), 2);
        assert_eq!(ends.at(End::End), 4);
        assert!(ends.touches(Tile::new(4, 6)));
        assert!(!ends.touches(Tile::new(5, 6)));
    }
}
