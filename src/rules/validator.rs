//! Move legality.
//!
//! Pure functions over a hand and a chain. Nothing here mutates state.

use serde::{Deserialize, Serialize};

use super::chain::{Chain, End, Orientation};
use crate::error::Rejection;
use crate::tiles::{Tile, TileId};

/// A legal way to place a held tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub tile: TileId,
    pub end: End,
    pub orientation: Orientation,
}

/// Can any tile in `hand` be placed on `chain`?
///
/// Always true on an empty chain.
#[must_use]
pub fn has_legal_move(hand: &[Tile], chain: &Chain) -> bool {
    match chain.open_ends() {
        None => true,
        Some(ends) => hand.iter().any(|&t| ends.touches(t)),
    }
}

/// Check whether `tile` fits at `end` and, if so, how it must be turned.
///
/// At the start the tile's `bottom` must end up touching the left open
/// value; at the end its `top` must touch the right open value. The face
/// already in position is tried first, then the flipped tile.
pub fn is_legal_placement(tile: Tile, end: End, chain: &Chain) -> Result<Orientation, Rejection> {
    let Some(ends) = chain.open_ends() else {
        return Ok(Orientation::AsHeld);
    };

    let open = ends.at(end);
    let (touching, far) = match end {
        End::Start => (tile.bottom(), tile.top()),
        End::End => (tile.top(), tile.bottom()),
    };

    if touching == open {
        Ok(Orientation::AsHeld)
    } else if far == open {
        Ok(Orientation::Flipped)
    } else {
        Err(Rejection::NoMatch {
            tile: tile.id(),
            end,
            open,
        })
    }
}

/// Every legal placement for `hand`, in hand order, start before end.
///
/// On an empty chain both ends are the same position, so each tile is
/// listed once, at [`End::End`].
#[must_use]
pub fn legal_placements(hand: &[Tile], chain: &Chain) -> Vec<Placement> {
    let ends: &[End] = if chain.is_empty() {
        &[End::End]
    } else {
        &[End::Start, End::End]
    };

    hand.iter()
        .flat_map(|&tile| {
            ends.iter().filter_map(move |&end| {
                is_legal_placement(tile, end, chain)
                    .ok()
                    .map(|orientation| Placement {
                        tile: tile.id(),
                        end,
                        orientation,
                    })
            })
        })
        .collect()
}
