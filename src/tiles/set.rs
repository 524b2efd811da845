//! The double-six set and shuffling.

use rustc_hash::FxHashSet;

use super::tile::{Tile, MAX_PIP};
use crate::core::GameRng;

/// Number of tiles in a double-six set.
pub const SET_SIZE: usize = 28;

/// Enumerate the full set: every `(i, j)` with `0 <= i <= j <= 6`, in order,
/// oriented with `i` on top.
#[must_use]
pub fn create_set() -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(SET_SIZE);
    for i in 0..=MAX_PIP {
        for j in i..=MAX_PIP {
            tiles.push(Tile::new(i, j));
        }
    }
    tiles
}

/// Return a uniformly shuffled copy of `tiles`. The input is not touched.
#[must_use]
pub fn shuffle(tiles: &[Tile], rng: &mut GameRng) -> Vec<Tile> {
    let mut shuffled = tiles.to_vec();
    rng.shuffle(&mut shuffled);
    shuffled
}

/// Is `tiles` exactly one double-six set (any order, any orientation)?
#[must_use]
pub fn is_canonical_set(tiles: &[Tile]) -> bool {
    if tiles.len() != SET_SIZE {
        return false;
    }
    let mut seen = FxHashSet::default();
    tiles.iter().all(|t| seen.insert(t.id()))
}
