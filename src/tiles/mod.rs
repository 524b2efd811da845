//! Tiles and the tile set.
//!
//! - `tile`: [`Tile`] (oriented pips) and [`TileId`] (identity)
//! - `set`: the canonical double-six set and Fisher–Yates shuffling

pub mod tile;
pub mod set;

pub use tile::{Tile, TileId, MAX_PIP};
pub use set::{create_set, is_canonical_set, shuffle, SET_SIZE};
