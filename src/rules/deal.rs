//! Dealing a shuffled set into four hands.

use rustc_hash::FxHashSet;

use crate::core::{Player, Seat, SeatMap, HAND_SIZE, SEAT_COUNT};
use crate::error::{GameError, Result};
use crate::tiles::{Tile, SET_SIZE};

/// Split `shuffled` into four consecutive hands of seven.
///
/// Seat `s` receives indices `7s..7s + 7`. All randomness lives in the
/// shuffle, so the result is a pure function of the input order.
///
/// # Errors
///
/// - [`GameError::InvalidTileCount`] unless exactly 28 tiles are given.
/// - [`GameError::DuplicateTile`] if a tile identity repeats.
pub fn deal(shuffled: &[Tile], names: &[String; SEAT_COUNT]) -> Result<SeatMap<Player>> {
    if shuffled.len() != SET_SIZE {
        return Err(GameError::InvalidTileCount {
            expected: SET_SIZE,
            actual: shuffled.len(),
        });
    }

    let mut seen = FxHashSet::default();
    if let Some(dup) = shuffled.iter().find(|t| !seen.insert(t.id())) {
        return Err(GameError::DuplicateTile(dup.id()));
    }

    let mut hands = shuffled.chunks_exact(HAND_SIZE);
    Ok(SeatMap::from_array(std::array::from_fn(|i| {
        let seat = Seat(i as u8);
        let hand = hands.next().unwrap_or_default();
        Player::new(seat, names[i].clone(), hand.iter().copied())
    })))
}
