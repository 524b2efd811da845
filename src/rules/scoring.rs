//! Block scoring.

use crate::core::{Player, Seat, SeatMap};
use crate::tiles::Tile;

/// Total pips left in a hand.
#[must_use]
pub fn pip_sum(hand: &[Tile]) -> u32 {
    hand.iter().map(|t| t.pip_sum()).sum()
}

/// Pip totals for every seat.
#[must_use]
pub fn final_scores(players: &SeatMap<Player>) -> SeatMap<u32> {
    players.map(|_, p| pip_sum(p.hand()))
}

/// The seat with the lowest score. Ties go to the earliest seat.
#[must_use]
pub fn lowest_score(scores: &SeatMap<u32>) -> Seat {
    let mut best = Seat::new(0);
    for (seat, &score) in scores.iter() {
        if score < scores[best] {
            best = seat;
        }
    }
    best
}
