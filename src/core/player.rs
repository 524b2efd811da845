//! Seats, per-seat storage and players.
//!
//! ## Seat
//!
//! Type-safe seat index. The game always has exactly [`SEAT_COUNT`] seats;
//! seat 0 is the human seat.
//!
//! ## SeatMap
//!
//! Fixed-size per-seat storage with O(1) access, indexable by `Seat`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use crate::error::GameError;
use crate::tiles::{Tile, TileId};

/// Number of seats at the table.
pub const SEAT_COUNT: usize = 4;

/// Tiles dealt to each seat.
pub const HAND_SIZE: usize = 7;

/// A hand of tiles, stored inline.
pub type Hand = SmallVec<[Tile; HAND_SIZE]>;

/// Seat identifier, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct Seat(pub(crate) u8);

impl TryFrom<u8> for Seat {
    type Error = GameError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        if usize::from(index) < SEAT_COUNT {
            Ok(Self(index))
        } else {
            Err(GameError::SeatOutOfRange(index))
        }
    }
}

impl Seat {
    /// Create a seat.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`SEAT_COUNT`].
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!((index as usize) < SEAT_COUNT, "seat index out of range");
        Self(index)
    }

    /// Get the raw seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat whose turn comes after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % SEAT_COUNT as u8)
    }

    /// Iterate over every seat in turn order.
    ///
    /// ```
    /// use gaple::core::Seat;
    ///
    /// let seats: Vec<_> = Seat::all().collect();
    /// assert_eq!(seats.len(), 4);
    /// assert_eq!(seats[3], Seat::new(3));
    /// ```
    pub fn all() -> impl Iterator<Item = Seat> {
        (0..SEAT_COUNT as u8).map(Seat)
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use gaple::core::{Seat, SeatMap};
///
/// let mut passes: SeatMap<u32> = SeatMap::new(|_| 0);
/// passes[Seat::new(1)] += 1;
/// assert_eq!(passes[Seat::new(1)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; SEAT_COUNT],
}

impl<T> SeatMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: std::array::from_fn(|i| factory(Seat(i as u8))),
        }
    }

    /// Create a map from values already in seat order.
    pub fn from_array(data: [T; SEAT_COUNT]) -> Self {
        Self { data }
    }

    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (Seat(i as u8), v))
    }

    /// Iterate over (Seat, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Seat, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (Seat(i as u8), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Build a new map by transforming each entry.
    pub fn map<U>(&self, f: impl Fn(Seat, &T) -> U) -> SeatMap<U> {
        SeatMap::new(|seat| f(seat, self.get(seat)))
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}

/// A seated player and the tiles they hold.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    seat: Seat,
    name: String,
    hand: Hand,
    /// Pip total left in hand; filled in only when a round blocks.
    score: u32,
}

impl Player {
    /// Create a player with score 0.
    #[must_use]
    pub fn new(seat: Seat, name: impl Into<String>, hand: impl IntoIterator<Item = Tile>) -> Self {
        Self {
            seat,
            name: name.into(),
            hand: hand.into_iter().collect(),
            score: 0,
        }
    }

    #[must_use]
    pub fn seat(&self) -> Seat {
        self.seat
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn hand(&self) -> &[Tile] {
        &self.hand
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Find a held tile by identity.
    #[must_use]
    pub fn find(&self, id: TileId) -> Option<Tile> {
        self.hand.iter().copied().find(|t| t.id() == id)
    }

    #[must_use]
    pub fn holds(&self, id: TileId) -> bool {
        self.find(id).is_some()
    }

    /// Remove a tile by identity. Returns the removed tile if it was held.
    pub(crate) fn take(&mut self, id: TileId) -> Option<Tile> {
        let pos = self.hand.iter().position(|t| t.id() == id)?;
        Some(self.hand.remove(pos))
    }

    pub(crate) fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_basics() {
        let s0 = Seat::new(0);
        assert_eq!(s0.index(), 0);
        assert_eq!(format!("{}", s0), "Seat 0");
    }

    #[test]
    fn test_seat_next_wraps() {
        assert_eq!(Seat::new(0).next(), Seat::new(1));
        assert_eq!(Seat::new(3).next(), Seat::new(0));
    }

    #[test]
    #[should_panic(expected = "seat index out of range")]
    fn test_seat_out_of_range() {
        let _ = Seat::new(4);
    }

    #[test]
    fn test_seat_map_new() {
        let map: SeatMap<i32> = SeatMap::new(|s| s.index() as i32 * 10);

        assert_eq!(map[Seat::new(0)], 0);
        assert_eq!(map[Seat::new(3)], 30);
    }

    #[test]
    fn test_seat_map_mutation_and_iter() {
        let mut map: SeatMap<i32> = SeatMap::new(|_| 0);
        map[Seat::new(2)] = 5;

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs.len(), SEAT_COUNT);
        assert_eq!(pairs[2], (Seat::new(2), &5));

        let doubled = map.map(|_, v| v * 2);
        assert_eq!(doubled[Seat::new(2)], 10);
    }

    #[test]
    fn test_seat_deserialize_checks_range() {
        let seat: Seat = serde_json::from_str("3").unwrap();
        assert_eq!(seat, Seat::new(3));
        assert!(serde_json::from_str::<Seat>("7").is_err());
        assert_eq!(Seat::try_from(4), Err(GameError::SeatOutOfRange(4)));
    }

    #[test]
    fn test_seat_map_serialization() {
        let map: SeatMap<u32> = SeatMap::from_array([1, 2, 3, 4]);
        let json = serde_json::to_string(&map).unwrap();
        let back: SeatMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, back);
    }

    #[test]
    fn test_player_take_by_identity() {
        let mut player = Player::new(
            Seat::new(1),
            "Player 2",
            [Tile::new(2, 5), Tile::new(6, 6)],
        );

        assert!(player.holds(TileId::new(5, 2)));
        let taken = player.take(TileId::new(5, 2));
        assert_eq!(taken, Some(Tile::new(2, 5)));
        assert_eq!(player.hand(), &[Tile::new(6, 6)]);
        assert_eq!(player.take(TileId::new(2, 5)), None);
    }
}
