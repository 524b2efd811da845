//! Domino tiles and their identities.
//!
//! A [`Tile`] is an oriented pair of pip values. Orientation (`top`/`bottom`)
//! is display state only: the physical piece is identified by its
//! [`TileId`], which is derived from the unordered pair.
//!
//! ```
//! use gaple::tiles::{Tile, TileId};
//!
//! let tile = Tile::new(5, 2);
//! assert_eq!(tile.id(), TileId::new(2, 5));
//! assert_eq!(tile.flipped().id(), tile.id());
//! assert_eq!(tile.id().to_string(), "2-5");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GameError;

/// Highest pip value on a double-six set.
pub const MAX_PIP: u8 = 6;

/// Identity of a physical tile, independent of orientation.
///
/// Ordering follows the canonical set enumeration: by low face, then high face.
/// Serializes as the string `"low-high"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct TileId {
    low: u8,
    high: u8,
}

impl TileId {
    /// Create the identity for the unordered pair `{a, b}`.
    ///
    /// # Panics
    ///
    /// Panics if either value exceeds [`MAX_PIP`].
    #[must_use]
    pub const fn new(a: u8, b: u8) -> Self {
        assert!(a <= MAX_PIP && b <= MAX_PIP, "pip value out of range");
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// The smaller face.
    #[must_use]
    pub const fn low(self) -> u8 {
        self.low
    }

    /// The larger face.
    #[must_use]
    pub const fn high(self) -> u8 {
        self.high
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

impl FromStr for TileId {
    type Err = GameError;

    /// Accepts `"2-5"`, `"5-2"`, `"5|2"` and `"[2-5]"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('[').trim_end_matches(']');
        let (a, b) = trimmed
            .split_once(['-', '|'])
            .ok_or_else(|| GameError::ParseTile(s.to_string()))?;

        let parse_face = |part: &str| -> Result<u8, GameError> {
            part.trim()
                .parse::<u8>()
                .ok()
                .filter(|v| *v <= MAX_PIP)
                .ok_or_else(|| GameError::ParseTile(s.to_string()))
        };

        Ok(TileId::new(parse_face(a)?, parse_face(b)?))
    }
}

impl From<TileId> for String {
    fn from(id: TileId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for TileId {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A tile as held or placed, with a display orientation.
///
/// Tiles are `Copy`; re-orienting produces a new value and never touches
/// the copy held elsewhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TileFaces")]
pub struct Tile {
    top: u8,
    bottom: u8,
}

/// Unchecked wire form of a [`Tile`].
#[derive(Deserialize)]
struct TileFaces {
    top: u8,
    bottom: u8,
}

impl TryFrom<TileFaces> for Tile {
    type Error = GameError;

    fn try_from(faces: TileFaces) -> Result<Self, Self::Error> {
        Tile::checked(faces.top, faces.bottom)
    }
}

impl Tile {
    /// Create a tile with `top` up.
    ///
    /// # Panics
    ///
    /// Panics if either value exceeds [`MAX_PIP`].
    #[must_use]
    pub const fn new(top: u8, bottom: u8) -> Self {
        assert!(top <= MAX_PIP && bottom <= MAX_PIP, "pip value out of range");
        Self { top, bottom }
    }

    /// Like [`Tile::new`], but reports an out-of-range pip instead of panicking.
    ///
    /// # Errors
    ///
    /// [`GameError::PipOutOfRange`] if either value exceeds [`MAX_PIP`].
    pub fn checked(top: u8, bottom: u8) -> Result<Self, GameError> {
        match (top, bottom) {
            (t, _) if t > MAX_PIP => Err(GameError::PipOutOfRange(t)),
            (_, b) if b > MAX_PIP => Err(GameError::PipOutOfRange(b)),
            _ => Ok(Self { top, bottom }),
        }
    }

    #[must_use]
    pub const fn top(self) -> u8 {
        self.top
    }

    #[must_use]
    pub const fn bottom(self) -> u8 {
        self.bottom
    }

    /// Orientation-independent identity.
    #[must_use]
    pub const fn id(self) -> TileId {
        TileId::new(self.top, self.bottom)
    }

    /// The same tile turned end for end.
    #[must_use]
    pub const fn flipped(self) -> Self {
        Self {
            top: self.bottom,
            bottom: self.top,
        }
    }

    /// Does either face show `value`?
    #[must_use]
    pub const fn has(self, value: u8) -> bool {
        self.top == value || self.bottom == value
    }

    #[must_use]
    pub const fn is_double(self) -> bool {
        self.top == self.bottom
    }

    /// Total pips on both faces.
    #[must_use]
    pub const fn pip_sum(self) -> u32 {
        self.top as u32 + self.bottom as u32
    }
}

impl From<TileId> for Tile {
    /// The tile in canonical orientation (low face on top).
    fn from(id: TileId) -> Self {
        Tile::new(id.low, id.high)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}|{}]", self.top, self.bottom)
    }
}
