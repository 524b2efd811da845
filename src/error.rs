//! Error types.
//!
//! Two kinds of failure exist and they are deliberately kept apart:
//!
//! - [`Rejection`]: an expected user-input condition (a tile that does not
//!   match, a pass while holding a playable tile). Rejections are plain
//!   values returned alongside an unchanged session.
//! - [`GameError`]: a contract violation by the caller (dealing from a
//!   malformed set, acting before a game exists). These propagate as `Err`.

use thiserror::Error;

use crate::core::Seat;
use crate::rules::End;
use crate::tiles::TileId;

/// Contract violations raised by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A deal was attempted from a sequence that is not exactly one set.
    #[error("expected {expected} tiles to deal, got {actual}")]
    InvalidTileCount { expected: usize, actual: usize },

    /// A deal was attempted from a sequence with a repeated identity.
    #[error("tile {0} appears more than once")]
    DuplicateTile(TileId),

    /// A move was submitted while no game is in progress.
    #[error("no game has been started")]
    NotStarted,

    /// The played tile is not held by the seat whose turn it is.
    #[error("tile {tile} is not in the hand of {seat}")]
    TileNotInHand { seat: Seat, tile: TileId },

    /// A tile could not be parsed from text.
    #[error("cannot parse tile: {0}")]
    ParseTile(String),

    /// A pip value above the double-six maximum.
    #[error("pip value {0} is out of range")]
    PipOutOfRange(u8),

    /// A seat index outside the table.
    #[error("seat index {0} is out of range")]
    SeatOutOfRange(u8),

    /// Adjacent chain tiles do not share a face, or a tile repeats.
    #[error("chain tiles are not linked end to end")]
    BrokenChain,

    /// A round whose parts contradict each other.
    #[error("inconsistent round: {0}")]
    InvalidRound(&'static str),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GameError>;

/// A rejected user action. The session is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The tile has no face equal to the open value at the requested end.
    #[error("tile {tile} does not match {open} at the {end} of the chain")]
    NoMatch { tile: TileId, end: End, open: u8 },

    /// The active seat tried to pass while holding a playable tile.
    #[error("{0} holds a playable tile and may not pass")]
    HasPlayableTile(Seat),
}
