//! # gaple
//!
//! Rule engine for four-seat Gaple, the block domino game played with a
//! double-six set.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: the turn controller maps `(Session, Action)` to
//!    the next session plus a status message. It never mutates its input.
//!
//! 2. **Illegal states unrepresentable**: the session is a tagged variant per
//!    phase, so a winner exists only once a round has ended.
//!
//! 3. **Rejections are values**: a mismatched tile or a pass while holding a
//!    playable tile leaves the session untouched and reports why. Only
//!    contract violations surface as [`GameError`].
//!
//! ## Modules
//!
//! - `core`: seats, players, session state, actions, RNG, configuration
//! - `tiles`: tiles, identities, the canonical set and shuffling
//! - `rules`: dealing, legality, the chain, scoring and the controller
//! - `table`: the stateful facade a presentation layer drives
//!
//! ## Example
//!
//! ```
//! use gaple::{End, GameConfig, Table};
//!
//! let mut table = Table::new(GameConfig::default().with_seed(42));
//! let snap = table.start_new_game().unwrap();
//!
//! // Any tile may open the chain.
//! let opening = snap.players[0].hand[0].id;
//! table.select_tile(Some(opening));
//! let outcome = table.attempt_play(End::End).unwrap();
//!
//! assert_eq!(outcome.snapshot.chain.len(), 1);
//! assert_eq!(outcome.snapshot.active_index, Some(1));
//! ```

pub mod core;
pub mod error;
pub mod tiles;
pub mod rules;
pub mod table;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, GameConfig, GameRng, GameRngState, Hand, Phase, Played, Player, Round,
    Seat, SeatMap, Session, StatusMessage, HAND_SIZE, SEAT_COUNT,
};

pub use crate::error::{GameError, Rejection, Result};

pub use crate::tiles::{create_set, is_canonical_set, shuffle, Tile, TileId, MAX_PIP, SET_SIZE};

pub use crate::rules::{
    apply_move, deal, has_legal_move, is_legal_placement, legal_placements, Chain, End,
    GameResult, OpenEnds, Orientation, Placement, Step,
};

pub use crate::table::{Outcome, PlayerView, Snapshot, Table, TileView};
