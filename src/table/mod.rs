//! Presentation-facing facade.
//!
//! [`Table`] is what a renderer talks to: it starts games, arms tiles,
//! forwards plays and passes to the controller, and hands back
//! [`Snapshot`]s with a status line.

mod facade;
pub mod snapshot;

pub use facade::Table;
pub use snapshot::{Outcome, PlayerView, Snapshot, TileView};
