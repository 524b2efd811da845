//! Core engine types: seats, players, session state, moves, RNG, configuration.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod status;
pub mod state;

pub use player::{Hand, Player, Seat, SeatMap, HAND_SIZE, SEAT_COUNT};
pub use rng::{GameRng, GameRngState};
pub use config::GameConfig;
pub use action::{Action, ActionRecord, Played};
pub use status::StatusMessage;
pub use state::{Finished, Phase, Round, Session};
