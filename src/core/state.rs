//! Session state, one variant per phase.
//!
//! ## Session
//!
//! - `Setup`: no game yet
//! - `Playing`: a [`Round`] in progress (hands, chain, active seat, passes)
//! - `GameOver`: a seat emptied their hand
//! - `Blocked`: every seat passed in a row; scores are on the players
//!
//! Winner and scores only exist on the terminal variants, so a session in
//! play cannot carry a stale result. Fields are crate-private: the only
//! writer is the turn controller in [`crate::rules::controller`].
//!
//! History uses an `im` persistent vector so cloning a session is O(1).

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::player::{Player, Seat, SeatMap, SEAT_COUNT};
use crate::error::{GameError, Result};
use crate::rules::Chain;

/// Coarse game phase, as shown to the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    Setup,
    Playing,
    GameOver,
    Blocked,
}

impl Phase {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::GameOver | Phase::Blocked)
    }
}

/// A round in progress.
///
/// Deserializing checks the same invariants as [`Session::playing`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RoundRecord")]
pub struct Round {
    pub(crate) players: SeatMap<Player>,
    pub(crate) chain: Chain,
    pub(crate) active: Seat,
    /// Consecutive passes since the last placed tile.
    pub(crate) passes: u8,
    pub(crate) history: Vector<ActionRecord>,
}

impl Round {
    #[must_use]
    pub fn players(&self) -> &SeatMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    #[must_use]
    pub fn active_seat(&self) -> Seat {
        self.active
    }

    #[must_use]
    pub fn active_player(&self) -> &Player {
        &self.players[self.active]
    }

    #[must_use]
    pub fn pass_count(&self) -> u8 {
        self.passes
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Sequence number for the next recorded move.
    pub(crate) fn next_sequence(&self) -> u32 {
        self.history.len() as u32
    }
}

/// Unchecked wire form of a [`Round`].
#[derive(Deserialize)]
struct RoundRecord {
    players: SeatMap<Player>,
    chain: Chain,
    active: Seat,
    passes: u8,
    history: Vector<ActionRecord>,
}

impl TryFrom<RoundRecord> for Round {
    type Error = GameError;

    fn try_from(record: RoundRecord) -> Result<Self> {
        check_table(&record.players, &record.chain)?;
        if usize::from(record.passes) >= SEAT_COUNT {
            return Err(GameError::InvalidRound("pass streak already ends the round"));
        }
        Ok(Round {
            players: record.players,
            chain: record.chain,
            active: record.active,
            passes: record.passes,
            history: record.history,
        })
    }
}

/// Every player sits in its own slot and no tile is in two places.
fn check_table(players: &SeatMap<Player>, chain: &Chain) -> Result<()> {
    if players.iter().any(|(seat, p)| p.seat() != seat) {
        return Err(GameError::InvalidRound("player seated in the wrong slot"));
    }

    let mut seen = FxHashSet::default();
    let held = players.values().flat_map(|p| p.hand().iter());
    for tile in held.chain(chain.tiles()) {
        if !seen.insert(tile.id()) {
            return Err(GameError::DuplicateTile(tile.id()));
        }
    }
    Ok(())
}

/// A finished round, frozen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finished {
    pub(crate) players: SeatMap<Player>,
    pub(crate) chain: Chain,
    pub(crate) history: Vector<ActionRecord>,
    pub(crate) winner: Seat,
}

impl Finished {
    #[must_use]
    pub fn players(&self) -> &SeatMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn winner(&self) -> Seat {
        self.winner
    }
}

/// The whole game state for one session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Session {
    #[default]
    Setup,
    Playing(Round),
    GameOver(Finished),
    Blocked(Finished),
}

impl Session {
    /// Build a session in play from explicit parts.
    ///
    /// Used to resume a known position or to set up fixtures; normal games
    /// start through [`crate::rules::controller::start`].
    ///
    /// # Errors
    ///
    /// - [`GameError::DuplicateTile`] if a tile is held twice or is both
    ///   held and on the chain.
    /// - [`GameError::InvalidRound`] if a player sits in another seat's slot.
    pub fn playing(players: SeatMap<Player>, chain: Chain, active: Seat) -> Result<Self> {
        check_table(&players, &chain)?;
        Ok(Session::Playing(Round {
            players,
            chain,
            active,
            passes: 0,
            history: Vector::new(),
        }))
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self {
            Session::Setup => Phase::Setup,
            Session::Playing(_) => Phase::Playing,
            Session::GameOver(_) => Phase::GameOver,
            Session::Blocked(_) => Phase::Blocked,
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.phase().is_terminal()
    }

    /// The round in progress, if any.
    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        match self {
            Session::Playing(round) => Some(round),
            _ => None,
        }
    }

    #[must_use]
    pub fn players(&self) -> Option<&SeatMap<Player>> {
        match self {
            Session::Setup => None,
            Session::Playing(round) => Some(&round.players),
            Session::GameOver(done) | Session::Blocked(done) => Some(&done.players),
        }
    }

    #[must_use]
    pub fn chain(&self) -> Option<&Chain> {
        match self {
            Session::Setup => None,
            Session::Playing(round) => Some(&round.chain),
            Session::GameOver(done) | Session::Blocked(done) => Some(&done.chain),
        }
    }

    #[must_use]
    pub fn history(&self) -> Option<&Vector<ActionRecord>> {
        match self {
            Session::Setup => None,
            Session::Playing(round) => Some(&round.history),
            Session::GameOver(done) | Session::Blocked(done) => Some(&done.history),
        }
    }

    /// Whose turn it is. Only defined while playing.
    #[must_use]
    pub fn active_seat(&self) -> Option<Seat> {
        self.round().map(|r| r.active)
    }

    #[must_use]
    pub fn pass_count(&self) -> u8 {
        self.round().map_or(0, |r| r.passes)
    }

    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        match self {
            Session::GameOver(done) | Session::Blocked(done) => Some(done.winner),
            _ => None,
        }
    }

    /// Final pip totals. Only defined for a blocked round.
    #[must_use]
    pub fn final_scores(&self) -> Option<SeatMap<u32>> {
        match self {
            Session::Blocked(done) => Some(done.players.map(|_, p| p.score())),
            _ => None,
        }
    }
}
