//! Turn and round controller.
//!
//! The controller is a pure transition function: it takes a session and a
//! move and returns the next session plus a status message, without
//! touching its input.
//!
//! ```text
//! Setup --start--> Playing --play (hand empty)--> GameOver
//!                     |
//!                     +--4th consecutive pass--> Blocked
//! ```
//!
//! Rejected moves (a tile that does not fit, a pass while holding a
//! playable tile) come back as a [`Step`] carrying the unchanged session and
//! a [`Rejection`]. `Err` is reserved for calls that break the contract.

use tracing::{debug, info, warn};

use super::chain::{apply_move, Chain, End};
use super::deal::deal;
use super::result::GameResult;
use super::scoring::{final_scores, lowest_score};
use super::validator::{has_legal_move, is_legal_placement};
use crate::core::{
    Action, ActionRecord, Finished, Played, Round, Seat, Session, StatusMessage, SEAT_COUNT,
};
use crate::error::{GameError, Rejection, Result};
use crate::tiles::{Tile, TileId};

/// The outcome of one transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// The session after the move.
    pub session: Session,
    /// Status line for the presentation layer. `None` for a no-op.
    pub message: Option<StatusMessage>,
    /// Why the move was refused, if it was.
    pub rejection: Option<Rejection>,
}

impl Step {
    fn accepted(session: Session, message: StatusMessage) -> Self {
        Self {
            session,
            message: Some(message),
            rejection: None,
        }
    }

    fn rejected(round: &Round, rejection: Rejection, message: StatusMessage) -> Self {
        Self {
            session: Session::Playing(round.clone()),
            message: Some(message),
            rejection: Some(rejection),
        }
    }

    fn unchanged(session: &Session) -> Self {
        Self {
            session: session.clone(),
            message: None,
            rejection: None,
        }
    }

    #[must_use]
    pub fn is_rejected(&self) -> bool {
        self.rejection.is_some()
    }
}

/// Deal `shuffled` and open a round with seat 0 to move.
///
/// # Errors
///
/// Propagates [`deal`] errors for a malformed tile sequence.
pub fn start(shuffled: &[Tile], names: &[String; SEAT_COUNT]) -> Result<Step> {
    let players = deal(shuffled, names)?;
    let first = Seat::new(0);
    let message = StatusMessage::YourTurn {
        name: players[first].name().to_string(),
    };

    info!(first = %first, "new round dealt");
    Ok(Step::accepted(
        Session::playing(players, Chain::new(), first)?,
        message,
    ))
}

/// Apply `action` for the active seat.
///
/// A finished session is frozen: any move is a no-op.
///
/// # Errors
///
/// - [`GameError::NotStarted`] if no game has been dealt.
/// - [`GameError::TileNotInHand`] if the played tile is not held by the
///   active seat.
pub fn apply(session: &Session, action: Action) -> Result<Step> {
    let round = match session {
        Session::Setup => {
            warn!(?action, "move submitted before a game was started");
            return Err(GameError::NotStarted);
        }
        Session::GameOver(_) | Session::Blocked(_) => {
            debug!(?action, phase = ?session.phase(), "move ignored, round is over");
            return Ok(Step::unchanged(session));
        }
        Session::Playing(round) => round,
    };

    match action {
        Action::Play { tile, end } => play(round, tile, end),
        Action::Pass => Ok(pass(round)),
    }
}

/// The final result, once the round has ended.
#[must_use]
pub fn result(session: &Session) -> Option<GameResult> {
    match session {
        Session::GameOver(done) => Some(GameResult::Domino {
            winner: done.winner,
        }),
        Session::Blocked(done) => Some(GameResult::Blocked {
            winner: done.winner,
            scores: done.players.map(|_, p| p.score()),
        }),
        Session::Setup | Session::Playing(_) => None,
    }
}

fn play(round: &Round, id: TileId, end: End) -> Result<Step> {
    let seat = round.active;
    let Some(tile) = round.players[seat].find(id) else {
        warn!(%seat, tile = %id, "played tile is not in the active hand");
        return Err(GameError::TileNotInHand { seat, tile: id });
    };

    let orientation = match is_legal_placement(tile, end, &round.chain) {
        Ok(orientation) => orientation,
        Err(rejection) => {
            debug!(%seat, %rejection, "placement rejected");
            return Ok(Step::rejected(round, rejection, StatusMessage::InvalidMove));
        }
    };

    let mut next = round.clone();
    next.chain = apply_move(&round.chain, tile, end, orientation);
    debug_assert!(next.chain.is_well_formed(), "chain lost its links");
    let taken = next.players[seat].take(id);
    debug_assert!(taken.is_some(), "tile found above must still be held");
    next.passes = 0;

    let placed = orientation.apply(tile);
    let sequence = next.next_sequence();
    next.history
        .push_back(ActionRecord::new(seat, Played::Tile { tile: placed, end }, sequence));
    debug!(%seat, tile = %placed, %end, "tile placed");

    if next.players[seat].hand().is_empty() {
        let name = next.players[seat].name().to_string();
        info!(%seat, "hand emptied, round won");
        let done = Finished {
            players: next.players,
            chain: next.chain,
            history: next.history,
            winner: seat,
        };
        return Ok(Step::accepted(Session::GameOver(done), StatusMessage::Wins { name }));
    }

    Ok(advance(next))
}

fn pass(round: &Round) -> Step {
    let seat = round.active;
    if has_legal_move(round.players[seat].hand(), &round.chain) {
        debug!(%seat, "pass refused, a playable tile is held");
        return Step::rejected(
            round,
            Rejection::HasPlayableTile(seat),
            StatusMessage::HasPlayableTile,
        );
    }

    let mut next = round.clone();
    next.passes += 1;
    let sequence = next.next_sequence();
    next.history
        .push_back(ActionRecord::new(seat, Played::Pass, sequence));
    debug!(%seat, passes = next.passes, "seat passed");

    if usize::from(next.passes) >= SEAT_COUNT {
        return block(next);
    }
    advance(next)
}

fn advance(mut round: Round) -> Step {
    round.active = round.active.next();
    let name = round.players[round.active].name().to_string();
    Step::accepted(Session::Playing(round), StatusMessage::YourTurn { name })
}

fn block(round: Round) -> Step {
    let scores = final_scores(&round.players);
    let winner = lowest_score(&scores);

    let mut players = round.players;
    for (seat, player) in players.iter_mut() {
        player.set_score(scores[seat]);
    }

    let name = players[winner].name().to_string();
    info!(%winner, scores = ?scores, "round blocked");

    let done = Finished {
        players,
        chain: round.chain,
        history: round.history,
        winner,
    };
    Step::accepted(Session::Blocked(done), StatusMessage::Blocked { winner: name })
}
