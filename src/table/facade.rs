//! The stateful shell around the pure controller.

use tracing::{debug, info};

use super::snapshot::{Outcome, Snapshot};
use crate::core::{Action, GameConfig, GameRng, GameRngState, Session, StatusMessage};
use crate::error::Result;
use crate::rules::controller::{self, Step};
use crate::rules::End;
use crate::tiles::{create_set, shuffle, TileId};

/// One local game table.
///
/// Owns the session, the dealing RNG and the armed tile. Every change to
/// the session goes through [`controller`].
///
/// ```
/// use gaple::{GameConfig, Phase, Table};
///
/// let mut table = Table::new(GameConfig::default().with_seed(7));
/// let snap = table.start_new_game().unwrap();
/// assert_eq!(snap.phase, Phase::Playing);
/// assert_eq!(snap.players.len(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct Table {
    config: GameConfig,
    rng: GameRng,
    session: Session,
    selected: Option<TileId>,
    status: Option<StatusMessage>,
}

impl Table {
    /// A table in setup, not yet dealt.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        debug!(seed = rng.seed(), "table created");

        Self {
            config,
            rng,
            session: Session::Setup,
            selected: None,
            status: Some(StatusMessage::Welcome),
        }
    }

    /// A table resuming a known session.
    #[must_use]
    pub fn with_session(config: GameConfig, session: Session) -> Self {
        let mut table = Self::new(config);
        if let Some(round) = session.round() {
            table.status = Some(StatusMessage::YourTurn {
                name: round.active_player().name().to_string(),
            });
        }
        table.session = session;
        table
    }

    /// Shuffle, deal and start a fresh round, replacing any current one.
    ///
    /// # Errors
    ///
    /// Only on a malformed set, which the canonical set never is.
    pub fn start_new_game(&mut self) -> Result<Snapshot> {
        let shuffled = shuffle(&create_set(), &mut self.rng);
        let step = controller::start(&shuffled, &self.config.seat_names)?;

        info!(seed = self.rng.seed(), "new game started");
        self.selected = None;
        self.commit(step);
        Ok(self.snapshot())
    }

    /// Arm a tile for placement, or disarm with `None`.
    ///
    /// Only tiles in the active hand can be armed; anything else disarms.
    /// Returns whether a tile is now armed. Placement legality is not
    /// checked here.
    pub fn select_tile(&mut self, tile: Option<TileId>) -> bool {
        self.selected = tile.filter(|&id| {
            self.session
                .round()
                .is_some_and(|r| r.active_player().holds(id))
        });
        self.selected.is_some()
    }

    /// Place the armed tile at `end`.
    ///
    /// Without an armed tile, or outside play, nothing happens. The
    /// selection is cleared after any accepted or rejected placement.
    ///
    /// # Errors
    ///
    /// Propagates controller contract violations.
    pub fn attempt_play(&mut self, end: End) -> Result<Outcome> {
        let Some(tile) = self.selected else {
            return Ok(self.no_op());
        };
        if self.session.round().is_none() {
            return Ok(self.no_op());
        }

        let step = controller::apply(&self.session, Action::play(tile, end))?;
        self.selected = None;
        Ok(self.commit(step))
    }

    /// Pass the active seat's turn.
    ///
    /// # Errors
    ///
    /// [`GameError::NotStarted`](crate::GameError::NotStarted) before the
    /// first deal.
    pub fn attempt_pass(&mut self) -> Result<Outcome> {
        let step = controller::apply(&self.session, Action::Pass)?;
        if !step.is_rejected() && step.message.is_some() {
            self.selected = None;
        }
        Ok(self.commit(step))
    }

    /// The current frame.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.session, self.selected)
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn selected_tile(&self) -> Option<TileId> {
        self.selected
    }

    /// The last status line, if any.
    #[must_use]
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Dealing RNG position, for replaying the next deal.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    fn commit(&mut self, step: Step) -> Outcome {
        if let Some(message) = &step.message {
            self.status = Some(message.clone());
        }
        self.session = step.session;
        Outcome {
            snapshot: self.snapshot(),
            message: step.message,
        }
    }

    fn no_op(&self) -> Outcome {
        Outcome {
            snapshot: self.snapshot(),
            message: None,
        }
    }
}
