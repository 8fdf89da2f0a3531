//! The controller seam between the match and whoever decides moves.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::cards::CardInstance;
use crate::core::action::{Move, PlayPlan};
use crate::core::error::{GameError, InvalidMove};
use crate::core::player::PlayerId;
use crate::effects::{revival_candidates, validate_play, ValidatedPlay};

use super::state::PlayerState;

/// Read-only view of the match handed to a controller for one decision.
pub struct TurnContext<'a> {
    /// The side to move.
    pub side: PlayerId,
    pub player: &'a PlayerState,
    pub opponent: &'a PlayerState,
    pub board: &'a Board,
    /// Current round (starts at 1).
    pub round: u32,
}

impl<'a> TurnContext<'a> {
    /// The moving side's hand.
    pub fn hand(&self) -> impl Iterator<Item = &'a CardInstance> {
        self.player.hand().iter()
    }

    /// Check a plan the way the match will.
    pub fn validate(&self, plan: &PlayPlan) -> Result<ValidatedPlay, InvalidMove> {
        validate_play(self.player, self.board, self.side, plan)
    }

    /// Graveyard cards a medic played now could revive.
    #[must_use]
    pub fn revival_candidates(&self) -> Vec<&'a CardInstance> {
        revival_candidates(self.board, self.side)
    }
}

/// Which kind of controller drives a side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControllerKind {
    Human,
    Ai,
}

/// Decides moves for one side.
///
/// A controller must only return plays that pass `TurnContext::validate`;
/// invalid input is its own business to re-solicit.
pub trait PlayerController {
    /// Human or AI.
    fn kind(&self) -> ControllerKind;

    /// Decide the side's move for this turn.
    fn decide_move(&mut self, ctx: &TurnContext<'_>) -> Result<Move, GameError>;

    /// Receive a human-readable line about the match.
    fn notify(&mut self, _message: &str) {}
}
