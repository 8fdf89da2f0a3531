//! Play validation.
//!
//! A `PlayPlan` names a hand index, a target row and an optional medic
//! revival. `validate_play` checks every part of it against the current
//! state before anything is mutated. Only a `ValidatedPlay` can be applied,
//! so a rejected plan never leaves the match half-changed.

use smallvec::SmallVec;

use crate::board::Board;
use crate::cards::{Ability, CardDefinition, CardId, CardInstance, Row};
use crate::core::action::{PlayPlan, Revival};
use crate::core::error::InvalidMove;
use crate::core::player::PlayerId;
use crate::players::PlayerState;

/// A plan that passed validation, normalized so the resolver can trust it.
///
/// Rows are dropped for cards without a target and revivals are dropped
/// for non-medics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedPlay {
    side: PlayerId,
    card: CardId,
    hand_index: usize,
    row: Option<Row>,
    revive: Option<Revival>,
}

impl ValidatedPlay {
    #[must_use]
    pub fn side(&self) -> PlayerId {
        self.side
    }

    #[must_use]
    pub fn card(&self) -> &CardId {
        &self.card
    }

    #[must_use]
    pub fn hand_index(&self) -> usize {
        self.hand_index
    }

    #[must_use]
    pub fn row(&self) -> Option<Row> {
        self.row
    }

    #[must_use]
    pub fn revive(&self) -> Option<Revival> {
        self.revive
    }
}

/// Rows a card may be played into.
#[must_use]
pub fn allowed_rows(card: &CardDefinition) -> SmallVec<[Row; 3]> {
    card.target_rows()
}

/// Graveyard cards a medic played by `side` may revive.
#[must_use]
pub fn revival_candidates(board: &Board, side: PlayerId) -> Vec<&CardInstance> {
    board.revivable(side).collect()
}

/// Check a plan against the current state.
///
/// ## Errors
///
/// Returns the first `InvalidMove` found: the side already passed, the hand
/// index is out of range, the card is unplayable, the row is missing or not
/// allowed, or the revival target is absent or not revivable.
pub fn validate_play(
    player: &PlayerState,
    board: &Board,
    side: PlayerId,
    plan: &PlayPlan,
) -> Result<ValidatedPlay, InvalidMove> {
    if player.has_passed() {
        return Err(InvalidMove::AlreadyPassed(side));
    }

    let hand = player.hand();
    let card = hand
        .get(plan.hand_index)
        .ok_or(InvalidMove::HandIndexOutOfRange {
            index: plan.hand_index,
            len: hand.len(),
        })?;
    let def = card.definition();

    if !def.is_playable() {
        return Err(InvalidMove::NotPlayable(def.id.clone()));
    }

    let row = if def.needs_row() {
        let row = plan.row.ok_or_else(|| InvalidMove::MissingRow(def.id.clone()))?;
        check_row(def, row)?;
        Some(row)
    } else {
        None
    };

    let revive = match plan.revive {
        Some(revival) if def.ability() == Ability::Medic => {
            let target = board
                .graveyard(side)
                .iter()
                .find(|c| c.entity == revival.card)
                .ok_or(InvalidMove::NotInGraveyard(revival.card))?;
            if !target.is_unit() || target.is_hero() {
                return Err(InvalidMove::NotRevivable(target.card_id().clone()));
            }
            check_row(target.definition(), revival.row)?;
            Some(revival)
        }
        _ => None,
    };

    Ok(ValidatedPlay {
        side,
        card: def.id.clone(),
        hand_index: plan.hand_index,
        row,
        revive,
    })
}

fn check_row(def: &CardDefinition, row: Row) -> Result<(), InvalidMove> {
    if allowed_rows(def).contains(&row) {
        Ok(())
    } else {
        Err(InvalidMove::RowNotAllowed {
            card: def.id.clone(),
            row,
        })
    }
}
