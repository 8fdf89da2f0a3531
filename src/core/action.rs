//! Moves and move history.
//!
//! A `Move` is what a controller hands back to the match: a pass, a fully
//! specified card play, or a cancelled prompt. A play carries every choice
//! the card needs (target row, medic revival) so it can be validated once
//! and then applied atomically.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::entity::EntityId;
use super::player::PlayerId;
use crate::cards::{CardId, Row};

/// A card chosen from the graveyard by a medic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Revival {
    /// The graveyard card to bring back.
    pub card: EntityId,
    /// Row it is placed into.
    pub row: Row,
}

/// A fully specified card play.
///
/// ```
/// use rust_gwent::cards::Row;
/// use rust_gwent::core::{EntityId, PlayPlan};
///
/// let plan = PlayPlan::new(2)
///     .in_row(Row::Ranged)
///     .reviving(EntityId(17), Row::Close);
///
/// assert_eq!(plan.hand_index, 2);
/// assert_eq!(plan.row, Some(Row::Ranged));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayPlan {
    /// Index into the player's hand.
    pub hand_index: usize,
    /// Target row. `None` for weather and scorch, which have no target.
    pub row: Option<Row>,
    /// Medic revival, if the card is a medic and a card was chosen.
    pub revive: Option<Revival>,
}

impl PlayPlan {
    /// Plan to play the card at `hand_index` with no target yet.
    #[must_use]
    pub fn new(hand_index: usize) -> Self {
        Self {
            hand_index,
            row: None,
            revive: None,
        }
    }

    /// Target a row.
    #[must_use]
    pub fn in_row(mut self, row: Row) -> Self {
        self.row = Some(row);
        self
    }

    /// Revive a graveyard card into `row`.
    #[must_use]
    pub fn reviving(mut self, card: EntityId, row: Row) -> Self {
        self.revive = Some(Revival { card, row });
        self
    }
}

/// A controller's decision for one prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    /// Give up the rest of the round.
    Pass,
    /// Play a card.
    Play(PlayPlan),
    /// No decision this prompt. The turn is asked again later.
    Cancel,
}

/// What happened on a recorded turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveKind {
    /// The side passed voluntarily.
    Pass,
    /// The side was passed automatically (empty hand or already passed).
    AutoPass,
    /// A card was played.
    Play {
        /// Catalog ID of the played card.
        card: CardId,
        /// Target row, if any.
        row: Option<Row>,
        /// Every card instance that entered the board with this play.
        entered: SmallVec<[EntityId; 4]>,
    },
}

/// A recorded move with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Round number (starts at 1).
    pub round: u32,
    /// Turn number within the match (starts at 1).
    pub turn: u32,
    /// The side that moved.
    pub player: PlayerId,
    /// What the move was.
    pub kind: MoveKind,
}
