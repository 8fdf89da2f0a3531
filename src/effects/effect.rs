//! Effects reported by an applied play.
//!
//! Ability resolution does not queue effects for later; it applies them to
//! the board immediately and reports what happened as a list of `Effect`s.
//! The list feeds history, logging and the human view's message log.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardId, Row, WeatherKind};
use crate::core::{EntityId, PlayerId};

/// One thing a play did to the match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// A card entered a lane.
    Placed {
        card: EntityId,
        side: PlayerId,
        row: Row,
    },

    /// A spy was played; the player drew this many cards.
    SpyDraw { drawn: usize },

    /// Muster pulled same-family cards from hand and deck.
    Mustered { from_hand: usize, from_deck: usize },

    /// A medic brought a card back from the graveyard.
    Revived { card: EntityId, row: Row },

    /// A weather kind became active.
    Weather(WeatherKind),

    /// All weather was removed.
    WeatherCleared,

    /// A lane multiplier was set.
    Multiplier {
        side: PlayerId,
        row: Row,
        multiplier: u32,
    },

    /// Units were destroyed and sent to their owners' graveyards.
    Scorched { destroyed: Vec<EntityId> },
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::Placed { card, side, row } => write!(f, "{} placed in {}'s {} row", card, side, row),
            Effect::SpyDraw { drawn } => write!(f, "Drew {} cards from spy ability", drawn),
            Effect::Mustered { from_hand, from_deck } => write!(
                f,
                "Mustered {} cards from hand and {} from deck",
                from_hand, from_deck
            ),
            Effect::Revived { card, row } => write!(f, "Revived {} into the {} row", card, row),
            Effect::Weather(kind) => write!(f, "Weather: {:?}", kind),
            Effect::WeatherCleared => write!(f, "Weather cleared"),
            Effect::Multiplier {
                side,
                row,
                multiplier,
            } => write!(f, "{}'s {} row is now x{}", side, row, multiplier),
            Effect::Scorched { destroyed } => write!(f, "Scorch destroyed {} cards", destroyed.len()),
        }
    }
}

/// Everything a single play did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutcome {
    /// The played card.
    pub card: CardId,

    /// Row targeted, if any.
    pub row: Option<Row>,

    /// Card instances that entered the board, trigger first.
    pub entered: SmallVec<[EntityId; 4]>,

    /// Effects in the order they happened.
    pub effects: Vec<Effect>,
}

impl PlayOutcome {
    pub(crate) fn new(card: CardId, row: Option<Row>) -> Self {
        Self {
            card,
            row,
            entered: SmallVec::new(),
            effects: Vec::new(),
        }
    }

    /// Whether the play pulled extra cards onto the board.
    #[must_use]
    pub fn mustered(&self) -> bool {
        self.effects
            .iter()
            .any(|e| matches!(e, Effect::Mustered { from_hand, from_deck } if from_hand + from_deck > 0))
    }

    /// Cards drawn by a spy, zero otherwise.
    #[must_use]
    pub fn spy_draws(&self) -> usize {
        self.effects
            .iter()
            .map(|e| match e {
                Effect::SpyDraw { drawn } => *drawn,
                _ => 0,
            })
            .sum()
    }

    /// Units destroyed by this play.
    #[must_use]
    pub fn destroyed(&self) -> Vec<EntityId> {
        self.effects
            .iter()
            .flat_map(|e| match e {
                Effect::Scorched { destroyed } => destroyed.clone(),
                _ => Vec::new(),
            })
            .collect()
    }
}
