//! A single row on one side of the board.

use im::Vector;

use crate::cards::CardInstance;

/// Multiplier of a lane with no horn.
pub const BASE_MULTIPLIER: u32 = 1;

/// Contribution of one card to its lane.
///
/// Non-units add nothing. A weathered non-hero counts as 1 before the
/// multiplier; heroes ignore weather but still take the multiplier.
/// Scores saturate at `u32::MAX`.
///
/// ```
/// use std::sync::Arc;
/// use rust_gwent::board::card_score;
/// use rust_gwent::cards::{CardDefinition, CardInstance, Row};
/// use rust_gwent::core::{EntityId, PlayerId};
///
/// let def = Arc::new(CardDefinition::unit("ves", "Ves", 5, &[Row::Close]));
/// let ves = CardInstance::new(EntityId(0), PlayerId::PLAYER, def);
///
/// assert_eq!(card_score(&ves, false, 1), 5);
/// assert_eq!(card_score(&ves, true, 1), 1);
/// assert_eq!(card_score(&ves, false, 2), 10);
/// assert_eq!(card_score(&ves, true, 2), 2);
/// ```
#[must_use]
pub fn card_score(card: &CardInstance, weathered: bool, multiplier: u32) -> u32 {
    match card.definition().as_unit() {
        None => 0,
        Some(unit) if weathered && !unit.is_hero_immune_to_weather() => multiplier,
        Some(unit) => unit.value.saturating_mul(multiplier),
    }
}

/// Cards placed in one row of one side, plus the row's multiplier and
/// horn slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lane {
    cards: Vector<CardInstance>,
    multiplier: u32,
    horn: Option<CardInstance>,
}

impl Default for Lane {
    fn default() -> Self {
        Self {
            cards: Vector::new(),
            multiplier: BASE_MULTIPLIER,
            horn: None,
        }
    }
}

impl Lane {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards in placement order.
    #[must_use]
    pub fn cards(&self) -> &Vector<CardInstance> {
        &self.cards
    }

    #[must_use]
    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    /// The horn card occupying this lane, if any.
    #[must_use]
    pub fn horn(&self) -> Option<&CardInstance> {
        self.horn.as_ref()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty() && self.horn.is_none()
    }

    /// Total score of the lane.
    #[must_use]
    pub fn value(&self, weathered: bool) -> u32 {
        self.cards
            .iter()
            .map(|c| card_score(c, weathered, self.multiplier))
            .fold(0, u32::saturating_add)
    }

    pub(crate) fn push(&mut self, card: CardInstance) {
        self.cards.push_back(card);
    }

    pub(crate) fn set_multiplier(&mut self, multiplier: u32) {
        self.multiplier = multiplier;
    }

    /// Put a horn card in the slot. Returns the card it replaced.
    pub(crate) fn install_horn(&mut self, card: CardInstance) -> Option<CardInstance> {
        self.horn.replace(card)
    }

    /// Highest base value among the lane's units.
    #[must_use]
    pub fn max_unit_value(&self) -> Option<u32> {
        self.cards
            .iter()
            .filter_map(|c| c.definition().as_unit())
            .map(|u| u.value)
            .max()
    }

    /// Remove every unit whose base value equals `value`.
    pub(crate) fn remove_units_valued(&mut self, value: u32) -> Vec<CardInstance> {
        let (removed, kept): (Vector<CardInstance>, Vector<CardInstance>) = self
            .cards
            .iter()
            .cloned()
            .partition(|c| c.is_unit() && c.value() == value);
        self.cards = kept;
        removed.into_iter().collect()
    }

    /// Empty the lane and reset the multiplier. Returns every card it held,
    /// horn last.
    pub(crate) fn clear(&mut self) -> Vec<CardInstance> {
        let mut removed: Vec<CardInstance> = std::mem::take(&mut self.cards).into_iter().collect();
        removed.extend(self.horn.take());
        self.multiplier = BASE_MULTIPLIER;
        removed
    }
}
