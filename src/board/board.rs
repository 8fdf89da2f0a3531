//! The battlefield: six lanes, shared weather and per-side graveyards.
//!
//! ## Zones held by the board
//!
//! - Lanes: units placed by either side (spies sit on the opposing side)
//! - Horn slots: one per lane, holding a Commander's Horn
//! - Weather: the weather cards in effect, shared by both sides
//! - Graveyards: one per side, accumulating for the whole match
//!
//! Every card that leaves the board goes to its owner's graveyard, so the
//! board never duplicates or drops a card.

use im::Vector;
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::lane::Lane;
use crate::cards::{Ability, CardInstance, CardKind, Row, WeatherKind};
use crate::core::entity::EntityId;
use crate::core::player::{PlayerId, PlayerMap};
use crate::zones::{Zone, ZoneCensus};

/// The shared battlefield.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use rust_gwent::board::Board;
/// use rust_gwent::cards::{CardDefinition, CardInstance, Row, WeatherKind};
/// use rust_gwent::core::{EntityId, PlayerId};
///
/// let ves = Arc::new(CardDefinition::unit("ves", "Ves", 5, &[Row::Close]));
/// let frost = Arc::new(CardDefinition::weather("frost", "Biting Frost", WeatherKind::Frost));
///
/// let mut board = Board::new();
/// board.place_card(CardInstance::new(EntityId(0), PlayerId::PLAYER, ves), PlayerId::PLAYER, Row::Close);
/// assert_eq!(board.side_value(PlayerId::PLAYER), 5);
///
/// board.apply_weather(CardInstance::new(EntityId(1), PlayerId::OPPONENT, frost));
/// assert_eq!(board.side_value(PlayerId::PLAYER), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    lanes: PlayerMap<[Lane; 3]>,
    weather: SmallVec<[WeatherKind; 4]>,
    weather_cards: Vector<CardInstance>,
    graveyards: PlayerMap<Vector<CardInstance>>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            lanes: PlayerMap::new(|_| Default::default()),
            weather: SmallVec::new(),
            weather_cards: Vector::new(),
            graveyards: PlayerMap::with_default(),
        }
    }
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Queries ===

    /// A lane of one side.
    #[must_use]
    pub fn lane(&self, side: PlayerId, row: Row) -> &Lane {
        &self.lanes[side][row.index()]
    }

    /// Whether any active weather hits `row`.
    #[must_use]
    pub fn is_weathered(&self, row: Row) -> bool {
        self.weather.iter().any(|w| w.affected_row() == Some(row))
    }

    /// Score of one lane.
    #[must_use]
    pub fn lane_value(&self, side: PlayerId, row: Row) -> u32 {
        let value = self.lane(side, row).value(self.is_weathered(row));
        trace!(%side, %row, value, "lane value");
        value
    }

    /// Score of one side: the sum of its three lanes.
    #[must_use]
    pub fn side_value(&self, side: PlayerId) -> u32 {
        Row::ALL
            .iter()
            .map(|&row| self.lane_value(side, row))
            .fold(0, u32::saturating_add)
    }

    /// Weather kinds in effect, in the order they arrived.
    #[must_use]
    pub fn active_weather(&self) -> &[WeatherKind] {
        &self.weather
    }

    /// Weather cards in the shared weather zone.
    #[must_use]
    pub fn weather_cards(&self) -> &Vector<CardInstance> {
        &self.weather_cards
    }

    /// A side's graveyard, oldest first.
    #[must_use]
    pub fn graveyard(&self, side: PlayerId) -> &Vector<CardInstance> {
        &self.graveyards[side]
    }

    /// Graveyard cards a medic may bring back: non-hero units.
    pub fn revivable(&self, side: PlayerId) -> impl Iterator<Item = &CardInstance> {
        self.graveyards[side]
            .iter()
            .filter(|c| c.is_unit() && !c.is_hero())
    }

    /// Whether nothing is on the board (graveyards aside).
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.weather.is_empty()
            && self.weather_cards.is_empty()
            && self
                .lanes
                .iter()
                .all(|(_, lanes)| lanes.iter().all(|l| l.is_empty() && l.multiplier() == 1))
    }

    /// Record every board card into a census.
    pub fn record_census(&self, census: &mut ZoneCensus) {
        for (side, lanes) in self.lanes.iter() {
            for (row, lane) in Row::ALL.iter().zip(lanes.iter()) {
                census.record_all(side, Zone::Lane(*row), lane.cards());
                census.record_all(side, Zone::HornSlot(*row), lane.horn());
            }
        }
        for card in &self.weather_cards {
            census.record(card.owner, Zone::Weather, card);
        }
        for (side, graveyard) in self.graveyards.iter() {
            census.record_all(side, Zone::Graveyard, graveyard);
        }
    }

    // === Mutations ===

    /// Append a card to a lane.
    ///
    /// A spy goes to the opposing side's matching lane instead. Returns
    /// whether that redirect happened.
    pub fn place_card(&mut self, card: CardInstance, side: PlayerId, row: Row) -> bool {
        let spy = card.ability() == Ability::Spy;
        let target = if spy { side.opponent() } else { side };
        debug!(card = %card, %target, %row, spy, "place card");
        self.lanes[target][row.index()].push(card);
        spy
    }

    /// Overwrite a lane's multiplier.
    pub fn set_lane_multiplier(&mut self, side: PlayerId, row: Row, multiplier: u32) {
        debug!(%side, %row, multiplier, "set lane multiplier");
        self.lanes[side][row.index()].set_multiplier(multiplier);
    }

    /// Put a horn card in a lane's horn slot and set the multiplier.
    ///
    /// A horn already in the slot goes to its owner's graveyard.
    pub fn play_horn(&mut self, card: CardInstance, side: PlayerId, row: Row, multiplier: u32) {
        if let Some(replaced) = self.lanes[side][row.index()].install_horn(card) {
            self.discard(replaced);
        }
        self.set_lane_multiplier(side, row, multiplier);
    }

    /// Play a weather card.
    ///
    /// Clear removes all weather and sends every weather card (itself
    /// included) to the graveyard. Any other kind joins the active set; a
    /// kind already active has no further effect.
    pub fn apply_weather(&mut self, card: CardInstance) {
        let kind = match &card.definition().kind {
            CardKind::Weather(kind) => Some(*kind),
            _ => None,
        };
        let Some(kind) = kind else {
            debug_assert!(false, "apply_weather called with {}", card);
            self.discard(card);
            return;
        };

        if kind == WeatherKind::Clear {
            self.clear_weather();
            self.discard(card);
            return;
        }

        if !self.weather.contains(&kind) {
            self.weather.push(kind);
        }
        debug!(?kind, card = %card, "weather");
        self.weather_cards.push_back(card);
    }

    /// Destroy every unit on the board whose base value equals the highest
    /// base value in play. No-op without units.
    pub fn scorch(&mut self) -> Vec<CardInstance> {
        let max = self
            .lanes
            .iter()
            .flat_map(|(_, lanes)| lanes.iter())
            .filter_map(Lane::max_unit_value)
            .max();

        let Some(max) = max else {
            return Vec::new();
        };

        let mut destroyed = Vec::new();
        for (_, lanes) in self.lanes.iter_mut() {
            for lane in lanes.iter_mut() {
                destroyed.extend(lane.remove_units_valued(max));
            }
        }
        debug!(max, count = destroyed.len(), "scorch");
        self.bury(&destroyed);
        destroyed
    }

    /// Destroy every unit in one lane tied at that lane's highest base value.
    pub fn scorch_lane(&mut self, side: PlayerId, row: Row) -> Vec<CardInstance> {
        let lane = &mut self.lanes[side][row.index()];
        let Some(max) = lane.max_unit_value() else {
            return Vec::new();
        };

        let destroyed = lane.remove_units_valued(max);
        debug!(%side, %row, max, count = destroyed.len(), "scorch lane");
        self.bury(&destroyed);
        destroyed
    }

    /// End-of-round cleanup.
    ///
    /// Every lane card, horn and weather card goes to its owner's graveyard;
    /// multipliers return to 1 and weather is cleared. Graveyards are kept.
    /// Returns the number of cards moved.
    pub fn clear_round(&mut self) -> usize {
        let mut cleared = Vec::new();
        for (_, lanes) in self.lanes.iter_mut() {
            for lane in lanes.iter_mut() {
                cleared.extend(lane.clear());
            }
        }
        self.bury(&cleared);
        let moved = cleared.len() + self.clear_weather();
        debug!(moved, "clear round");
        moved
    }

    /// Send a card to its owner's graveyard.
    pub fn discard(&mut self, card: CardInstance) {
        self.graveyards[card.owner].push_back(card);
    }

    /// Remove a card from a side's graveyard.
    pub fn take_from_graveyard(&mut self, side: PlayerId, entity: EntityId) -> Option<CardInstance> {
        let graveyard = &mut self.graveyards[side];
        let index = graveyard.iter().position(|c| c.entity == entity)?;
        Some(graveyard.remove(index))
    }

    fn clear_weather(&mut self) -> usize {
        self.weather.clear();
        let cards = std::mem::take(&mut self.weather_cards);
        let moved = cards.len();
        for card in cards {
            self.discard(card);
        }
        moved
    }

    fn bury(&mut self, cards: &[CardInstance]) {
        for card in cards {
            self.discard(card.clone());
        }
    }
}
