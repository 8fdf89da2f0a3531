//! Zone census: where every card instance currently lives.
//!
//! A census is a snapshot built by walking both decks and the board. It
//! records each instance once and reports any instance seen twice, or seen
//! in a private zone (draw pile, hand, graveyard) of the side that does not
//! own it. A consistent census means no card was duplicated or lost by the
//! last mutation.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardInstance, Row};
use crate::core::entity::EntityId;
use crate::core::player::PlayerId;

/// A place a card instance can be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    DrawPile,
    Hand,
    /// A unit row on the board.
    Lane(Row),
    /// The horn slot of a row.
    HornSlot(Row),
    /// The shared weather zone.
    Weather,
    Graveyard,
}

impl Zone {
    /// Zones that only ever hold the side's own cards.
    #[must_use]
    pub fn is_private(self) -> bool {
        matches!(self, Zone::DrawPile | Zone::Hand | Zone::Graveyard)
    }
}

/// A zone on a particular side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub side: PlayerId,
    pub zone: Zone,
}

/// A broken zone invariant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CensusViolation {
    /// The same instance was found in two places.
    Duplicate {
        entity: EntityId,
        first: Location,
        second: Location,
    },
    /// A card sits in another side's private zone.
    WrongOwner {
        entity: EntityId,
        owner: PlayerId,
        location: Location,
    },
}

#[derive(Clone, Debug)]
struct Entry {
    owner: PlayerId,
    card: CardId,
    location: Location,
}

/// Snapshot of every card instance's location.
#[derive(Clone, Debug, Default)]
pub struct ZoneCensus {
    entries: FxHashMap<EntityId, Entry>,
    violations: Vec<CensusViolation>,
}

impl ZoneCensus {
    /// Create an empty census.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one card seen in `zone` of `side`.
    pub fn record(&mut self, side: PlayerId, zone: Zone, card: &CardInstance) {
        let location = Location { side, zone };

        if zone.is_private() && card.owner != side {
            self.violations.push(CensusViolation::WrongOwner {
                entity: card.entity,
                owner: card.owner,
                location,
            });
        }

        if let Some(existing) = self.entries.get(&card.entity) {
            self.violations.push(CensusViolation::Duplicate {
                entity: card.entity,
                first: existing.location,
                second: location,
            });
            return;
        }

        self.entries.insert(
            card.entity,
            Entry {
                owner: card.owner,
                card: card.card_id().clone(),
                location,
            },
        );
    }

    /// Record a batch of cards in the same zone.
    pub fn record_all<'a>(
        &mut self,
        side: PlayerId,
        zone: Zone,
        cards: impl IntoIterator<Item = &'a CardInstance>,
    ) {
        for card in cards {
            self.record(side, zone, card);
        }
    }

    /// Whether no invariant was broken.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.violations.is_empty()
    }

    /// Every broken invariant found.
    #[must_use]
    pub fn violations(&self) -> &[CensusViolation] {
        &self.violations
    }

    /// Where an instance is, if it was seen.
    #[must_use]
    pub fn location_of(&self, entity: EntityId) -> Option<Location> {
        self.entries.get(&entity).map(|e| e.location)
    }

    /// Number of distinct instances seen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of instances of each catalog card owned by `owner`.
    #[must_use]
    pub fn multiplicities(&self, owner: PlayerId) -> FxHashMap<CardId, usize> {
        let mut counts = FxHashMap::default();
        for entry in self.entries.values().filter(|e| e.owner == owner) {
            *counts.entry(entry.card.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Number of `owner`'s instances found in `zone` on any side.
    #[must_use]
    pub fn count_in(&self, owner: PlayerId, zone: Zone) -> usize {
        self.entries
            .values()
            .filter(|e| e.owner == owner && e.location.zone == zone)
            .count()
    }
}
