//! Card instances - one physical copy of a card in a match.
//!
//! An instance pairs a unique `EntityId` with its owner and a shared,
//! immutable handle to the catalog definition. Instances move between
//! zones; definitions never change.

use std::sync::Arc;

use super::definition::{Ability, CardDefinition, CardId};
use crate::core::entity::EntityId;
use crate::core::player::PlayerId;

/// A card copy owned by one side.
///
/// The owner never changes, even when a spy sits on the opposing side:
/// a destroyed card always goes to its owner's graveyard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardInstance {
    /// Unique entity ID for this copy.
    pub entity: EntityId,

    /// Side whose deck the card came from.
    pub owner: PlayerId,

    definition: Arc<CardDefinition>,
}

impl CardInstance {
    /// Create a card instance.
    #[must_use]
    pub fn new(entity: EntityId, owner: PlayerId, definition: Arc<CardDefinition>) -> Self {
        Self {
            entity,
            owner,
            definition,
        }
    }

    /// The catalog definition.
    #[must_use]
    pub fn definition(&self) -> &CardDefinition {
        &self.definition
    }

    #[must_use]
    pub fn card_id(&self) -> &CardId {
        &self.definition.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.definition.value()
    }

    #[must_use]
    pub fn ability(&self) -> Ability {
        self.definition.ability()
    }

    #[must_use]
    pub fn is_unit(&self) -> bool {
        self.definition.is_unit()
    }

    #[must_use]
    pub fn is_hero(&self) -> bool {
        self.definition.is_hero()
    }
}

impl std::fmt::Display for CardInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.definition.name, self.entity)
    }
}
