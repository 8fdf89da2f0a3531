//! Card catalog for definition lookup.
//!
//! The `CardCatalog` stores every card definition known to a process. It is
//! built once, wrapped in an `Arc`, and shared read-only with every match.
//! Definitions are handed out as `Arc<CardDefinition>` so card instances can
//! carry them without borrowing the catalog.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::definition::{CardDefinition, CardId};
use crate::core::error::GameError;

/// A named set of card definitions, as shipped in a card-pack file.
///
/// ```
/// use rust_gwent::cards::CardPack;
///
/// let pack = CardPack::from_json(r#"{
///     "name": "Starter",
///     "cards": [
///         {"id": "frost", "name": "Biting Frost", "kind": {"weather": "frost"}}
///     ]
/// }"#).unwrap();
///
/// assert_eq!(pack.name, "Starter");
/// assert_eq!(pack.cards.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPack {
    pub name: String,

    #[serde(default)]
    pub cards: Vec<CardDefinition>,
}

impl CardPack {
    /// Parse a pack from JSON.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Catalog of card definitions.
///
/// ## Example
///
/// ```
/// use rust_gwent::cards::{CardCatalog, CardDefinition, CardId, Row};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardDefinition::unit("ves", "Ves", 5, &[Row::Close]));
///
/// let ves = catalog.resolve(&CardId::new("ves")).unwrap();
/// assert_eq!(ves.value(), 5);
/// assert!(catalog.resolve(&CardId::new("ghost")).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, Arc<CardDefinition>>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from card packs.
    ///
    /// When two packs define the same ID the first definition wins.
    #[must_use]
    pub fn from_packs(packs: impl IntoIterator<Item = CardPack>) -> Self {
        let mut catalog = Self::new();
        for pack in packs {
            let before = catalog.len();
            for card in pack.cards {
                if catalog.contains(&card.id) {
                    warn!(pack = %pack.name, card = %card.id, "duplicate card id ignored");
                    continue;
                }
                catalog.register(card);
            }
            debug!(pack = %pack.name, added = catalog.len() - before, "loaded card pack");
        }
        catalog
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {} already registered", card.id);
        }
        self.cards.insert(card.id.clone(), Arc::new(card));
    }

    /// Resolve an ID to its shared definition.
    pub fn resolve(&self, id: &CardId) -> Result<Arc<CardDefinition>, GameError> {
        self.cards
            .get(id)
            .cloned()
            .ok_or_else(|| GameError::UnknownCardId(id.clone()))
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&CardDefinition> {
        self.cards.get(id).map(AsRef::as_ref)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.contains_key(id)
    }

    /// Every registered ID, sorted so callers sample deterministically.
    #[must_use]
    pub fn all_ids(&self) -> Vec<CardId> {
        let mut ids: Vec<CardId> = self.cards.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values().map(AsRef::as_ref)
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &CardDefinition>
    where
        F: Fn(&CardDefinition) -> bool,
    {
        self.iter().filter(move |c| predicate(c))
    }
}
