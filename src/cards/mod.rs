//! Card system: definitions, instances, and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Stable identifier for catalog cards
//! - `CardDefinition`: Immutable card data (unit, weather or special)
//! - `CardInstance`: One physical copy in a match (entity, owner)
//! - `CardCatalog`: Definition lookup, built from `CardPack`s

pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{
    Ability, CardDefinition, CardId, CardKind, Faction, Row, SpecialKind, UnitCard, WeatherKind,
};
pub use instance::CardInstance;
pub use registry::{CardCatalog, CardPack};
