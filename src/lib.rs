//! # rust-gwent
//!
//! A two-player lane card battle engine.
//!
//! Players alternate committing cards from a hand to one of three combat
//! rows per side. Row totals are shaped by global weather and per-row
//! multipliers, and abilities on played cards draw, summon, destroy, revive
//! or double. A round ends when both sides passed or both hands are empty;
//! the lower total loses a life, and a side at zero lives loses the match.
//!
//! ## Design Principles
//!
//! 1. **Validate, then apply**: A move is checked once at the controller
//!    boundary. Applying it can no longer fail halfway.
//!
//! 2. **Cards never vanish**: Every card instance is in exactly one zone.
//!    Everything that leaves the board goes to its owner's graveyard.
//!
//! 3. **Deterministic**: Same seed and same decisions give the same match.
//!
//! ## Modules
//!
//! - `core`: Entity IDs, sides, configuration, moves, errors, RNG
//! - `cards`: Card definitions, instances and the catalog
//! - `zones`: Deck (draw pile and hand) and the zone census
//! - `board`: Lanes, weather, multipliers and graveyards
//! - `effects`: Play validation and ability resolution
//! - `players`: Player state and the Human/AI controllers
//! - `rules`: The match state machine

pub mod board;
pub mod cards;
pub mod core;
pub mod effects;
pub mod players;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    EntityId, GameError, GameRng, InvalidMove, MatchConfig, Move, MoveKind, MoveRecord, PlayPlan,
    PlayerId, PlayerMap,
};

pub use crate::cards::{
    Ability, CardCatalog, CardDefinition, CardId, CardInstance, CardKind, CardPack, Faction, Row,
    SpecialKind, WeatherKind,
};

pub use crate::board::Board;

pub use crate::zones::{Deck, Zone, ZoneCensus};

pub use crate::effects::{Effect, PlayOutcome};

pub use crate::players::{
    AiController, HandChoice, HumanController, PlayerController, PlayerState, TurnContext, View,
};

pub use crate::rules::{GameResult, MatchBuilder, MatchController, MatchResult, Phase, RoundSummary, Step};
