//! Core engine types: entities, sides, configuration, moves, RNG, errors.

pub mod action;
pub mod config;
pub mod entity;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{Move, MoveKind, MoveRecord, PlayPlan, Revival};
pub use config::MatchConfig;
pub use entity::{EntityAllocator, EntityId};
pub use error::{GameError, InvalidMove};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
