//! Error taxonomy.
//!
//! - `UnknownCardId`: catalog lookup failed. Fatal to the action that
//!   caused it.
//! - `InvalidMove`: a controller produced a move the rules reject. Human
//!   controllers recover by asking again; it never reaches the match loop.
//! - `MatchAlreadyEnded`: the match was driven past its end.
//!
//! An empty graveyard for a medic or no muster matches are not errors; they
//! show up as empty lists in the play outcome.

use thiserror::Error;

use super::entity::EntityId;
use super::player::PlayerId;
use crate::cards::{CardId, Row};

/// Errors produced by the engine.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("unknown card id `{0}`")]
    UnknownCardId(CardId),

    #[error("invalid move: {0}")]
    InvalidMove(#[from] InvalidMove),

    #[error("the match has already ended")]
    MatchAlreadyEnded,

    #[error("failed to parse card pack: {0}")]
    CardPack(#[from] serde_json::Error),
}

/// Why a move was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidMove {
    #[error("hand index {index} is out of range for a hand of {len}")]
    HandIndexOutOfRange { index: usize, len: usize },

    #[error("card `{0}` cannot be played")]
    NotPlayable(CardId),

    #[error("card `{0}` needs a target row")]
    MissingRow(CardId),

    #[error("card `{card}` cannot be placed in the {row} row")]
    RowNotAllowed { card: CardId, row: Row },

    #[error("graveyard choice {index} is out of range for {len} candidates")]
    GraveyardIndexOutOfRange { index: usize, len: usize },

    #[error("{0} is not in the graveyard")]
    NotInGraveyard(EntityId),

    #[error("card `{0}` cannot be revived")]
    NotRevivable(CardId),

    #[error("{0} has already passed this round")]
    AlreadyPassed(PlayerId),
}
