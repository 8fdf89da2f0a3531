//! Match rules: the turn/round/match state machine and round scoring.
//!
//! ## Key Types
//!
//! - `MatchController`: Owns a match and advances it one step at a time
//! - `MatchBuilder`: Resolves decks, shuffles and deals a new match
//! - `RoundSummary`: Scores and outcome of a finished round
//! - `MatchResult`: Winner (or draw) and final lives

pub mod engine;
pub mod round;

pub use engine::{MatchBuilder, MatchController, Phase, Step};
pub use round::{round_is_over, score_round, GameResult, MatchResult, RoundOutcome, RoundSummary};
