//! Ability resolution for played cards.
//!
//! Playing a card is split in two steps:
//! - `validate_play`: Checks a `PlayPlan` against the current state
//! - `PlayResolver`: Applies a `ValidatedPlay` and reports a `PlayOutcome`
//!
//! ## Design Philosophy
//!
//! Validation happens once, before any mutation. Resolution then applies
//! every part of the play (placement, ability, revival) in one go, so a
//! play is either rejected untouched or fully applied.

mod effect;
mod resolver;
mod targeting;

pub use effect::{Effect, PlayOutcome};
pub use resolver::PlayResolver;
pub use targeting::{allowed_rows, revival_candidates, validate_play, ValidatedPlay};
