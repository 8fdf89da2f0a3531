//! Board model: lanes, weather, multipliers and graveyards.
//!
//! ## Key Types
//!
//! - `Lane`: One row of one side, with its multiplier and horn slot
//! - `Board`: Six lanes, shared weather, per-side graveyards
//! - `card_score`: The single valuation rule for a card in a lane

#[allow(clippy::module_inception)]
pub mod board;
pub mod lane;

pub use board::Board;
pub use lane::{card_score, Lane, BASE_MULTIPLIER};
