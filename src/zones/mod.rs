//! Card zones outside the board.
//!
//! ## Key Types
//!
//! - `Deck`: A side's draw pile and hand
//! - `Zone`: Every place a card instance can be
//! - `ZoneCensus`: Snapshot that checks zone exclusivity

pub mod census;
pub mod deck;

pub use census::{CensusViolation, Location, Zone, ZoneCensus};
pub use deck::Deck;
