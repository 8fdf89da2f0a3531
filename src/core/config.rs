//! Match configuration.
//!
//! Every tunable constant of a match lives in `MatchConfig`. The defaults
//! reproduce the standard rules: two lives, a ten-card opening hand, spies
//! draw two, horns double a lane.
//!
//! ```
//! use rust_gwent::core::{MatchConfig, PlayerId};
//!
//! let config = MatchConfig::default()
//!     .with_seed(7)
//!     .with_hand_size(8)
//!     .with_starting_player(PlayerId::OPPONENT);
//!
//! assert_eq!(config.initial_lives, 2);
//! assert_eq!(config.hand_size, 8);
//! ```

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// Lives each side starts a match with.
pub const DEFAULT_INITIAL_LIVES: u8 = 2;

/// Cards drawn into each opening hand.
pub const DEFAULT_HAND_SIZE: usize = 10;

/// Cards drawn by the player of a spy.
pub const DEFAULT_SPY_DRAW: usize = 2;

/// Multiplier a horn applies to its lane.
pub const DEFAULT_HORN_MULTIPLIER: u32 = 2;

/// Configuration for a single match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Lives each side starts with. A side at zero lives loses the match.
    pub initial_lives: u8,

    /// Size of the opening hand, capped by deck size.
    pub hand_size: usize,

    /// Cards drawn when a spy is played.
    pub spy_draw: usize,

    /// Lane multiplier set by a horn.
    pub horn_multiplier: u32,

    /// Side that moves first in every round.
    pub starting_player: PlayerId,

    /// Seed for deck shuffling.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            initial_lives: DEFAULT_INITIAL_LIVES,
            hand_size: DEFAULT_HAND_SIZE,
            spy_draw: DEFAULT_SPY_DRAW,
            horn_multiplier: DEFAULT_HORN_MULTIPLIER,
            starting_player: PlayerId::PLAYER,
            seed: 0,
        }
    }
}

impl MatchConfig {
    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the starting lives.
    #[must_use]
    pub fn with_initial_lives(mut self, lives: u8) -> Self {
        assert!(lives > 0, "A match needs at least one life per side");
        self.initial_lives = lives;
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the number of cards a spy draws.
    #[must_use]
    pub fn with_spy_draw(mut self, count: usize) -> Self {
        self.spy_draw = count;
        self
    }

    /// Set the horn multiplier.
    #[must_use]
    pub fn with_horn_multiplier(mut self, multiplier: u32) -> Self {
        self.horn_multiplier = multiplier;
        self
    }

    /// Set the side that moves first each round.
    #[must_use]
    pub fn with_starting_player(mut self, player: PlayerId) -> Self {
        self.starting_player = player;
        self
    }
}
