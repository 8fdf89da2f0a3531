//! Per-side match state: lives, pass flag and deck.

use im::Vector;
use tracing::debug;

use crate::cards::{CardInstance, Faction};
use crate::zones::Deck;

/// State of one side for the whole match.
///
/// Mutated by the match (`lose_life`, `pass_turn`, `reset_for_round`) and by
/// card play (drawing and taking cards through the deck).
#[derive(Clone, Debug)]
pub struct PlayerState {
    name: String,
    faction: Faction,
    lives: u8,
    passed: bool,
    deck: Deck,
}

impl PlayerState {
    /// Create a side with a ready deck.
    #[must_use]
    pub fn new(name: impl Into<String>, faction: Faction, deck: Deck, lives: u8) -> Self {
        Self {
            name: name.into(),
            faction,
            lives,
            passed: false,
            deck,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn faction(&self) -> Faction {
        self.faction
    }

    #[must_use]
    pub fn lives(&self) -> u8 {
        self.lives
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// The current hand.
    #[must_use]
    pub fn hand(&self) -> &Vector<CardInstance> {
        self.deck.hand()
    }

    #[must_use]
    pub fn is_hand_empty(&self) -> bool {
        self.deck.is_hand_empty()
    }

    /// Draw up to `count` cards. Returns how many were drawn.
    pub fn draw(&mut self, count: usize) -> usize {
        self.deck.draw(count)
    }

    /// Lose one life. Returns `true` if the side is now eliminated.
    pub fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        debug!(player = %self.name, lives = self.lives, "lost a life");
        self.is_eliminated()
    }

    /// Give up the rest of the round.
    pub fn pass_turn(&mut self) {
        self.passed = true;
    }

    #[must_use]
    pub fn has_passed(&self) -> bool {
        self.passed
    }

    /// Clear per-round flags.
    pub fn reset_for_round(&mut self) {
        self.passed = false;
    }

    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.lives == 0
    }
}

impl std::fmt::Display for PlayerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
