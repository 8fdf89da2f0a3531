//! Per-side draw pile and hand.
//!
//! The draw pile is ordered (front = top). The hand keeps insertion order so
//! hand indices stay stable for display between prompts. Graveyards are kept
//! by the `Board`, which is where destroyed cards arrive.

use im::Vector;
use tracing::debug;

use crate::cards::CardInstance;
use crate::core::error::InvalidMove;
use crate::core::rng::GameRng;

/// A side's draw pile and hand.
///
/// ```
/// use std::sync::Arc;
/// use rust_gwent::cards::{CardDefinition, CardInstance, Row};
/// use rust_gwent::core::{EntityId, PlayerId};
/// use rust_gwent::zones::Deck;
///
/// let def = Arc::new(CardDefinition::unit("ves", "Ves", 5, &[Row::Close]));
/// let cards = (0..3)
///     .map(|i| CardInstance::new(EntityId(i), PlayerId::PLAYER, Arc::clone(&def)))
///     .collect();
///
/// let mut deck = Deck::new(cards);
/// assert_eq!(deck.draw(5), 3);
/// assert_eq!(deck.hand().len(), 3);
/// assert!(deck.draw_pile().is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Deck {
    draw_pile: Vector<CardInstance>,
    hand: Vector<CardInstance>,
}

impl Deck {
    /// Create a deck whose draw pile holds `cards` in order, top first.
    #[must_use]
    pub fn new(cards: Vec<CardInstance>) -> Self {
        Self {
            draw_pile: cards.into_iter().collect(),
            hand: Vector::new(),
        }
    }

    /// Shuffle the draw pile.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<CardInstance> = self.draw_pile.iter().cloned().collect();
        rng.shuffle(&mut cards);
        self.draw_pile = cards.into_iter().collect();
    }

    /// Move up to `count` cards from the top of the pile into the hand.
    ///
    /// Returns the number of cards actually drawn. Drawing from an empty
    /// pile is not an error.
    pub fn draw(&mut self, count: usize) -> usize {
        let drawn = count.min(self.draw_pile.len());
        for _ in 0..drawn {
            if let Some(card) = self.draw_pile.pop_front() {
                self.hand.push_back(card);
            }
        }
        debug!(requested = count, drawn, "draw");
        drawn
    }

    /// The current hand.
    #[must_use]
    pub fn hand(&self) -> &Vector<CardInstance> {
        &self.hand
    }

    /// The remaining draw pile, top first.
    #[must_use]
    pub fn draw_pile(&self) -> &Vector<CardInstance> {
        &self.draw_pile
    }

    /// Remove and return the card at a hand index.
    pub fn take_from_hand(&mut self, index: usize) -> Result<CardInstance, InvalidMove> {
        if index >= self.hand.len() {
            return Err(InvalidMove::HandIndexOutOfRange {
                index,
                len: self.hand.len(),
            });
        }
        Ok(self.hand.remove(index))
    }

    /// Remove every hand card matching `pred`, in hand order.
    pub fn take_from_hand_where<F>(&mut self, pred: F) -> Vec<CardInstance>
    where
        F: Fn(&CardInstance) -> bool,
    {
        extract_where(&mut self.hand, pred)
    }

    /// Remove every draw-pile card matching `pred`, top first.
    pub fn take_from_pile_where<F>(&mut self, pred: F) -> Vec<CardInstance>
    where
        F: Fn(&CardInstance) -> bool,
    {
        extract_where(&mut self.draw_pile, pred)
    }

    /// Whether the hand is empty.
    #[must_use]
    pub fn is_hand_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// Iterate over every card in the pile and the hand.
    pub fn iter(&self) -> impl Iterator<Item = &CardInstance> {
        self.draw_pile.iter().chain(self.hand.iter())
    }
}

fn extract_where<F>(cards: &mut Vector<CardInstance>, pred: F) -> Vec<CardInstance>
where
    F: Fn(&CardInstance) -> bool,
{
    let (taken, kept): (Vector<CardInstance>, Vector<CardInstance>) =
        cards.iter().cloned().partition(|c| pred(c));
    *cards = kept;
    taken.into_iter().collect()
}
