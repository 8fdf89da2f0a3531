//! The input/output surface a human controller talks to.
//!
//! Rendering and input live outside the engine. A `View` is asked for one
//! decision at a time and blocks until it has an answer; `Cancel` (or
//! `None`) means "no decision at this prompt".

use crate::cards::{CardDefinition, Row};

/// Answer to "which card do you play?".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandChoice {
    /// Play the card at this hand index.
    Play(usize),
    /// Pass for the rest of the round.
    Pass,
    /// Abandon the prompt.
    Cancel,
}

/// Decision and log surface for a human player.
pub trait View {
    /// Pick a card from the hand, pass, or cancel.
    fn choose_hand_index(&mut self, hand: &[&CardDefinition]) -> HandChoice;

    /// Pick a row for `card` among `allowed`. `None` cancels.
    fn choose_lane(&mut self, card: &CardDefinition, allowed: &[Row]) -> Option<Row>;

    /// Pick a graveyard card for a medic. `None` revives nothing.
    fn choose_graveyard_card(&mut self, candidates: &[&CardDefinition]) -> Option<usize>;

    /// Show a line in the match log.
    fn append_log_message(&mut self, message: &str);
}

impl<V: View + ?Sized> View for Box<V> {
    fn choose_hand_index(&mut self, hand: &[&CardDefinition]) -> HandChoice {
        (**self).choose_hand_index(hand)
    }

    fn choose_lane(&mut self, card: &CardDefinition, allowed: &[Row]) -> Option<Row> {
        (**self).choose_lane(card, allowed)
    }

    fn choose_graveyard_card(&mut self, candidates: &[&CardDefinition]) -> Option<usize> {
        (**self).choose_graveyard_card(candidates)
    }

    fn append_log_message(&mut self, message: &str) {
        (**self).append_log_message(message);
    }
}
