//! Play resolution - applying a validated play to the match.
//!
//! Dispatch is by card kind, then by unit ability. Exactly one ability
//! fires per play; cards brought in by muster or medic do not fire their
//! own abilities.
//!
//! | card | board effect |
//! |------|--------------|
//! | unit | placed (a spy on the opposing side), then its ability |
//! | weather | joins the weather zone, or clears it |
//! | Commander's Horn | takes the lane's horn slot, multiplier set |
//! | Scorch special | whole-board scorch, card to graveyard |

use tracing::debug;

use super::effect::{Effect, PlayOutcome};
use super::targeting::ValidatedPlay;
use crate::board::Board;
use crate::cards::{Ability, CardInstance, CardKind, Row, SpecialKind, WeatherKind};
use crate::core::config::MatchConfig;
use crate::core::error::InvalidMove;
use crate::core::player::PlayerId;
use crate::players::PlayerState;

/// Applies validated plays.
pub struct PlayResolver;

impl PlayResolver {
    /// Take the card out of the player's hand and apply it.
    ///
    /// ## Errors
    ///
    /// Only fails if the state changed between validation and resolution,
    /// in which case nothing was mutated.
    pub fn resolve(
        play: ValidatedPlay,
        player: &mut PlayerState,
        board: &mut Board,
        config: &MatchConfig,
    ) -> Result<PlayOutcome, InvalidMove> {
        let card = player.deck_mut().take_from_hand(play.hand_index())?;
        let side = play.side();
        let mut outcome = PlayOutcome::new(card.card_id().clone(), play.row());

        debug!(%side, card = %card, row = ?play.row(), "resolve play");

        let kind = card.definition().kind.clone();
        match (kind, play.row()) {
            (CardKind::Unit(_), Some(row)) => {
                Self::resolve_unit(card, &play, row, player, board, config, &mut outcome);
            }
            (CardKind::Weather(WeatherKind::Clear), _) => {
                // Clear goes straight to the graveyard; it never enters play.
                board.apply_weather(card);
                outcome.effects.push(Effect::WeatherCleared);
            }
            (CardKind::Weather(kind), _) => {
                outcome.entered.push(card.entity);
                board.apply_weather(card);
                outcome.effects.push(Effect::Weather(kind));
            }
            (CardKind::Special(SpecialKind::CommandersHorn), Some(row)) => {
                outcome.entered.push(card.entity);
                board.play_horn(card, side, row, config.horn_multiplier);
                outcome.effects.push(Effect::Multiplier {
                    side,
                    row,
                    multiplier: config.horn_multiplier,
                });
            }
            (CardKind::Special(SpecialKind::Scorch), _) => {
                let destroyed = board.scorch();
                board.discard(card);
                outcome.effects.push(Effect::Scorched {
                    destroyed: destroyed.iter().map(|c| c.entity).collect(),
                });
            }
            (_, _) => {
                // Validation rejects everything else; keep the card rather than lose it.
                debug_assert!(false, "unresolvable play {:?}", play);
                board.discard(card);
            }
        }

        Ok(outcome)
    }

    fn resolve_unit(
        card: CardInstance,
        play: &ValidatedPlay,
        row: Row,
        player: &mut PlayerState,
        board: &mut Board,
        config: &MatchConfig,
        outcome: &mut PlayOutcome,
    ) {
        let side = play.side();
        let ability = card.ability();
        let prefix = card.definition().muster_prefix().to_string();

        Self::place(card, side, row, board, outcome);

        match ability {
            Ability::Spy => {
                let drawn = player.draw(config.spy_draw);
                outcome.effects.push(Effect::SpyDraw { drawn });
            }
            Ability::Muster => {
                let same_family =
                    |c: &CardInstance| c.is_unit() && c.definition().muster_prefix() == prefix;
                let from_hand = player.deck_mut().take_from_hand_where(same_family);
                let from_deck = player.deck_mut().take_from_pile_where(same_family);
                outcome.effects.push(Effect::Mustered {
                    from_hand: from_hand.len(),
                    from_deck: from_deck.len(),
                });
                for member in from_hand.into_iter().chain(from_deck) {
                    Self::place(member, side, row, board, outcome);
                }
            }
            Ability::Medic => {
                if let Some(revival) = play.revive() {
                    if let Some(revived) = board.take_from_graveyard(side, revival.card) {
                        outcome.effects.push(Effect::Revived {
                            card: revived.entity,
                            row: revival.row,
                        });
                        Self::place(revived, side, revival.row, board, outcome);
                    }
                }
            }
            Ability::Scorch => {
                let destroyed = board.scorch_lane(side.opponent(), row);
                outcome.effects.push(Effect::Scorched {
                    destroyed: destroyed.iter().map(|c| c.entity).collect(),
                });
            }
            Ability::Horn => {
                board.set_lane_multiplier(side, row, config.horn_multiplier);
                outcome.effects.push(Effect::Multiplier {
                    side,
                    row,
                    multiplier: config.horn_multiplier,
                });
            }
            Ability::None | Ability::MoraleBoost | Ability::TightBond => {}
        }
    }

    fn place(card: CardInstance, side: PlayerId, row: Row, board: &mut Board, outcome: &mut PlayOutcome) {
        let entity = card.entity;
        let spy = board.place_card(card, side, row);
        let target = if spy { side.opponent() } else { side };
        outcome.entered.push(entity);
        outcome.effects.push(Effect::Placed {
            card: entity,
            side: target,
            row,
        });
    }
}
