//! Human controller: every decision comes from a `View`.

use tracing::{debug, warn};

use super::controller::{ControllerKind, PlayerController, TurnContext};
use super::view::{HandChoice, View};
use crate::cards::{Ability, CardDefinition, Row};
use crate::core::action::{Move, PlayPlan};
use crate::core::error::{GameError, InvalidMove};
use crate::effects::allowed_rows;

/// Result of one pass through the prompts.
enum Prompt {
    Done(Move),
    Retry,
}

/// Controller that asks a view for every choice.
///
/// Invalid answers are reported to the view's log and asked again. A
/// cancelled row prompt (for the played or the revived card) goes back to
/// the card prompt; a cancelled card prompt becomes `Move::Cancel`.
pub struct HumanController<V: View> {
    view: V,
}

impl<V: View> HumanController<V> {
    #[must_use]
    pub fn new(view: V) -> Self {
        Self { view }
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Give back the view.
    #[must_use]
    pub fn into_view(self) -> V {
        self.view
    }

    fn prompt(&mut self, ctx: &TurnContext<'_>) -> Prompt {
        let hand: Vec<&CardDefinition> = ctx.hand().map(|c| c.definition()).collect();

        let index = match self.view.choose_hand_index(&hand) {
            HandChoice::Pass => return Prompt::Done(Move::Pass),
            HandChoice::Cancel => return Prompt::Done(Move::Cancel),
            HandChoice::Play(index) => index,
        };

        let Some(card) = hand.get(index).copied() else {
            self.reject(InvalidMove::HandIndexOutOfRange {
                index,
                len: hand.len(),
            });
            return Prompt::Retry;
        };
        if !card.is_playable() {
            self.reject(InvalidMove::NotPlayable(card.id.clone()));
            return Prompt::Retry;
        }

        let mut plan = PlayPlan::new(index);

        if card.needs_row() {
            let allowed = allowed_rows(card);
            match self.view.choose_lane(card, &allowed) {
                Some(row) => plan = plan.in_row(row),
                None => return Prompt::Retry,
            }
        }

        if card.ability() == Ability::Medic {
            let candidates = ctx.revival_candidates();
            if !candidates.is_empty() {
                let defs: Vec<&CardDefinition> = candidates.iter().map(|c| c.definition()).collect();
                if let Some(choice) = self.view.choose_graveyard_card(&defs) {
                    let Some(target) = candidates.get(choice) else {
                        self.reject(InvalidMove::GraveyardIndexOutOfRange {
                            index: choice,
                            len: candidates.len(),
                        });
                        return Prompt::Retry;
                    };
                    // A cancelled row prompt goes back to the card prompt.
                    let Some(row) = self.revival_row(target.definition()) else {
                        return Prompt::Retry;
                    };
                    plan = plan.reviving(target.entity, row);
                }
            }
        }

        match ctx.validate(&plan) {
            Ok(_) => Prompt::Done(Move::Play(plan)),
            Err(err) => {
                self.reject(err);
                Prompt::Retry
            }
        }
    }

    /// Row for a revived card: asked only when there is a choice.
    fn revival_row(&mut self, card: &CardDefinition) -> Option<Row> {
        let allowed = allowed_rows(card);
        match allowed.as_slice() {
            [] => None,
            [only] => Some(*only),
            _ => self.view.choose_lane(card, &allowed),
        }
    }

    fn reject(&mut self, err: InvalidMove) {
        warn!(%err, "rejected input");
        self.view.append_log_message(&format!("Invalid move: {}", err));
    }
}

impl<V: View> PlayerController for HumanController<V> {
    fn kind(&self) -> ControllerKind {
        ControllerKind::Human
    }

    fn decide_move(&mut self, ctx: &TurnContext<'_>) -> Result<Move, GameError> {
        loop {
            match self.prompt(ctx) {
                Prompt::Done(mv) => {
                    debug!(side = %ctx.side, ?mv, "human move");
                    return Ok(mv);
                }
                Prompt::Retry => continue,
            }
        }
    }

    fn notify(&mut self, message: &str) {
        self.view.append_log_message(message);
    }
}
