//! Reference AI: first playable card, first allowed row.
//!
//! No lookahead and no evaluation. A medic revives the first candidate into
//! its first allowed row. With nothing playable the AI passes.

use tracing::debug;

use super::controller::{ControllerKind, PlayerController, TurnContext};
use crate::cards::Ability;
use crate::core::action::{Move, PlayPlan};
use crate::core::error::GameError;
use crate::effects::allowed_rows;

/// Fixed-policy controller.
#[derive(Clone, Debug, Default)]
pub struct AiController {
    log: Vec<String>,
}

impl AiController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages received from the match.
    #[must_use]
    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// The move the policy picks, without side effects.
    #[must_use]
    pub fn choose(ctx: &TurnContext<'_>) -> Move {
        let Some((index, card)) = ctx
            .hand()
            .enumerate()
            .find(|(_, c)| c.definition().is_playable())
        else {
            return Move::Pass;
        };
        let def = card.definition();

        let mut plan = PlayPlan::new(index);
        if def.needs_row() {
            if let Some(&row) = allowed_rows(def).first() {
                plan = plan.in_row(row);
            }
        }

        if def.ability() == Ability::Medic {
            let revival = ctx.revival_candidates().into_iter().find_map(|c| {
                allowed_rows(c.definition())
                    .first()
                    .map(|&row| (c.entity, row))
            });
            if let Some((entity, row)) = revival {
                plan = plan.reviving(entity, row);
            }
        }

        Move::Play(plan)
    }
}

impl PlayerController for AiController {
    fn kind(&self) -> ControllerKind {
        ControllerKind::Ai
    }

    fn decide_move(&mut self, ctx: &TurnContext<'_>) -> Result<Move, GameError> {
        let mv = Self::choose(ctx);
        debug!(side = %ctx.side, ?mv, "ai move");
        Ok(mv)
    }

    fn notify(&mut self, message: &str) {
        self.log.push(message.to_string());
    }
}
