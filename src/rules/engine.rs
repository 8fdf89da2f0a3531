//! The match state machine.
//!
//! `MatchController` owns the board and both sides for the whole match and
//! advances one turn per `step()`:
//!
//! ```text
//! PlayerTurn <-> OpponentTurn --(both passed / both hands empty)--> RoundEnd
//! RoundEnd --(a side at zero lives)--> MatchEnd
//! RoundEnd --(otherwise: clear board, reset passes)--> starting side's turn
//! ```
//!
//! A side whose hand is empty, or who already passed, is passed
//! automatically without asking its controller.

use std::sync::Arc;

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span};

use super::round::{round_is_over, score_round, GameResult, MatchResult, RoundOutcome, RoundSummary};
use crate::board::Board;
use crate::cards::{CardCatalog, CardId, CardInstance, Faction};
use crate::core::action::{Move, MoveKind, MoveRecord};
use crate::core::config::MatchConfig;
use crate::core::entity::EntityAllocator;
use crate::core::error::GameError;
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::rng::GameRng;
use crate::effects::{validate_play, PlayOutcome, PlayResolver};
use crate::players::{ControllerKind, PlayerController, PlayerState, TurnContext};
use crate::zones::{Deck, Zone, ZoneCensus};

/// State of the match state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    PlayerTurn,
    OpponentTurn,
    /// The round is over and waits to be scored.
    RoundEnd,
    /// Terminal.
    MatchEnd,
}

impl Phase {
    /// The turn phase of a side.
    #[must_use]
    pub fn turn_of(side: PlayerId) -> Self {
        if side == PlayerId::PLAYER {
            Phase::PlayerTurn
        } else {
            Phase::OpponentTurn
        }
    }

    /// The side to move, if this is a turn phase.
    #[must_use]
    pub fn active_side(self) -> Option<PlayerId> {
        match self {
            Phase::PlayerTurn => Some(PlayerId::PLAYER),
            Phase::OpponentTurn => Some(PlayerId::OPPONENT),
            Phase::RoundEnd | Phase::MatchEnd => None,
        }
    }
}

/// What one call to `MatchController::step` did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// A side played a card.
    Played { side: PlayerId, outcome: PlayOutcome },
    /// A side chose to pass.
    Passed(PlayerId),
    /// A side was passed without being asked.
    AutoPassed(PlayerId),
    /// The controller cancelled; the same side is asked again next step.
    Cancelled(PlayerId),
    /// A round was scored and the next one set up.
    RoundEnded(RoundSummary),
    /// The final round was scored.
    MatchEnded(MatchResult),
}

/// Turn/round/match state machine for one match.
pub struct MatchController {
    config: MatchConfig,
    board: Board,
    players: PlayerMap<PlayerState>,
    controllers: PlayerMap<Box<dyn PlayerController>>,
    phase: Phase,
    round: u32,
    turn: u32,
    last_scores: PlayerMap<u32>,
    history: Vector<MoveRecord>,
    result: Option<MatchResult>,
}

impl MatchController {
    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current round (starts at 1).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// The side to move, if any.
    #[must_use]
    pub fn active_side(&self) -> Option<PlayerId> {
        self.phase.active_side()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn player(&self, side: PlayerId) -> &PlayerState {
        &self.players[side]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<PlayerState> {
        &self.players
    }

    #[must_use]
    pub fn controller_kind(&self, side: PlayerId) -> ControllerKind {
        self.controllers[side].kind()
    }

    /// Side totals on the current board.
    #[must_use]
    pub fn scores(&self) -> PlayerMap<u32> {
        score_round(&self.board)
    }

    /// Totals at the end of the last scored round.
    #[must_use]
    pub fn last_scores(&self) -> &PlayerMap<u32> {
        &self.last_scores
    }

    /// Every move taken so far.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::MatchEnd
    }

    /// The final result, once the match has ended.
    #[must_use]
    pub fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    /// Locate every card instance in the match.
    #[must_use]
    pub fn census(&self) -> ZoneCensus {
        let mut census = ZoneCensus::new();
        for (side, player) in self.players.iter() {
            census.record_all(side, Zone::DrawPile, player.deck().draw_pile());
            census.record_all(side, Zone::Hand, player.hand());
        }
        self.board.record_census(&mut census);
        census
    }

    // === State machine ===

    /// Advance the match by one turn or one round resolution.
    ///
    /// ## Errors
    ///
    /// - `MatchAlreadyEnded` once the match is over
    /// - `InvalidMove` if a controller returned a play that fails validation
    /// - Any error a controller returns
    pub fn step(&mut self) -> Result<Step, GameError> {
        let _span = info_span!("round", round = self.round).entered();

        let step = match self.phase {
            Phase::MatchEnd => return Err(GameError::MatchAlreadyEnded),
            Phase::RoundEnd => self.end_round(),
            Phase::PlayerTurn => self.take_turn(PlayerId::PLAYER)?,
            Phase::OpponentTurn => self.take_turn(PlayerId::OPPONENT)?,
        };

        debug_assert!(
            self.census().is_consistent(),
            "zone census failed: {:?}",
            self.census().violations()
        );
        Ok(step)
    }

    /// Step until the match ends or a controller cancels.
    ///
    /// Returns `None` when a controller cancelled; the match is left as it
    /// was and may be resumed with `step` or `run`.
    pub fn run(&mut self) -> Result<Option<MatchResult>, GameError> {
        loop {
            match self.step()? {
                Step::MatchEnded(result) => return Ok(Some(result)),
                Step::Cancelled(side) => {
                    info!(%side, "match abandoned");
                    return Ok(None);
                }
                _ => {}
            }
        }
    }

    fn take_turn(&mut self, side: PlayerId) -> Result<Step, GameError> {
        let player = &self.players[side];
        if player.is_hand_empty() || player.has_passed() {
            self.players[side].pass_turn();
            self.record(side, MoveKind::AutoPass);
            self.finish_turn(side);
            return Ok(Step::AutoPassed(side));
        }

        let mv = {
            let ctx = TurnContext {
                side,
                player: &self.players[side],
                opponent: &self.players[side.opponent()],
                board: &self.board,
                round: self.round,
            };
            self.controllers[side].decide_move(&ctx)?
        };

        let step = match mv {
            Move::Cancel => return Ok(Step::Cancelled(side)),
            Move::Pass => {
                self.players[side].pass_turn();
                self.record(side, MoveKind::Pass);
                let message = format!("{} passed", self.players[side]);
                info!(player = %self.players[side], "passed");
                self.notify_both(&message);
                Step::Passed(side)
            }
            Move::Play(plan) => {
                let play = validate_play(&self.players[side], &self.board, side, &plan)?;
                let played = self.players[side]
                    .hand()
                    .get(play.hand_index())
                    .map(|c| c.name().to_string())
                    .unwrap_or_default();
                let outcome =
                    PlayResolver::resolve(play, &mut self.players[side], &mut self.board, &self.config)?;

                self.record(
                    side,
                    MoveKind::Play {
                        card: outcome.card.clone(),
                        row: outcome.row,
                        entered: outcome.entered.clone(),
                    },
                );
                debug!(player = %self.players[side], card = %outcome.card, effects = outcome.effects.len(), "played");

                let name = self.players[side].name().to_string();
                self.controllers[side.opponent()].notify(&format!("{} played {}", name, played));
                for effect in &outcome.effects {
                    self.controllers[side].notify(&effect.to_string());
                }
                Step::Played { side, outcome }
            }
        };

        self.finish_turn(side);
        Ok(step)
    }

    fn finish_turn(&mut self, side: PlayerId) {
        self.turn += 1;
        self.phase = if round_is_over(&self.players) {
            Phase::RoundEnd
        } else {
            Phase::turn_of(side.opponent())
        };
    }

    fn end_round(&mut self) -> Step {
        let scores = score_round(&self.board);
        let outcome = RoundOutcome::from_scores(&scores);
        self.last_scores = scores.clone();

        let mut eliminated = false;
        for loser in outcome.losers() {
            eliminated |= self.players[loser].lose_life();
        }

        let summary = RoundSummary {
            round: self.round,
            scores,
            outcome,
        };
        info!(
            player = summary.scores[PlayerId::PLAYER],
            opponent = summary.scores[PlayerId::OPPONENT],
            ?outcome,
            "round over"
        );
        self.notify_both(&format!(
            "Round {} over: {} - {}",
            summary.round,
            summary.scores[PlayerId::PLAYER],
            summary.scores[PlayerId::OPPONENT]
        ));

        if eliminated {
            let lives = PlayerMap::new(|side| self.players[side].lives());
            let result = MatchResult {
                result: GameResult::decide(&lives, &self.last_scores),
                lives,
                final_round: summary,
            };
            info!(result = ?result.result, "match over");
            self.phase = Phase::MatchEnd;
            self.result = Some(result.clone());
            return Step::MatchEnded(result);
        }

        self.board.clear_round();
        for (_, player) in self.players.iter_mut() {
            player.reset_for_round();
        }
        self.round += 1;
        self.phase = Phase::turn_of(self.config.starting_player);
        Step::RoundEnded(summary)
    }

    fn record(&mut self, player: PlayerId, kind: MoveKind) {
        self.history.push_back(MoveRecord {
            round: self.round,
            turn: self.turn + 1,
            player,
            kind,
        });
    }

    fn notify_both(&mut self, message: &str) {
        for (_, controller) in self.controllers.iter_mut() {
            controller.notify(message);
        }
    }
}

struct SideSetup {
    name: String,
    faction: Faction,
    deck: Vec<CardId>,
    controller: Box<dyn PlayerController>,
}

/// Builder for a `MatchController`.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use rust_gwent::cards::{CardCatalog, CardDefinition, CardId, Faction, Row};
/// use rust_gwent::core::{MatchConfig, PlayerId};
/// use rust_gwent::players::AiController;
/// use rust_gwent::rules::MatchBuilder;
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardDefinition::unit("ves", "Ves", 5, &[Row::Close]));
/// let deck = vec![CardId::new("ves"); 4];
///
/// let mut controller = MatchBuilder::new(Arc::new(catalog))
///     .config(MatchConfig::default().with_hand_size(2))
///     .side(PlayerId::PLAYER, "Geralt", Faction::Neutral, deck.clone(), Box::new(AiController::new()))
///     .side(PlayerId::OPPONENT, "Yennefer", Faction::Neutral, deck, Box::new(AiController::new()))
///     .build()
///     .unwrap();
///
/// assert_eq!(controller.player(PlayerId::PLAYER).hand().len(), 2);
/// assert!(controller.run().unwrap().is_some());
/// assert!(controller.is_over());
/// ```
pub struct MatchBuilder {
    catalog: Arc<CardCatalog>,
    config: MatchConfig,
    sides: [Option<SideSetup>; 2],
}

impl MatchBuilder {
    #[must_use]
    pub fn new(catalog: Arc<CardCatalog>) -> Self {
        Self {
            catalog,
            config: MatchConfig::default(),
            sides: [None, None],
        }
    }

    #[must_use]
    pub fn config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    /// Configure one side: display name, faction, deck list and controller.
    #[must_use]
    pub fn side(
        mut self,
        side: PlayerId,
        name: impl Into<String>,
        faction: Faction,
        deck: Vec<CardId>,
        controller: Box<dyn PlayerController>,
    ) -> Self {
        self.sides[side.index()] = Some(SideSetup {
            name: name.into(),
            faction,
            deck,
            controller,
        });
        self
    }

    /// Resolve both decks, shuffle them and deal the opening hands.
    ///
    /// Panics if a side was not configured.
    ///
    /// ## Errors
    ///
    /// `UnknownCardId` if a deck names a card the catalog does not know.
    pub fn build(self) -> Result<MatchController, GameError> {
        let Self {
            catalog,
            config,
            sides: [player, opponent],
        } = self;
        let (Some(player), Some(opponent)) = (player, opponent) else {
            panic!("Both sides must be configured before building a match");
        };

        let rng = GameRng::new(config.seed);
        let mut alloc = EntityAllocator::new();
        let mut states = Vec::with_capacity(2);
        let mut controllers = Vec::with_capacity(2);

        for (side, setup) in PlayerId::BOTH.into_iter().zip([player, opponent]) {
            let cards = setup
                .deck
                .iter()
                .map(|id| Ok(CardInstance::new(alloc.next_id(), side, catalog.resolve(id)?)))
                .collect::<Result<Vec<_>, GameError>>()?;

            let mut deck = Deck::new(cards);
            deck.shuffle(&mut rng.for_context(&format!("deck-{}", side.index())));
            let drawn = deck.draw(config.hand_size);
            info!(%side, name = %setup.name, deck = setup.deck.len(), drawn, "side ready");

            states.push(PlayerState::new(setup.name, setup.faction, deck, config.initial_lives));
            controllers.push(setup.controller);
        }

        let [player_state, opponent_state]: [PlayerState; 2] = match states.try_into() {
            Ok(states) => states,
            Err(_) => unreachable!("exactly two sides are built"),
        };
        let [player_controller, opponent_controller]: [Box<dyn PlayerController>; 2] =
            match controllers.try_into() {
                Ok(controllers) => controllers,
                Err(_) => unreachable!("exactly two sides are built"),
            };

        Ok(MatchController {
            phase: Phase::turn_of(config.starting_player),
            config,
            board: Board::new(),
            players: PlayerMap::from_pair(player_state, opponent_state),
            controllers: PlayerMap::from_pair(player_controller, opponent_controller),
            round: 1,
            turn: 0,
            last_scores: PlayerMap::with_value(0),
            history: Vector::new(),
            result: None,
        })
    }
}
