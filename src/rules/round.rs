//! Round scoring and match results.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Board;
use crate::core::player::{PlayerId, PlayerMap};
use crate::players::PlayerState;

/// How a round was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// One side scored strictly more.
    Won(PlayerId),
    /// Equal scores; both sides lose a life.
    Tie,
}

impl RoundOutcome {
    /// Decide a round from the two side totals.
    #[must_use]
    pub fn from_scores(scores: &PlayerMap<u32>) -> Self {
        let player = scores[PlayerId::PLAYER];
        let opponent = scores[PlayerId::OPPONENT];
        match player.cmp(&opponent) {
            std::cmp::Ordering::Greater => RoundOutcome::Won(PlayerId::PLAYER),
            std::cmp::Ordering::Less => RoundOutcome::Won(PlayerId::OPPONENT),
            std::cmp::Ordering::Equal => RoundOutcome::Tie,
        }
    }

    /// Sides that lose a life.
    #[must_use]
    pub fn losers(self) -> SmallVec<[PlayerId; 2]> {
        match self {
            RoundOutcome::Won(winner) => SmallVec::from_slice(&[winner.opponent()]),
            RoundOutcome::Tie => SmallVec::from_slice(&PlayerId::BOTH),
        }
    }
}

/// Scores and outcome of a finished round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Round number (starts at 1).
    pub round: u32,
    /// Side totals when the round ended.
    pub scores: PlayerMap<u32>,
    pub outcome: RoundOutcome,
}

/// Side totals of the current board.
#[must_use]
pub fn score_round(board: &Board) -> PlayerMap<u32> {
    PlayerMap::new(|side| board.side_value(side))
}

/// Whether the round is over: both sides passed, or both hands are empty.
#[must_use]
pub fn round_is_over(players: &PlayerMap<PlayerState>) -> bool {
    let all_passed = players.iter().all(|(_, p)| p.has_passed());
    let all_empty = players.iter().all(|(_, p)| p.is_hand_empty());
    all_passed || all_empty
}

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Decide the match: strictly more lives wins, then the higher score of
    /// the final round.
    #[must_use]
    pub fn decide(lives: &PlayerMap<u8>, last_scores: &PlayerMap<u32>) -> Self {
        let by_lives = lives[PlayerId::PLAYER].cmp(&lives[PlayerId::OPPONENT]);
        let by_score = last_scores[PlayerId::PLAYER].cmp(&last_scores[PlayerId::OPPONENT]);
        match by_lives.then(by_score) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::PLAYER),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::OPPONENT),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Final state of a finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub result: GameResult,
    /// Lives left per side.
    pub lives: PlayerMap<u8>,
    /// The round that ended the match.
    pub final_round: RoundSummary,
}
