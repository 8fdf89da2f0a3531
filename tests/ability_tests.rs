//! Ability resolution integration tests.
//!
//! Each test builds an unshuffled side, validates a play against the board
//! and resolves it, the same path the match controller uses.

mod common;

use rust_gwent::board::Board;
use rust_gwent::cards::{CardId, Row};
use rust_gwent::core::{EntityId, InvalidMove, MatchConfig, PlayPlan, PlayerId};
use rust_gwent::effects::{revival_candidates, validate_play, Effect, PlayOutcome, PlayResolver};
use rust_gwent::players::PlayerState;

use common::{catalog, instances, player_state};

fn play(player: &mut PlayerState, board: &mut Board, plan: PlayPlan) -> PlayOutcome {
    play_with(player, board, plan, &MatchConfig::default())
}

fn play_with(player: &mut PlayerState, board: &mut Board, plan: PlayPlan, config: &MatchConfig) -> PlayOutcome {
    let validated = validate_play(player, board, PlayerId::PLAYER, &plan).unwrap();
    PlayResolver::resolve(validated, player, board, config).unwrap()
}

// =============================================================================
// Muster
// =============================================================================

/// Test that muster pulls the family from hand and deck into the same row.
#[test]
fn test_muster_pulls_family() {
    let catalog = catalog();
    let mut player = player_state(
        &catalog,
        PlayerId::PLAYER,
        0,
        &["arachas_drone", "arachas_warrior", "unit_2", "arachas_behemoth", "unit_3"],
        3,
    );
    let mut board = Board::new();
    let hand_before = player.hand().len();
    let pile_before = player.deck().draw_pile().len();

    let outcome = play(&mut player, &mut board, PlayPlan::new(0).in_row(Row::Close));

    assert!(outcome.mustered());
    assert_eq!(outcome.entered.len(), 3);
    assert_eq!(player.hand().len(), hand_before - 2);
    assert_eq!(player.deck().draw_pile().len(), pile_before - 1);
    assert_eq!(board.lane(PlayerId::PLAYER, Row::Close).cards().len(), 3);
    assert_eq!(board.side_value(PlayerId::PLAYER), 4 + 4 + 6);
    assert!(outcome
        .effects
        .contains(&Effect::Mustered { from_hand: 1, from_deck: 1 }));
}

/// Test that muster without relatives is a plain play.
#[test]
fn test_muster_without_matches() {
    let catalog = catalog();
    let mut player = player_state(&catalog, PlayerId::PLAYER, 0, &["arachas_drone", "unit_2"], 2);
    let mut board = Board::new();

    let outcome = play(&mut player, &mut board, PlayPlan::new(0).in_row(Row::Close));

    assert!(!outcome.mustered());
    assert_eq!(outcome.entered.as_slice(), &[EntityId(0)]);
    assert_eq!(player.hand().len(), 1);
}

// =============================================================================
// Spy
// =============================================================================

/// Test that a spy lands on the opponent's side and its player draws.
#[test]
fn test_spy_draws_for_player() {
    let catalog = catalog();
    let mut player = player_state(&catalog, PlayerId::PLAYER, 0, &["spy", "unit_1", "unit_2", "unit_3"], 1);
    let mut board = Board::new();

    let outcome = play(&mut player, &mut board, PlayPlan::new(0).in_row(Row::Close));

    assert_eq!(outcome.spy_draws(), 2);
    assert_eq!(player.hand().len(), 2);
    assert_eq!(player.deck().draw_pile().len(), 1);
    assert_eq!(board.side_value(PlayerId::OPPONENT), 4);
    assert_eq!(board.side_value(PlayerId::PLAYER), 0);
    assert_eq!(board.lane(PlayerId::OPPONENT, Row::Close).cards()[0].owner, PlayerId::PLAYER);
}

/// Test that spy draws stop at an empty draw pile.
#[test]
fn test_spy_draw_capped_by_pile() {
    let catalog = catalog();
    let mut player = player_state(&catalog, PlayerId::PLAYER, 0, &["spy"], 1);
    let mut board = Board::new();

    let outcome = play_with(
        &mut player,
        &mut board,
        PlayPlan::new(0).in_row(Row::Close),
        &MatchConfig::default().with_spy_draw(3),
    );

    assert_eq!(outcome.spy_draws(), 0);
    assert!(player.is_hand_empty());
}

// =============================================================================
// Medic
// =============================================================================

/// Test that a medic revives a non-hero unit from its owner's graveyard.
#[test]
fn test_medic_revives_unit() {
    let catalog = catalog();
    let mut player = player_state(&catalog, PlayerId::PLAYER, 0, &["medic"], 1);
    let mut board = Board::new();
    for card in instances(&catalog, PlayerId::PLAYER, 10, &["unit_7", "hero_5"]) {
        board.discard(card);
    }

    let candidates: Vec<_> = revival_candidates(&board, PlayerId::PLAYER)
        .into_iter()
        .map(|c| c.entity)
        .collect();
    assert_eq!(candidates, vec![EntityId(10)]);

    let outcome = play(
        &mut player,
        &mut board,
        PlayPlan::new(0).in_row(Row::Siege).reviving(EntityId(10), Row::Ranged),
    );

    assert_eq!(outcome.entered.as_slice(), &[EntityId(0), EntityId(10)]);
    assert_eq!(board.lane_value(PlayerId::PLAYER, Row::Ranged), 7);
    assert_eq!(board.side_value(PlayerId::PLAYER), 12);
    assert_eq!(board.graveyard(PlayerId::PLAYER).len(), 1);
}

/// Test that a hero in the graveyard cannot be revived.
#[test]
fn test_medic_rejects_hero() {
    let catalog = catalog();
    let player = player_state(&catalog, PlayerId::PLAYER, 0, &["medic"], 1);
    let mut board = Board::new();
    for card in instances(&catalog, PlayerId::PLAYER, 10, &["hero_5"]) {
        board.discard(card);
    }

    let plan = PlayPlan::new(0).in_row(Row::Siege).reviving(EntityId(10), Row::Close);
    let err = validate_play(&player, &board, PlayerId::PLAYER, &plan).unwrap_err();

    assert_eq!(err, InvalidMove::NotRevivable(CardId::new("hero_5")));
    assert_eq!(player.hand().len(), 1);
}

/// Test that a medic with an empty graveyard is a plain play.
#[test]
fn test_medic_empty_graveyard() {
    let catalog = catalog();
    let mut player = player_state(&catalog, PlayerId::PLAYER, 0, &["medic"], 1);
    let mut board = Board::new();

    let outcome = play(&mut player, &mut board, PlayPlan::new(0).in_row(Row::Siege));

    assert_eq!(outcome.entered.len(), 1);
    assert_eq!(board.side_value(PlayerId::PLAYER), 5);
}

// =============================================================================
// Weather and Specials
// =============================================================================

/// Test that a weather card needs no row and affects both sides.
#[test]
fn test_weather_play() {
    let catalog = catalog();
    let mut player = player_state(&catalog, PlayerId::PLAYER, 0, &["unit_8", "frost", "clear"], 3);
    let mut board = Board::new();
    for card in instances(&catalog, PlayerId::OPPONENT, 10, &["unit_6"]) {
        board.place_card(card, PlayerId::OPPONENT, Row::Close);
    }

    play(&mut player, &mut board, PlayPlan::new(0).in_row(Row::Close));
    // A row on a weather card is ignored.
    let outcome = play(&mut player, &mut board, PlayPlan::new(0).in_row(Row::Siege));
    assert_eq!(outcome.row, None);
    assert_eq!(outcome.entered.as_slice(), &[EntityId(1)]);
    assert_eq!(board.side_value(PlayerId::PLAYER), 1);
    assert_eq!(board.side_value(PlayerId::OPPONENT), 1);

    let outcome = play(&mut player, &mut board, PlayPlan::new(0));
    assert!(outcome.effects.contains(&Effect::WeatherCleared));
    // Clear goes straight to the graveyard without entering play.
    assert!(outcome.entered.is_empty());
    assert_eq!(board.side_value(PlayerId::PLAYER), 8);
    assert_eq!(board.graveyard(PlayerId::PLAYER).len(), 2);
}

/// Test that the scorch special destroys the strongest units on both sides.
#[test]
fn test_scorch_special() {
    let catalog = catalog();
    let mut player = player_state(&catalog, PlayerId::PLAYER, 0, &["unit_9", "unit_4", "scorch"], 3);
    let mut board = Board::new();
    for card in instances(&catalog, PlayerId::OPPONENT, 10, &["unit_9", "unit_2"]) {
        board.place_card(card, PlayerId::OPPONENT, Row::Ranged);
    }

    play(&mut player, &mut board, PlayPlan::new(0).in_row(Row::Close));
    play(&mut player, &mut board, PlayPlan::new(0).in_row(Row::Close));
    let outcome = play(&mut player, &mut board, PlayPlan::new(0));

    let mut destroyed = outcome.destroyed();
    destroyed.sort();
    assert_eq!(destroyed, vec![EntityId(0), EntityId(10)]);
    assert_eq!(board.side_value(PlayerId::PLAYER), 4);
    assert_eq!(board.side_value(PlayerId::OPPONENT), 2);
    // The scorch card itself plus the player's destroyed unit.
    assert_eq!(board.graveyard(PlayerId::PLAYER).len(), 2);
    assert_eq!(board.graveyard(PlayerId::OPPONENT).len(), 1);
}

/// Test that the horn special doubles the chosen lane.
#[test]
fn test_horn_special() {
    let catalog = catalog();
    let mut player = player_state(&catalog, PlayerId::PLAYER, 0, &["unit_6", "horn"], 2);
    let mut board = Board::new();

    play(&mut player, &mut board, PlayPlan::new(0).in_row(Row::Siege));
    let outcome = play(&mut player, &mut board, PlayPlan::new(0).in_row(Row::Siege));

    assert_eq!(outcome.entered.len(), 1);
    assert_eq!(board.lane(PlayerId::PLAYER, Row::Siege).multiplier(), 2);
    assert_eq!(board.side_value(PlayerId::PLAYER), 12);
}

// =============================================================================
// Validation
// =============================================================================

/// Test that invalid plays are rejected without touching the hand.
#[test]
fn test_invalid_plays_rejected() {
    let catalog = catalog();
    let mut player = player_state(&catalog, PlayerId::PLAYER, 0, &["hero_5", "decoy", "horn"], 3);
    let board = Board::new();
    let check = |player: &PlayerState, plan: PlayPlan| validate_play(player, &board, PlayerId::PLAYER, &plan);

    assert_eq!(
        check(&player, PlayPlan::new(5)).unwrap_err(),
        InvalidMove::HandIndexOutOfRange { index: 5, len: 3 }
    );
    assert_eq!(
        check(&player, PlayPlan::new(0).in_row(Row::Siege)).unwrap_err(),
        InvalidMove::RowNotAllowed {
            card: CardId::new("hero_5"),
            row: Row::Siege
        }
    );
    assert_eq!(
        check(&player, PlayPlan::new(0)).unwrap_err(),
        InvalidMove::MissingRow(CardId::new("hero_5"))
    );
    assert_eq!(
        check(&player, PlayPlan::new(1)).unwrap_err(),
        InvalidMove::NotPlayable(CardId::new("decoy"))
    );
    assert!(check(&player, PlayPlan::new(2).in_row(Row::Ranged)).is_ok());

    player.pass_turn();
    assert_eq!(
        check(&player, PlayPlan::new(0).in_row(Row::Close)).unwrap_err(),
        InvalidMove::AlreadyPassed(PlayerId::PLAYER)
    );
    assert_eq!(player.hand().len(), 3);
}
