//! Board scoring and zone-movement integration tests.
//!
//! These tests drive `Board` directly: weather, multipliers, heroes,
//! scorch and end-of-round cleanup.

mod common;

use std::sync::Arc;

use rust_gwent::board::Board;
use rust_gwent::cards::{CardDefinition, CardInstance, Row};
use rust_gwent::core::{EntityId, PlayerId};
use rust_gwent::zones::{Zone, ZoneCensus};

use common::{catalog, instances};

fn card(id: &str, owner: PlayerId, entity: u32) -> CardInstance {
    instances(&catalog(), owner, entity, &[id]).remove(0)
}

// =============================================================================
// Weather and Multipliers
// =============================================================================

/// Test that weather and multiplier combine the same way for every unit.
#[test]
fn test_weather_symmetry() {
    let mut board = Board::new();
    board.place_card(card("unit_5", PlayerId::PLAYER, 0), PlayerId::PLAYER, Row::Close);
    assert_eq!(board.side_value(PlayerId::PLAYER), 5);

    board.set_lane_multiplier(PlayerId::PLAYER, Row::Close, 2);
    assert_eq!(board.side_value(PlayerId::PLAYER), 10);

    board.apply_weather(card("frost", PlayerId::OPPONENT, 1));
    assert!(board.is_weathered(Row::Close));
    assert_eq!(board.side_value(PlayerId::PLAYER), 2);

    board.set_lane_multiplier(PlayerId::PLAYER, Row::Close, 1);
    assert_eq!(board.side_value(PlayerId::PLAYER), 1);
}

/// Test that weather hits both sides' lanes in its row.
#[test]
fn test_weather_affects_both_sides() {
    let mut board = Board::new();
    board.place_card(card("unit_8", PlayerId::PLAYER, 0), PlayerId::PLAYER, Row::Close);
    board.place_card(card("unit_6", PlayerId::OPPONENT, 1), PlayerId::OPPONENT, Row::Close);
    board.place_card(card("unit_3", PlayerId::OPPONENT, 2), PlayerId::OPPONENT, Row::Siege);

    board.apply_weather(card("frost", PlayerId::PLAYER, 3));

    assert_eq!(board.side_value(PlayerId::PLAYER), 1);
    assert_eq!(board.side_value(PlayerId::OPPONENT), 1 + 3);
}

/// Test that a hero ignores weather but not multipliers.
#[test]
fn test_hero_immunity() {
    let mut board = Board::new();
    board.place_card(card("hero_5", PlayerId::PLAYER, 0), PlayerId::PLAYER, Row::Close);
    board.apply_weather(card("frost", PlayerId::OPPONENT, 1));

    assert_eq!(board.side_value(PlayerId::PLAYER), 5);

    board.set_lane_multiplier(PlayerId::PLAYER, Row::Close, 2);
    assert_eq!(board.side_value(PlayerId::PLAYER), 10);
}

/// Test that clear weather removes every weather card and itself.
#[test]
fn test_clear_weather() {
    let mut board = Board::new();
    board.place_card(card("unit_7", PlayerId::PLAYER, 0), PlayerId::PLAYER, Row::Close);
    board.apply_weather(card("frost", PlayerId::OPPONENT, 1));
    assert_eq!(board.side_value(PlayerId::PLAYER), 1);

    board.apply_weather(card("clear", PlayerId::PLAYER, 2));

    assert!(board.active_weather().is_empty());
    assert!(board.weather_cards().is_empty());
    assert_eq!(board.side_value(PlayerId::PLAYER), 7);
    assert_eq!(board.graveyard(PlayerId::OPPONENT).len(), 1);
    assert_eq!(board.graveyard(PlayerId::PLAYER).len(), 1);
}

/// Test that a horn special sits in the horn slot and scores nothing itself.
#[test]
fn test_horn_special_contributes_nothing() {
    let mut board = Board::new();
    board.place_card(card("unit_4", PlayerId::PLAYER, 0), PlayerId::PLAYER, Row::Ranged);
    board.play_horn(card("horn", PlayerId::PLAYER, 1), PlayerId::PLAYER, Row::Ranged, 2);

    let lane = board.lane(PlayerId::PLAYER, Row::Ranged);
    assert_eq!(lane.multiplier(), 2);
    assert!(lane.horn().is_some());
    assert_eq!(board.side_value(PlayerId::PLAYER), 8);

    // A second horn replaces the first, which goes to the graveyard.
    board.play_horn(card("horn", PlayerId::PLAYER, 2), PlayerId::PLAYER, Row::Ranged, 2);
    assert_eq!(board.graveyard(PlayerId::PLAYER).len(), 1);
    assert_eq!(board.side_value(PlayerId::PLAYER), 8);
}

/// Test that a huge unit under a horn caps the score instead of overflowing.
#[test]
fn test_horned_score_saturates() {
    let giant = Arc::new(CardDefinition::unit("giant", "Giant", u32::MAX / 2 + 1, &[Row::Siege]));
    let mut board = Board::new();
    board.place_card(CardInstance::new(EntityId(0), PlayerId::PLAYER, giant), PlayerId::PLAYER, Row::Siege);
    board.place_card(card("unit_9", PlayerId::PLAYER, 1), PlayerId::PLAYER, Row::Close);
    board.play_horn(card("horn", PlayerId::PLAYER, 2), PlayerId::PLAYER, Row::Siege, 2);

    assert_eq!(board.lane_value(PlayerId::PLAYER, Row::Siege), u32::MAX);
    assert_eq!(board.side_value(PlayerId::PLAYER), u32::MAX);
}

// =============================================================================
// Scorch
// =============================================================================

/// Test that scorch removes every unit tied at the highest value.
#[test]
fn test_scorch_tie_break() {
    let mut board = Board::new();
    board.place_card(card("unit_6", PlayerId::PLAYER, 0), PlayerId::PLAYER, Row::Close);
    board.place_card(card("unit_6", PlayerId::OPPONENT, 1), PlayerId::OPPONENT, Row::Siege);
    board.place_card(card("unit_4", PlayerId::OPPONENT, 2), PlayerId::OPPONENT, Row::Close);

    let destroyed = board.scorch();

    assert_eq!(destroyed.len(), 2);
    assert_eq!(board.side_value(PlayerId::PLAYER), 0);
    assert_eq!(board.side_value(PlayerId::OPPONENT), 4);

    let player_grave: Vec<_> = board.graveyard(PlayerId::PLAYER).iter().map(|c| c.entity.0).collect();
    let opponent_grave: Vec<_> = board.graveyard(PlayerId::OPPONENT).iter().map(|c| c.entity.0).collect();
    assert_eq!(player_grave, vec![0]);
    assert_eq!(opponent_grave, vec![1]);
}

/// Test that scorch on an empty board does nothing.
#[test]
fn test_scorch_empty_board() {
    let mut board = Board::new();
    assert!(board.scorch().is_empty());
    assert!(board.graveyard(PlayerId::PLAYER).is_empty());
    assert!(board.graveyard(PlayerId::OPPONENT).is_empty());
}

/// Test that lane scorch only touches the targeted lane, ties included.
#[test]
fn test_scorch_lane_removes_ties() {
    let mut board = Board::new();
    board.place_card(card("unit_9", PlayerId::OPPONENT, 0), PlayerId::OPPONENT, Row::Close);
    board.place_card(card("unit_9", PlayerId::OPPONENT, 1), PlayerId::OPPONENT, Row::Close);
    board.place_card(card("unit_2", PlayerId::OPPONENT, 2), PlayerId::OPPONENT, Row::Close);
    board.place_card(card("unit_10", PlayerId::OPPONENT, 3), PlayerId::OPPONENT, Row::Siege);

    let destroyed = board.scorch_lane(PlayerId::OPPONENT, Row::Close);

    assert_eq!(destroyed.len(), 2);
    assert_eq!(board.lane_value(PlayerId::OPPONENT, Row::Close), 2);
    assert_eq!(board.lane_value(PlayerId::OPPONENT, Row::Siege), 10);
}

// =============================================================================
// Round Cleanup
// =============================================================================

/// Test that clearing the round empties the board into graveyards, and that
/// a second clear changes nothing.
#[test]
fn test_idempotent_clear() {
    let mut board = Board::new();
    board.place_card(card("unit_3", PlayerId::PLAYER, 0), PlayerId::PLAYER, Row::Close);
    board.place_card(card("unit_5", PlayerId::OPPONENT, 1), PlayerId::OPPONENT, Row::Ranged);
    board.play_horn(card("horn", PlayerId::PLAYER, 2), PlayerId::PLAYER, Row::Siege, 2);
    board.apply_weather(card("frost", PlayerId::OPPONENT, 3));

    assert_eq!(board.clear_round(), 4);
    assert!(board.is_clear());
    assert_eq!(board.graveyard(PlayerId::PLAYER).len(), 2);
    assert_eq!(board.graveyard(PlayerId::OPPONENT).len(), 2);

    let before = board.clone();
    assert_eq!(board.clear_round(), 0);
    assert_eq!(board.graveyard(PlayerId::PLAYER), before.graveyard(PlayerId::PLAYER));
    assert_eq!(board.graveyard(PlayerId::OPPONENT), before.graveyard(PlayerId::OPPONENT));
}

/// Test that the census sees every board card exactly once.
#[test]
fn test_board_census() {
    let mut board = Board::new();
    board.place_card(card("unit_3", PlayerId::PLAYER, 0), PlayerId::PLAYER, Row::Close);
    board.place_card(card("spy", PlayerId::PLAYER, 1), PlayerId::PLAYER, Row::Close);
    board.apply_weather(card("frost", PlayerId::OPPONENT, 2));
    board.place_card(card("unit_6", PlayerId::OPPONENT, 3), PlayerId::OPPONENT, Row::Close);
    board.scorch();

    let mut census = ZoneCensus::new();
    board.record_census(&mut census);

    assert!(census.is_consistent());
    assert_eq!(census.len(), 4);
    assert_eq!(census.count_in(PlayerId::PLAYER, Zone::Lane(Row::Close)), 2);
    // The spy stays the player's card on the opponent's side.
    let spy = census.location_of(EntityId(1)).unwrap();
    assert_eq!(spy.side, PlayerId::OPPONENT);
    assert_eq!(census.count_in(PlayerId::OPPONENT, Zone::Graveyard), 1);
    assert_eq!(census.count_in(PlayerId::OPPONENT, Zone::Weather), 1);
}
