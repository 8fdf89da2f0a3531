//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;

use rust_gwent::cards::{
    Ability, CardCatalog, CardDefinition, CardId, CardInstance, Faction, Row, SpecialKind,
    WeatherKind,
};
use rust_gwent::core::{EntityId, MatchConfig, PlayerId};
use rust_gwent::players::{AiController, HandChoice, HumanController, PlayerController, PlayerState, View};
use rust_gwent::rules::{MatchBuilder, MatchController};
use rust_gwent::zones::Deck;

/// Catalog with plain units `unit_1`..`unit_10` plus one card of each
/// interesting kind.
pub fn catalog() -> Arc<CardCatalog> {
    let mut catalog = CardCatalog::new();
    for value in 1..=10 {
        catalog.register(CardDefinition::unit(
            format!("unit_{}", value),
            format!("Soldier {}", value),
            value,
            &[Row::Close, Row::Ranged, Row::Siege],
        ));
    }
    catalog.register(CardDefinition::unit("hero_5", "Hero", 5, &[Row::Close]).as_hero());
    catalog.register(CardDefinition::unit("spy", "Spy", 4, &[Row::Close]).with_ability(Ability::Spy));
    catalog.register(CardDefinition::unit("medic", "Medic", 5, &[Row::Siege]).with_ability(Ability::Medic));
    catalog.register(
        CardDefinition::unit("arachas_drone", "Arachas - Drone", 4, &[Row::Close]).with_ability(Ability::Muster),
    );
    catalog.register(
        CardDefinition::unit("arachas_warrior", "Arachas - Warrior", 4, &[Row::Close])
            .with_ability(Ability::Muster),
    );
    catalog.register(
        CardDefinition::unit("arachas_behemoth", "Arachas - Behemoth", 6, &[Row::Siege])
            .with_ability(Ability::Muster),
    );
    catalog.register(CardDefinition::weather("frost", "Biting Frost", WeatherKind::Frost));
    catalog.register(CardDefinition::weather("clear", "Clear Weather", WeatherKind::Clear));
    catalog.register(CardDefinition::special("horn", "Commander's Horn", SpecialKind::CommandersHorn));
    catalog.register(CardDefinition::special("scorch", "Scorch", SpecialKind::Scorch));
    catalog.register(CardDefinition::special("decoy", "Decoy", SpecialKind::Decoy));
    Arc::new(catalog)
}

/// Card instances for `ids`, owned by `owner`, numbered from `first_id`.
pub fn instances(catalog: &CardCatalog, owner: PlayerId, first_id: u32, ids: &[&str]) -> Vec<CardInstance> {
    ids.iter()
        .enumerate()
        .map(|(i, id)| {
            let def = catalog.resolve(&CardId::new(*id)).unwrap();
            CardInstance::new(EntityId(first_id + i as u32), owner, def)
        })
        .collect()
}

/// A side whose first `hand` cards of `ids` are in hand (unshuffled) and
/// the rest in the draw pile.
pub fn player_state(catalog: &CardCatalog, owner: PlayerId, first_id: u32, ids: &[&str], hand: usize) -> PlayerState {
    let mut deck = Deck::new(instances(catalog, owner, first_id, ids));
    deck.draw(hand);
    PlayerState::new(format!("{}", owner), Faction::Neutral, deck, 2)
}

pub fn ids(deck: &[&str]) -> Vec<CardId> {
    deck.iter().map(|id| CardId::new(*id)).collect()
}

/// One scripted answer to the card prompt.
#[derive(Clone, Copy, Debug)]
pub enum Scripted {
    /// Play the first hand card with this catalog id.
    Play(&'static str),
    /// Answer with a raw hand index.
    Index(usize),
    Pass,
    Cancel,
}

/// A view that answers from a script and records the log.
///
/// The card prompt cancels once the script is exhausted. Row prompts take
/// the first allowed row unless a row was scripted.
#[derive(Clone, Debug, Default)]
pub struct ScriptedView {
    pub moves: VecDeque<Scripted>,
    pub rows: VecDeque<Row>,
    pub revivals: VecDeque<&'static str>,
    pub log: Rc<RefCell<Vec<String>>>,
}

impl ScriptedView {
    pub fn new(moves: Vec<Scripted>) -> Self {
        Self {
            moves: moves.into(),
            ..Default::default()
        }
    }

    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.rows = rows.into();
        self
    }

    pub fn with_revivals(mut self, revivals: Vec<&'static str>) -> Self {
        self.revivals = revivals.into();
        self
    }

    /// Shared handle to the log, usable after the view is boxed away.
    pub fn log_handle(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.log)
    }
}

impl View for ScriptedView {
    fn choose_hand_index(&mut self, hand: &[&CardDefinition]) -> HandChoice {
        match self.moves.pop_front() {
            None | Some(Scripted::Cancel) => HandChoice::Cancel,
            Some(Scripted::Pass) => HandChoice::Pass,
            Some(Scripted::Index(index)) => HandChoice::Play(index),
            Some(Scripted::Play(id)) => {
                let index = hand
                    .iter()
                    .position(|c| c.id.as_str() == id)
                    .unwrap_or_else(|| panic!("`{}` is not in hand", id));
                HandChoice::Play(index)
            }
        }
    }

    fn choose_lane(&mut self, _card: &CardDefinition, allowed: &[Row]) -> Option<Row> {
        self.rows.pop_front().or_else(|| allowed.first().copied())
    }

    fn choose_graveyard_card(&mut self, candidates: &[&CardDefinition]) -> Option<usize> {
        let id = self.revivals.pop_front()?;
        candidates.iter().position(|c| c.id.as_str() == id)
    }

    fn append_log_message(&mut self, message: &str) {
        self.log.borrow_mut().push(message.to_string());
    }
}

pub fn human(view: ScriptedView) -> Box<dyn PlayerController> {
    Box::new(HumanController::new(view))
}

pub fn ai() -> Box<dyn PlayerController> {
    Box::new(AiController::new())
}

/// Build a match on the fixture catalog.
pub fn build_match(
    config: MatchConfig,
    player: (&[&str], Box<dyn PlayerController>),
    opponent: (&[&str], Box<dyn PlayerController>),
) -> MatchController {
    MatchBuilder::new(catalog())
        .config(config)
        .side(PlayerId::PLAYER, "Geralt", Faction::Neutral, ids(player.0), player.1)
        .side(PlayerId::OPPONENT, "Yennefer", Faction::Neutral, ids(opponent.0), opponent.1)
        .build()
        .unwrap()
}
