//! Card definitions - immutable catalog data.
//!
//! A `CardDefinition` is loaded once and never mutated. Every card is one of
//! three kinds:
//!
//! - `Unit`: placed into a row, contributes its value to the lane score.
//!   Heroes are units flagged immune to weather.
//! - `Weather`: affects one row on both sides (or clears all weather).
//! - `Special`: one-shot effects such as Commander's Horn or Scorch.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Separator between a muster family name and the member name.
pub const MUSTER_SEPARATOR: &str = " - ";

/// Stable identifier of a catalog card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A combat row. Each side has one lane per row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Row {
    Close,
    Ranged,
    Siege,
}

impl Row {
    /// All rows, front to back.
    pub const ALL: [Row; 3] = [Row::Close, Row::Ranged, Row::Siege];

    /// Position of the row in `Row::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Row::Close => 0,
            Row::Ranged => 1,
            Row::Siege => 2,
        }
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Row::Close => "close",
            Row::Ranged => "ranged",
            Row::Siege => "siege",
        };
        f.write_str(name)
    }
}

/// Weather kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherKind {
    /// Removes all active weather.
    Clear,
    Frost,
    Fog,
    Rain,
    SkelligeStorm,
}

impl WeatherKind {
    /// The row this weather affects. `None` for `Clear`.
    ///
    /// ```
    /// use rust_gwent::cards::{Row, WeatherKind};
    ///
    /// assert_eq!(WeatherKind::Frost.affected_row(), Some(Row::Close));
    /// assert_eq!(WeatherKind::Clear.affected_row(), None);
    /// ```
    #[must_use]
    pub const fn affected_row(self) -> Option<Row> {
        match self {
            WeatherKind::Clear => None,
            WeatherKind::Frost | WeatherKind::SkelligeStorm => Some(Row::Close),
            WeatherKind::Fog => Some(Row::Ranged),
            WeatherKind::Rain => Some(Row::Siege),
        }
    }
}

/// Special card kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialKind {
    CommandersHorn,
    Decoy,
    Scorch,
    Madroeme,
}

/// Faction a unit belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Faction {
    #[default]
    Neutral,
    Nilfgaard,
    NorthernRealms,
    Monsters,
    ScoiaTael,
    Skellige,
}

/// Unit abilities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    #[default]
    None,
    /// Revive a non-hero unit from the owner's graveyard.
    Medic,
    #[serde(alias = "morale")]
    MoraleBoost,
    /// Pull every same-family card from hand and deck onto the board.
    Muster,
    /// Placed on the opposing side; the player draws cards.
    Spy,
    #[serde(alias = "bond")]
    TightBond,
    /// Destroy the strongest units in the opposing matching lane.
    Scorch,
    /// Set the own lane's multiplier.
    Horn,
}

/// Unit card data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitCard {
    /// Rows the unit may be placed in.
    pub rows: SmallVec<[Row; 3]>,

    #[serde(default)]
    pub faction: Faction,

    /// Base strength.
    pub value: u32,

    #[serde(default)]
    pub ability: Ability,

    /// Heroes ignore weather (but not lane multipliers).
    #[serde(default)]
    pub hero: bool,
}

impl UnitCard {
    /// Whether weather leaves this unit's value untouched.
    #[must_use]
    pub fn is_hero_immune_to_weather(&self) -> bool {
        self.hero
    }
}

/// What kind of card this is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Unit(UnitCard),
    Weather(WeatherKind),
    Special(SpecialKind),
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use rust_gwent::cards::{Ability, CardDefinition, Row};
///
/// let archer = CardDefinition::unit("crinfrid_1", "Crinfrid Reavers - 1", 5, &[Row::Ranged])
///     .with_ability(Ability::Muster);
///
/// assert_eq!(archer.value(), 5);
/// assert_eq!(archer.muster_prefix(), "Crinfrid Reavers");
/// assert!(archer.is_playable());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    pub id: CardId,

    /// Display name.
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub kind: CardKind,
}

impl CardDefinition {
    /// Create a unit card.
    #[must_use]
    pub fn unit(id: impl Into<String>, name: impl Into<String>, value: u32, rows: &[Row]) -> Self {
        Self {
            id: CardId::new(id),
            name: name.into(),
            description: String::new(),
            kind: CardKind::Unit(UnitCard {
                rows: SmallVec::from_slice(rows),
                faction: Faction::Neutral,
                value,
                ability: Ability::None,
                hero: false,
            }),
        }
    }

    /// Create a weather card.
    #[must_use]
    pub fn weather(id: impl Into<String>, name: impl Into<String>, kind: WeatherKind) -> Self {
        Self {
            id: CardId::new(id),
            name: name.into(),
            description: String::new(),
            kind: CardKind::Weather(kind),
        }
    }

    /// Create a special card.
    #[must_use]
    pub fn special(id: impl Into<String>, name: impl Into<String>, kind: SpecialKind) -> Self {
        Self {
            id: CardId::new(id),
            name: name.into(),
            description: String::new(),
            kind: CardKind::Special(kind),
        }
    }

    /// Set the unit ability. No effect on non-unit cards.
    #[must_use]
    pub fn with_ability(mut self, ability: Ability) -> Self {
        if let CardKind::Unit(unit) = &mut self.kind {
            unit.ability = ability;
        }
        self
    }

    /// Set the unit faction. No effect on non-unit cards.
    #[must_use]
    pub fn with_faction(mut self, faction: Faction) -> Self {
        if let CardKind::Unit(unit) = &mut self.kind {
            unit.faction = faction;
        }
        self
    }

    /// Flag the unit as a hero. No effect on non-unit cards.
    #[must_use]
    pub fn as_hero(mut self) -> Self {
        if let CardKind::Unit(unit) = &mut self.kind {
            unit.hero = true;
        }
        self
    }

    /// Unit data, if this is a unit.
    #[must_use]
    pub fn as_unit(&self) -> Option<&UnitCard> {
        match &self.kind {
            CardKind::Unit(unit) => Some(unit),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_unit(&self) -> bool {
        self.as_unit().is_some()
    }

    #[must_use]
    pub fn is_hero(&self) -> bool {
        self.as_unit().is_some_and(|u| u.hero)
    }

    /// Base value. Zero for non-unit cards.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.as_unit().map_or(0, |u| u.value)
    }

    /// Unit ability. `Ability::None` for non-unit cards.
    #[must_use]
    pub fn ability(&self) -> Ability {
        self.as_unit().map_or(Ability::None, |u| u.ability)
    }

    /// Rows this card can target. Empty for cards without a target.
    #[must_use]
    pub fn target_rows(&self) -> SmallVec<[Row; 3]> {
        match &self.kind {
            CardKind::Unit(unit) => unit.rows.clone(),
            CardKind::Special(SpecialKind::CommandersHorn) => SmallVec::from_slice(&Row::ALL),
            CardKind::Weather(_) | CardKind::Special(_) => SmallVec::new(),
        }
    }

    /// Whether the card needs a target row when played.
    #[must_use]
    pub fn needs_row(&self) -> bool {
        matches!(
            self.kind,
            CardKind::Unit(_) | CardKind::Special(SpecialKind::CommandersHorn)
        )
    }

    /// Whether the rules know how to play this card.
    ///
    /// Decoy and Madroeme have no implementation; a unit without rows has
    /// nowhere to go.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        match &self.kind {
            CardKind::Unit(unit) => !unit.rows.is_empty(),
            CardKind::Weather(_) => true,
            CardKind::Special(kind) => {
                matches!(kind, SpecialKind::CommandersHorn | SpecialKind::Scorch)
            }
        }
    }

    /// Family name used by muster: the text before `" - "`, or the whole name.
    #[must_use]
    pub fn muster_prefix(&self) -> &str {
        self.name
            .split(MUSTER_SEPARATOR)
            .next()
            .unwrap_or(&self.name)
    }
}
