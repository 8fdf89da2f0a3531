//! Side identification and per-side data storage.
//!
//! ## PlayerId
//!
//! A match always has exactly two sides: `PlayerId::PLAYER` (index 0, the
//! side that normally moves first) and `PlayerId::OPPONENT` (index 1).
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Identifier of one of the two sides of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The first side (the local player in a human-vs-AI match).
    pub const PLAYER: PlayerId = PlayerId(0);

    /// The second side.
    pub const OPPONENT: PlayerId = PlayerId(1);

    /// Both sides, in index order.
    pub const BOTH: [PlayerId; 2] = [PlayerId::PLAYER, PlayerId::OPPONENT];

    /// Get the raw side index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other side.
    ///
    /// ```
    /// use rust_gwent::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::PLAYER.opponent(), PlayerId::OPPONENT);
    /// assert_eq!(PlayerId::OPPONENT.opponent(), PlayerId::PLAYER);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        PlayerId(1 - self.0)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            PlayerId::PLAYER => write!(f, "Player"),
            _ => write!(f, "Opponent"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ```
/// use rust_gwent::core::{PlayerId, PlayerMap};
///
/// let mut lives: PlayerMap<u8> = PlayerMap::with_value(2);
/// lives[PlayerId::OPPONENT] -= 1;
///
/// assert_eq!(lives[PlayerId::PLAYER], 2);
/// assert_eq!(lives[PlayerId::OPPONENT], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::PLAYER), factory(PlayerId::OPPONENT)],
        }
    }

    /// Create a map from explicit values for each side.
    pub fn from_pair(player: T, opponent: T) -> Self {
        Self {
            data: [player, opponent],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::BOTH.into_iter().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::BOTH.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::PLAYER.index(), 0);
        assert_eq!(PlayerId::OPPONENT.index(), 1);
        assert_eq!(format!("{}", PlayerId::PLAYER), "Player");
        assert_eq!(format!("{}", PlayerId::OPPONENT), "Opponent");
    }

    #[test]
    fn test_opponent_is_involution() {
        for side in PlayerId::BOTH {
            assert_ne!(side.opponent(), side);
            assert_eq!(side.opponent().opponent(), side);
        }
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<usize> = PlayerMap::new(|p| p.index() * 10);

        assert_eq!(map[PlayerId::PLAYER], 0);
        assert_eq!(map[PlayerId::OPPONENT], 10);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::with_value(0);

        map[PlayerId::PLAYER] = 10;
        map[PlayerId::OPPONENT] = 20;

        assert_eq!(map[PlayerId::PLAYER], 10);
        assert_eq!(map[PlayerId::OPPONENT], 20);
    }

    #[test]
    fn test_player_map_iter() {
        let map = PlayerMap::from_pair("a", "b");
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::PLAYER, &"a"), (PlayerId::OPPONENT, &"b")]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<i32> = PlayerMap::from_pair(1, 2);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
