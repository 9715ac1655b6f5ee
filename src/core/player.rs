//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe, 1-based player label supporting 1-255 players.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access.
//! Supports iteration and indexing by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Player label supporting 1-255 players.
///
/// Labels are 1-based: the first player is `PlayerId(1)`. Use
/// [`PlayerId::index`] for the 0-based storage slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The first player.
    pub const FIRST: PlayerId = PlayerId(1);

    /// Create a new player ID from its 1-based label.
    #[must_use]
    pub const fn new(label: u8) -> Self {
        Self(label)
    }

    /// Get the 0-based storage index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Get the 1-based label.
    #[must_use]
    pub const fn label(self) -> u8 {
        self.0
    }

    /// The player after this one, wrapping to player 1.
    ///
    /// ```
    /// use memory_match::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(1).next(3), PlayerId::new(2));
    /// assert_eq!(PlayerId::new(3).next(3), PlayerId::new(1));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self((self.0 as usize % player_count) as u8 + 1)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use memory_match::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(1));
    /// assert_eq!(players[3], PlayerId::new(4));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (1..=player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per player.
/// Use `PlayerMap::new()` to create with a factory function,
/// or `PlayerMap::with_value()` to initialize all entries to the same value.
///
/// ## Example
///
/// ```
/// use memory_match::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<u32> = PlayerMap::with_value(3, 0);
/// scores[PlayerId::new(2)] += 1;
///
/// assert_eq!(scores[PlayerId::new(1)], 0);
/// assert_eq!(scores[PlayerId::new(2)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = PlayerId::all(player_count).map(factory).collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8 + 1), v))
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.data.len())
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
        let p1 = PlayerId::new(1);
        let p2 = PlayerId::new(2);

        assert_eq!(p1.index(), 0);
        assert_eq!(p2.index(), 1);
        assert_eq!(p2.label(), 2);
        assert_eq!(format!("{}", p1), "Player 1");
    }

    #[test]
    fn test_player_id_next_wraps() {
        assert_eq!(PlayerId::new(1).next(2), PlayerId::new(2));
        assert_eq!(PlayerId::new(2).next(2), PlayerId::new(1));
        assert_eq!(PlayerId::new(1).next(1), PlayerId::new(1));
        assert_eq!(PlayerId::new(4).next(5), PlayerId::new(5));
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<u32> = PlayerMap::new(3, |p| p.label() as u32 * 10);

        assert_eq!(map[PlayerId::new(1)], 10);
        assert_eq!(map[PlayerId::new(2)], 20);
        assert_eq!(map[PlayerId::new(3)], 30);
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<u32> = PlayerMap::new(3, |p| p.index() as u32);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], (PlayerId::new(1), &0));
        assert_eq!(pairs[2], (PlayerId::new(3), &2));
        assert_eq!(map.player_ids().count(), 3);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<u32> = PlayerMap::with_value(2, 0);
        map[PlayerId::new(2)] = 7;

        assert_eq!(map[PlayerId::new(1)], 0);
        assert_eq!(map[PlayerId::new(2)], 7);
        assert_eq!(map.player_count(), 2);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<u32> = PlayerMap::new(2, |p| p.label() as u32);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<u32> = PlayerMap::with_value(0, 0);
    }
}
