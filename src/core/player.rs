//! Player identification and per-player storage.
//!
//! ## PlayerId
//!
//! Seat index in the (randomised) turn order, 0-based.
//!
//! ## PlayerMap
//!
//! `Vec`-backed per-player storage indexed by `PlayerId`. Unlike a plain
//! slice, lookups return `Option` so an intent naming a seat that does not
//! exist is rejected instead of panicking.

use serde::{Deserialize, Serialize};

/// Seat identifier. The first player to act is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Player colors. At most one player per color, hence at most four players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Yellow,
    Green,
    Red,
    Blue,
}

impl PlayerColor {
    /// All colors in seating preference order.
    pub const ALL: [PlayerColor; 4] = [
        PlayerColor::Yellow,
        PlayerColor::Green,
        PlayerColor::Red,
        PlayerColor::Blue,
    ];
}

/// Per-player data with O(1) access by seat.
///
/// ```
/// use ares_rules::core::{PlayerId, PlayerMap};
///
/// let mut scores = PlayerMap::from_vec(vec![5, 5, 5]);
/// if let Some(score) = scores.get_mut(PlayerId::new(1)) {
///     *score += 1;
/// }
/// assert_eq!(scores.get(PlayerId::new(1)), Some(&6));
/// assert_eq!(scores.get(PlayerId::new(3)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Seat the given values in order: `values[0]` becomes `PlayerId(0)`.
    #[must_use]
    pub fn from_vec(values: Vec<T>) -> Self {
        debug_assert!(values.len() <= usize::from(u8::MAX), "too many players");
        Self { data: values }
    }

    /// Number of seated players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when nobody is seated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}
