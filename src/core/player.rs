//! Player identification.
//!
//! ## PlayerId
//!
//! Type-safe handle into the tavern's player registry. Ids are handed out in
//! registration order, so comparing ids compares registry positions.

use serde::{Deserialize, Serialize};

/// Most players a single match can register.
pub const MAX_PLAYERS: usize = 255;

/// Registry handle for a player, supporting up to [`MAX_PLAYERS`] players per match.
///
/// Player indices are 0-based: the first registered player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw registry index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Build the id for the player at `index` in the registry.
    ///
    /// Panics if the index does not fit the id space.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        assert!(index < MAX_PLAYERS, "At most {MAX_PLAYERS} players supported");
        Self(index as u8)
    }

    /// Iterate over all player IDs for a registry of `player_count` players.
    ///
    /// ```
    /// use rust_tavern::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count).map(PlayerId::from_index)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}
