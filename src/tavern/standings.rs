//! Final (or in-progress) match placements.
//!
//! `Standings` is a snapshot of the tavern's elimination order. The losers
//! list is an `im::Vector`, so taking a snapshot mid-match is cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::error::Result;

/// Elimination order plus the names needed to report it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    /// Player names in registry order.
    names: Vec<String>,

    /// Elimination order, first eliminated first.
    losers: Vector<PlayerId>,
}

impl Standings {
    #[must_use]
    pub fn new(names: Vec<String>, losers: Vector<PlayerId>) -> Self {
        Self { names, losers }
    }

    /// Elimination order, first eliminated first.
    #[must_use]
    pub fn losers(&self) -> &Vector<PlayerId> {
        &self.losers
    }

    /// Recorded players, best placement first.
    #[must_use]
    pub fn placements(&self) -> Vec<PlayerId> {
        self.losers.iter().rev().copied().collect()
    }

    /// Names of recorded players, best placement first.
    #[must_use]
    pub fn placement_names(&self) -> Vec<&str> {
        self.placements().into_iter().map(|id| self.name(id)).collect()
    }

    /// 1-based placement of a recorded player. Players eliminated so far
    /// hold the bottom places.
    ///
    /// `None` while the player is still in the running.
    #[must_use]
    pub fn placement_of(&self, player: PlayerId) -> Option<usize> {
        let position = self.losers.index_of(&player)?;
        Some(self.names.len() - position)
    }

    /// The winner, once every player is recorded.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        if self.is_complete() {
            self.losers.last().copied()
        } else {
            None
        }
    }

    /// Every player has a placement.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.names.is_empty() && self.losers.len() == self.names.len()
    }

    /// Name of a player, or an empty string for an id outside the registry.
    #[must_use]
    pub fn name(&self, player: PlayerId) -> &str {
        self.names.get(player.index()).map_or("", String::as_str)
    }

    /// Serialize for an external rating system.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
