//! Card instances as they sit in stores, hands and boards.
//!
//! A `Card` is plain data plus an optional shared [`CardBehavior`] that
//! receives combat events. Behaviors are stateless and shared between every
//! copy of a printing.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::events::{CombatPhaseContext, PhaseEvent};

/// Identifier of a printed card. All copies of a printing share it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

/// The card side of the event-handling capability.
///
/// `slot` is the card's index on the board of `context.friendly`; the
/// context is already oriented so that "friendly" means the card's own side.
///
/// The card may be dead when the event arrives. Implementations must not
/// assume otherwise, and must not broadcast the same event again.
pub trait CardBehavior: fmt::Debug + Send + Sync {
    fn handle_combat_event(&self, slot: usize, event: &PhaseEvent, context: &CombatPhaseContext<'_, '_>);
}

/// A card instance.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    /// Printing this card is a copy of.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Tavern tier (1-6).
    pub tier: u8,

    pub attack: i32,

    pub health: i32,

    /// Set by the combat resolver when the card dies mid-fight.
    pub dead: bool,

    /// Combat event handler, if the card has one.
    #[serde(skip)]
    pub behavior: Option<Arc<dyn CardBehavior>>,
}

impl Card {
    /// Create a vanilla card.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, tier: u8, attack: i32, health: i32) -> Self {
        Self {
            id,
            name: name.into(),
            tier,
            attack,
            health,
            dead: false,
            behavior: None,
        }
    }

    /// Attach a combat behavior (builder pattern).
    #[must_use]
    pub fn with_behavior(mut self, behavior: Arc<dyn CardBehavior>) -> Self {
        self.behavior = Some(behavior);
        self
    }

    /// Not marked dead.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        !self.dead
    }

    /// Attack plus health, the crude measure the reference resolver fights with.
    #[must_use]
    pub fn strength(&self) -> i64 {
        i64::from(self.attack) + i64::from(self.health)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}/{}", self.name, self.attack, self.health)?;
        if self.dead {
            write!(f, " (dead)")?;
        }
        Ok(())
    }
}
