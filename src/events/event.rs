//! Phase events.
//!
//! An event is an immutable record of something that happened, created by
//! whoever made it happen and handed by reference to a context for delivery.
//! Contexts never keep events around.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// What happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// A card was played onto the board during the buy phase.
    SummonBuy,
    /// A card was summoned mid-combat.
    SummonCombat,
    /// A card killed another card.
    Kill,
    /// A card died.
    Dies,
    /// A fight is about to begin.
    CombatStart,
    /// A buy phase started.
    BuyStart,
    /// A buy phase ended.
    BuyEnd,
    /// A card attacked.
    OnAttack,
    /// A card was sold.
    Sell,
    /// A card was bought from the store.
    Buy,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EventKind::SummonBuy => "SUMMON_BUY",
            EventKind::SummonCombat => "SUMMON_COMBAT",
            EventKind::Kill => "KILL",
            EventKind::Dies => "DIES",
            EventKind::CombatStart => "COMBAT_START",
            EventKind::BuyStart => "BUY_START",
            EventKind::BuyEnd => "BUY_END",
            EventKind::OnAttack => "ON_ATTACK",
            EventKind::Sell => "SELL",
            EventKind::Buy => "BUY",
        };
        f.write_str(name)
    }
}

/// An event kind plus the card it concerns, if any.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PhaseEvent {
    /// The kind of event.
    pub kind: EventKind,

    /// The card that caused or underwent the event.
    pub card: Option<Card>,
}

impl PhaseEvent {
    /// Create an event with no card attached.
    #[must_use]
    pub fn new(kind: EventKind) -> Self {
        Self { kind, card: None }
    }

    /// Create an event about a card.
    #[must_use]
    pub fn for_card(kind: EventKind, card: Card) -> Self {
        Self { kind, card: Some(card) }
    }

    /// Check the event kind.
    #[must_use]
    pub fn is(&self, kind: EventKind) -> bool {
        self.kind == kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    #[test]
    fn test_event_builders() {
        let plain = PhaseEvent::new(EventKind::BuyStart);
        assert!(plain.is(EventKind::BuyStart));
        assert!(plain.card.is_none());

        let card = Card::new(CardId::new(4), "Kaboom Bot", 2, 2, 2);
        let sold = PhaseEvent::for_card(EventKind::Sell, card);
        assert!(sold.is(EventKind::Sell));
        assert_eq!(sold.card.as_ref().map(|c| c.name.as_str()), Some("Kaboom Bot"));
    }

    #[test]
    fn test_event_kind_display() {
        assert_eq!(EventKind::CombatStart.to_string(), "COMBAT_START");
        assert_eq!(EventKind::BuyEnd.to_string(), "BUY_END");
    }

    #[test]
    fn test_event_serialization() {
        let event = PhaseEvent::for_card(EventKind::Dies, Card::new(CardId::new(1), "Alley Cat", 1, 1, 1));
        let json = serde_json::to_string(&event).unwrap();
        let restored: PhaseEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.kind, EventKind::Dies);
        assert_eq!(restored.card.map(|c| c.id), Some(CardId::new(1)));
    }
}
