//! The shared card pool every store draws from.

use super::card::{Card, CardId};
use crate::randomizer::Randomizer;

/// Copies printed per card at each tier (index 0 is tier 1).
const COPIES_PER_TIER: [usize; 6] = [16, 15, 13, 11, 9, 7];

/// Vanilla printings used by [`CardPool::vanilla`]: (tier, name, attack, health).
const VANILLA_PRINTINGS: &[(u8, &str, i32, i32)] = &[
    (1, "Alley Cat", 1, 1),
    (1, "Murloc Tidehunter", 2, 1),
    (1, "Dire Wolf Alpha", 2, 2),
    (2, "Rockpool Hunter", 2, 3),
    (2, "Kaboom Bot", 2, 2),
    (2, "Harvest Golem", 2, 3),
    (3, "Rat Pack", 2, 2),
    (3, "Iron Sensei", 2, 2),
    (3, "Infested Wolf", 3, 3),
    (4, "Cave Hydra", 2, 4),
    (4, "Security Rover", 2, 6),
    (4, "Annoy-o-Module", 2, 4),
    (5, "Junkbot", 1, 5),
    (5, "Mal'Ganis", 9, 7),
    (5, "Brann Bronzebeard", 2, 4),
    (6, "Foe Reaper 4000", 6, 9),
    (6, "Maexxna", 2, 8),
    (6, "Ghastcoiler", 7, 7),
];

/// Shared pool of cards not currently in any store, hand or board.
///
/// Drawing removes a card; selling or rerolling returns it.
#[derive(Clone, Debug, Default)]
pub struct CardPool {
    cards: Vec<Card>,
}

impl CardPool {
    /// Create a pool from explicit cards, in printing order.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// The standard vanilla pool: every printing, copied per its tier.
    #[must_use]
    pub fn vanilla() -> Self {
        let mut cards = Vec::new();
        for (index, &(tier, name, attack, health)) in VANILLA_PRINTINGS.iter().enumerate() {
            let id = CardId::new(index as u32 + 1);
            for _ in 0..COPIES_PER_TIER[usize::from(tier - 1)] {
                cards.push(Card::new(id, name, tier, attack, health));
            }
        }
        Self { cards }
    }

    /// Cards left in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over the pool in order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Draw one card of tier at most `max_tier` on behalf of a player.
    ///
    /// The pick is delegated to [`Randomizer::select_draw_card`]. Returns
    /// `None` when nothing eligible is left.
    pub fn draw(
        &mut self,
        max_tier: u8,
        randomizer: &mut dyn Randomizer,
        player_name: &str,
        round: u32,
    ) -> Option<Card> {
        let eligible: Vec<usize> = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.tier <= max_tier)
            .map(|(i, _)| i)
            .collect();
        if eligible.is_empty() {
            return None;
        }

        let choice = {
            let candidates: Vec<&Card> = eligible.iter().map(|&i| &self.cards[i]).collect();
            randomizer.select_draw_card(&candidates, player_name, round)
        };
        Some(self.cards.remove(eligible[choice]))
    }

    /// Put a card back, restored to a living copy.
    pub fn return_card(&mut self, mut card: Card) {
        card.dead = false;
        self.cards.push(card);
    }
}
