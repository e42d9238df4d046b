//! Fight resolution.
//!
//! The tavern hands each pairing's two [`WarParty`] values to a
//! [`CombatResolver`] and records what it reports. How a fight plays out is
//! entirely the resolver's business; the resolver must deliver every event it
//! generates through [`CombatPhaseContext::broadcast_combat_event`].
//!
//! ## Reference resolver
//!
//! [`BoardStrengthResolver`] stands in for a full attack-by-attack simulation:
//! one `COMBAT_START` broadcast, then the side with the larger total strength
//! of live cards wins.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::events::{CombatPhaseContext, EventKind, PhaseEvent, RandomizerCell, WarParty};

/// Result of one fight, from the first party's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FightOutcome {
    /// The first party won and dealt `damage` to the second.
    FirstWon { damage: i32 },
    /// The second party won and dealt `damage` to the first.
    SecondWon { damage: i32 },
    Draw,
}

impl FightOutcome {
    /// Damage dealt, 0 for a draw.
    #[must_use]
    pub fn damage(&self) -> i32 {
        match *self {
            FightOutcome::FirstWon { damage } | FightOutcome::SecondWon { damage } => damage,
            FightOutcome::Draw => 0,
        }
    }
}

/// Resolves a fight between two war parties.
///
/// Implementations apply damage to the losing owner themselves. They never
/// touch standings; elimination bookkeeping belongs to the tavern.
pub trait CombatResolver: fmt::Debug + Send {
    fn fight_boards<'a>(
        &mut self,
        first: &WarParty<'a>,
        second: &WarParty<'a>,
        randomizer: &RandomizerCell<'a>,
    ) -> FightOutcome;
}

/// Damage a winning party deals: its tavern tier plus the tiers of its
/// surviving cards.
#[must_use]
pub fn damage_from(winner: &WarParty<'_>) -> i32 {
    let board_tiers: i32 = winner
        .board
        .borrow()
        .iter()
        .filter(|c| c.is_alive())
        .map(|c| i32::from(c.tier))
        .sum();
    i32::from(winner.tavern_tier()) + board_tiers
}

fn board_strength(party: &WarParty<'_>) -> i64 {
    party.board.borrow().iter().filter(|c| c.is_alive()).map(|c| c.strength()).sum()
}

/// Compares summed attack plus health of live cards after `COMBAT_START`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoardStrengthResolver;

impl BoardStrengthResolver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CombatResolver for BoardStrengthResolver {
    fn fight_boards<'a>(
        &mut self,
        first: &WarParty<'a>,
        second: &WarParty<'a>,
        randomizer: &RandomizerCell<'a>,
    ) -> FightOutcome {
        let context = CombatPhaseContext::new(first, second, randomizer);
        context.broadcast_combat_event(&PhaseEvent::new(EventKind::CombatStart));

        let (first_strength, second_strength) = (board_strength(first), board_strength(second));
        if first_strength > second_strength {
            let damage = damage_from(first);
            second.owner.borrow_mut().health -= damage;
            FightOutcome::FirstWon { damage }
        } else if second_strength > first_strength {
            let damage = damage_from(second);
            first.owner.borrow_mut().health -= damage;
            FightOutcome::SecondWon { damage }
        } else {
            FightOutcome::Draw
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::cards::{Card, CardId};
    use crate::heroes::{Deathwing, EmptyHero};
    use crate::randomizer::{DefaultRandomizer, Randomizer};
    use crate::tavern::PlayerState;

    fn card(tier: u8, attack: i32, health: i32) -> Card {
        Card::new(CardId::new(u32::from(tier)), "Minion", tier, attack, health)
    }

    #[test]
    fn test_stronger_board_wins() {
        let (mut hero_a, mut hero_b) = (EmptyHero, EmptyHero);
        let mut owner_a = PlayerState::new(40, 5);
        owner_a.tavern_tier = 2;
        let mut owner_b = PlayerState::new(40, 5);

        let first = WarParty::from_parts("alice", &mut hero_a, &mut owner_a, vec![card(2, 3, 3), card(1, 1, 1)]);
        let second = WarParty::from_parts("bob", &mut hero_b, &mut owner_b, vec![card(1, 2, 2)]);
        let mut randomizer = DefaultRandomizer::new(1);
        let randomizer: &mut dyn Randomizer = &mut randomizer;
        let cell = RefCell::new(randomizer);

        let outcome = BoardStrengthResolver.fight_boards(&first, &second, &cell);

        // Tier 2 tavern + tiers 2 and 1 on board.
        assert_eq!(outcome, FightOutcome::FirstWon { damage: 5 });
        drop(first);
        drop(second);
        assert_eq!(owner_b.health, 35);
        assert_eq!(owner_a.health, 40);
    }

    #[test]
    fn test_equal_boards_draw() {
        let (mut hero_a, mut hero_b) = (EmptyHero, EmptyHero);
        let mut owner_a = PlayerState::new(40, 5);
        let mut owner_b = PlayerState::new(40, 5);

        let first = WarParty::from_parts("alice", &mut hero_a, &mut owner_a, Vec::new());
        let second = WarParty::from_parts("bob", &mut hero_b, &mut owner_b, Vec::new());
        let mut randomizer = DefaultRandomizer::new(1);
        let randomizer: &mut dyn Randomizer = &mut randomizer;
        let cell = RefCell::new(randomizer);

        let outcome = BoardStrengthResolver.fight_boards(&first, &second, &cell);
        assert_eq!(outcome, FightOutcome::Draw);
        assert_eq!(outcome.damage(), 0);
    }

    #[test]
    fn test_combat_start_listeners_run_before_comparison() {
        let mut deathwing = Deathwing;
        let mut other = EmptyHero;
        let mut owner_a = PlayerState::new(40, 5);
        let mut owner_b = PlayerState::new(40, 5);

        // 2/2 vs 3/2: Deathwing's +2 attack flips the result.
        let first = WarParty::from_parts("alice", &mut deathwing, &mut owner_a, vec![card(1, 2, 2)]);
        let second = WarParty::from_parts("bob", &mut other, &mut owner_b, vec![card(1, 3, 2)]);
        let mut randomizer = DefaultRandomizer::new(1);
        let randomizer: &mut dyn Randomizer = &mut randomizer;
        let cell = RefCell::new(randomizer);

        let outcome = BoardStrengthResolver.fight_boards(&first, &second, &cell);
        assert_eq!(outcome, FightOutcome::FirstWon { damage: 2 });
    }

    #[test]
    fn test_dead_cards_deal_no_damage() {
        let mut hero = EmptyHero;
        let mut owner = PlayerState::new(40, 5);
        let mut dead = card(6, 9, 9);
        dead.dead = true;
        let party = WarParty::from_parts("alice", &mut hero, &mut owner, vec![dead, card(3, 1, 1)]);
        assert_eq!(damage_from(&party), 1 + 3);
    }
}
