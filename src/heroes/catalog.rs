//! Built-in hero variants.
//!
//! A small catalog covering each hook of the [`Hero`] trait: an active power
//! with a custom predicate, a combat listener, a buy listener, and passive
//! stat overrides.

use super::hero::{EmptyHero, Hero};
use super::registry::{HeroDefinition, HeroId, HeroRegistry};
use crate::events::{BuyPhaseContext, BuyPhaseView, CombatPhaseContext, EventKind, PhaseEvent};

pub const EMPTY_HERO: HeroId = HeroId::new(0);
pub const PYRAMAD: HeroId = HeroId::new(1);
pub const DEATHWING: HeroId = HeroId::new(2);
pub const PATCHWERK: HeroId = HeroId::new(3);
pub const BARTENDOTRON: HeroId = HeroId::new(4);
pub const MILLHOUSE_MANASTORM: HeroId = HeroId::new(5);
pub const TRADE_PRINCE_GALLYWIX: HeroId = HeroId::new(6);

/// Power: give a random friendly minion +4 health.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pyramad;

impl Hero for Pyramad {
    fn name(&self) -> &str {
        "Pyramad"
    }

    fn power_cost(&self) -> i32 {
        1
    }

    fn hero_power_impl(&mut self, context: &mut BuyPhaseContext<'_>) {
        if context.owner.in_play.is_empty() {
            return;
        }
        let choice = {
            let minions: Vec<_> = context.owner.in_play.iter().collect();
            context.randomizer.select_friendly_minion(&minions)
        };
        context.owner.in_play[choice].health += 4;
    }

    fn hero_power_valid_impl(&self, view: &BuyPhaseView<'_>) -> bool {
        !view.owner.in_play.is_empty()
    }
}

/// Passive: friendly minions gain +2 attack when combat starts.
#[derive(Clone, Copy, Debug, Default)]
pub struct Deathwing;

impl Hero for Deathwing {
    fn name(&self) -> &str {
        "Deathwing"
    }

    fn handle_combat_event(&mut self, event: &PhaseEvent, context: &CombatPhaseContext<'_, '_>) {
        if !event.is(EventKind::CombatStart) {
            return;
        }
        let mut board = context.friendly_war_party.board.borrow_mut();
        for card in board.iter_mut().filter(|c| c.is_alive()) {
            card.attack += 2;
        }
    }

    fn hero_power_valid_impl(&self, _view: &BuyPhaseView<'_>) -> bool {
        false
    }
}

/// Passive: starts with 60 health.
#[derive(Clone, Copy, Debug, Default)]
pub struct Patchwerk;

impl Hero for Patchwerk {
    fn name(&self) -> &str {
        "Patchwerk"
    }

    fn starting_health(&self) -> i32 {
        60
    }

    fn hero_power_valid_impl(&self, _view: &BuyPhaseView<'_>) -> bool {
        false
    }
}

/// Passive: tavern upgrades cost one less.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bartendotron;

impl Hero for Bartendotron {
    fn name(&self) -> &str {
        "Bartendotron"
    }

    fn tavern_upgrade_costs(&self) -> [i32; 6] {
        [0, 4, 6, 7, 8, 9]
    }

    fn hero_power_valid_impl(&self, _view: &BuyPhaseView<'_>) -> bool {
        false
    }
}

/// Passive: tavern upgrades cost one more.
#[derive(Clone, Copy, Debug, Default)]
pub struct MillhouseManastorm;

impl Hero for MillhouseManastorm {
    fn name(&self) -> &str {
        "Millhouse Manastorm"
    }

    fn tavern_upgrade_costs(&self) -> [i32; 6] {
        [0, 6, 8, 9, 10, 11]
    }

    fn hero_power_valid_impl(&self, _view: &BuyPhaseView<'_>) -> bool {
        false
    }
}

/// Passive: refunds a coin on every purchase.
#[derive(Clone, Copy, Debug, Default)]
pub struct TradePrinceGallywix;

impl Hero for TradePrinceGallywix {
    fn name(&self) -> &str {
        "Trade Prince Gallywix"
    }

    fn handle_buy_event(&mut self, event: &PhaseEvent, context: &mut BuyPhaseContext<'_>) {
        if event.is(EventKind::Buy) {
            context.owner.coins += 1;
        }
    }

    fn hero_power_valid_impl(&self, _view: &BuyPhaseView<'_>) -> bool {
        false
    }
}

impl HeroRegistry {
    /// Registry holding every built-in hero. `EmptyHero` is registered but
    /// kept out of the pool.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(HeroDefinition::new(EMPTY_HERO, "EmptyHero", || Box::new(EmptyHero)).hidden());
        registry.register(HeroDefinition::new(PYRAMAD, "Pyramad", || Box::new(Pyramad)));
        registry.register(HeroDefinition::new(DEATHWING, "Deathwing", || Box::new(Deathwing)));
        registry.register(HeroDefinition::new(PATCHWERK, "Patchwerk", || Box::new(Patchwerk)));
        registry.register(HeroDefinition::new(BARTENDOTRON, "Bartendotron", || Box::new(Bartendotron)));
        registry.register(HeroDefinition::new(MILLHOUSE_MANASTORM, "Millhouse Manastorm", || {
            Box::new(MillhouseManastorm)
        }));
        registry.register(HeroDefinition::new(TRADE_PRINCE_GALLYWIX, "Trade Prince Gallywix", || {
            Box::new(TradePrinceGallywix)
        }));
        registry
    }
}
