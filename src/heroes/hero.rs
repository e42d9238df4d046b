//! The hero capability set.

use std::fmt;

use crate::events::{BuyPhaseContext, BuyPhaseView, CombatPhaseContext, PhaseEvent};

/// Starting health for heroes that don't override it.
pub const DEFAULT_STARTING_HEALTH: i32 = 40;

/// Hero power cost for heroes that don't override it.
pub const DEFAULT_POWER_COST: i32 = 2;

/// Tavern upgrade costs for heroes that don't override them.
///
/// Index `t` is the cost of upgrading from tier `t` to `t + 1`; index 0 is unused.
pub const DEFAULT_UPGRADE_COSTS: [i32; 6] = [0, 5, 7, 8, 9, 10];

/// A hero variant.
///
/// Every method has a default, so a passive hero only names itself. Event
/// handlers may receive events for any kind and must ignore those they don't
/// care about. They must not assume the owner is still alive.
pub trait Hero: fmt::Debug + Send {
    /// Display name.
    fn name(&self) -> &str;

    fn starting_health(&self) -> i32 {
        DEFAULT_STARTING_HEALTH
    }

    fn tavern_upgrade_costs(&self) -> [i32; 6] {
        DEFAULT_UPGRADE_COSTS
    }

    fn power_cost(&self) -> i32 {
        DEFAULT_POWER_COST
    }

    /// React to a buy-phase event delivered through the owner's context.
    fn handle_buy_event(&mut self, _event: &PhaseEvent, _context: &mut BuyPhaseContext<'_>) {}

    /// React to a combat event. `context` is oriented so that the hero's own
    /// war party is the friendly one.
    fn handle_combat_event(&mut self, _event: &PhaseEvent, _context: &CombatPhaseContext<'_, '_>) {}

    /// The power's effect. Runs after coins are paid and the power is marked used.
    fn hero_power_impl(&mut self, _context: &mut BuyPhaseContext<'_>) {}

    /// Hero-specific extra condition for using the power.
    fn hero_power_valid_impl(&self, _view: &BuyPhaseView<'_>) -> bool {
        true
    }
}

/// Placeholder hero a player holds until they choose one.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyHero;

impl Hero for EmptyHero {
    fn name(&self) -> &str {
        "EmptyHero"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_hero_defaults() {
        let hero = EmptyHero;
        assert_eq!(hero.name(), "EmptyHero");
        assert_eq!(hero.starting_health(), 40);
        assert_eq!(hero.power_cost(), 2);
        assert_eq!(hero.tavern_upgrade_costs(), [0, 5, 7, 8, 9, 10]);
    }
}
