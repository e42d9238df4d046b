//! Once-per-turn hero power gate.
//!
//! ## States
//!
//! ```text
//! Unused --activate--> Used --on_buy_step_start--> Unused
//! ```
//!
//! The transition to `Used` is committed before the hero's effect runs, so an
//! effect that tries to activate the power again is refused by `valid`.

use serde::{Deserialize, Serialize};

use super::hero::Hero;
use crate::error::{Result, TavernError};
use crate::events::{BuyPhaseContext, BuyPhaseView};

/// Whether the power has been used this turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerState {
    #[default]
    Unused,
    Used,
}

/// Per-player hero power state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroPower {
    state: PowerState,
}

impl HeroPower {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> PowerState {
        self.state
    }

    /// Used this turn.
    #[must_use]
    pub fn is_used(&self) -> bool {
        self.state == PowerState::Used
    }

    /// Can `hero`'s power be used now? Side-effect free.
    #[must_use]
    pub fn valid(&self, hero: &dyn Hero, view: &BuyPhaseView<'_>) -> bool {
        view.owner.coins >= hero.power_cost()
            && self.state == PowerState::Unused
            && hero.hero_power_valid_impl(view)
    }

    /// Pay for and use the power.
    ///
    /// Returns `HeroPowerUnavailable` if [`HeroPower::valid`] is false.
    pub fn activate(&mut self, hero: &mut dyn Hero, context: &mut BuyPhaseContext<'_>) -> Result<()> {
        if !self.valid(hero, &context.view()) {
            return Err(TavernError::HeroPowerUnavailable(context.owner_id));
        }
        context.owner.coins -= hero.power_cost();
        self.state = PowerState::Used;
        hero.hero_power_impl(context);
        Ok(())
    }

    /// Reset for a new turn.
    pub fn on_buy_step_start(&mut self) {
        self.state = PowerState::Unused;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardPool;
    use crate::core::{PlayerId, TavernConfig};
    use crate::heroes::EmptyHero;
    use crate::randomizer::DefaultRandomizer;
    use crate::tavern::PlayerState;

    /// Hero whose power adds a coin back and counts uses.
    #[derive(Debug, Default)]
    struct Refunder {
        uses: u32,
    }

    impl Hero for Refunder {
        fn name(&self) -> &str {
            "Refunder"
        }

        fn hero_power_impl(&mut self, context: &mut BuyPhaseContext<'_>) {
            self.uses += 1;
            context.owner.coins += 1;
        }

        fn hero_power_valid_impl(&self, view: &BuyPhaseView<'_>) -> bool {
            view.turn > 0
        }
    }

    struct Fixture {
        state: PlayerState,
        randomizer: DefaultRandomizer,
        deck: CardPool,
        config: TavernConfig,
    }

    impl Fixture {
        fn new(coins: i32) -> Self {
            let mut state = PlayerState::new(40, 5);
            state.coins = coins;
            Self {
                state,
                randomizer: DefaultRandomizer::new(1),
                deck: CardPool::default(),
                config: TavernConfig::default(),
            }
        }

        fn context(&mut self, turn: u32) -> BuyPhaseContext<'_> {
            BuyPhaseContext {
                owner_id: PlayerId::new(0),
                owner_name: "alice",
                owner: &mut self.state,
                randomizer: &mut self.randomizer,
                deck: &mut self.deck,
                config: &self.config,
                turn,
            }
        }
    }

    #[test]
    fn test_activate_once_per_turn() {
        let mut fixture = Fixture::new(10);
        let mut hero = EmptyHero;
        let mut power = HeroPower::new();

        let mut context = fixture.context(0);
        assert!(power.valid(&hero, &context.view()));
        power.activate(&mut hero, &mut context).unwrap();
        assert_eq!(context.owner.coins, 8);
        assert!(power.is_used());

        assert!(!power.valid(&hero, &context.view()));
        assert!(matches!(
            power.activate(&mut hero, &mut context),
            Err(TavernError::HeroPowerUnavailable(_))
        ));
        assert_eq!(context.owner.coins, 8);

        power.on_buy_step_start();
        assert_eq!(power.state(), PowerState::Unused);
        assert!(power.activate(&mut hero, &mut context).is_ok());
        assert_eq!(context.owner.coins, 6);
    }

    #[test]
    fn test_requires_coins() {
        let mut fixture = Fixture::new(1);
        let mut hero = EmptyHero;
        let mut power = HeroPower::new();
        let mut context = fixture.context(0);

        assert!(!power.valid(&hero, &context.view()));
        assert!(power.activate(&mut hero, &mut context).is_err());
        assert_eq!(power.state(), PowerState::Unused);
    }

    #[test]
    fn test_custom_predicate_and_effect_order() {
        let mut fixture = Fixture::new(2);
        let mut hero = Refunder::default();
        let mut power = HeroPower::new();

        {
            let context = fixture.context(0);
            assert!(!power.valid(&hero, &context.view()));
        }

        let mut context = fixture.context(1);
        power.activate(&mut hero, &mut context).unwrap();
        // Paid 2 before the effect refunded 1.
        assert_eq!(context.owner.coins, 1);
        assert_eq!(hero.uses, 1);
    }
}
