//! Hero power tests.
//!
//! These tests verify the once-per-turn gate through the tavern:
//! - One activation per buy phase, reset at the next buy step
//! - Coins are paid before the effect runs
//! - Validity checks have no side effects
//! - Unaffordable or vetoed powers are refused

use std::sync::{Arc, Mutex};

use rust_tavern::events::BuyPhaseView;
use rust_tavern::heroes::{EmptyHero, Patchwerk};
use rust_tavern::{BuyPhaseAction, BuyPhaseContext, Hero, PlayerId, PowerState, Tavern, TavernConfig, TavernError};

/// Records the owner's coins each time its power resolves.
#[derive(Debug)]
struct Tinkerer {
    coins_seen: Arc<Mutex<Vec<i32>>>,
}

impl Hero for Tinkerer {
    fn name(&self) -> &str {
        "Tinkerer"
    }

    fn power_cost(&self) -> i32 {
        3
    }

    fn hero_power_impl(&mut self, context: &mut BuyPhaseContext<'_>) {
        self.coins_seen.lock().unwrap().push(context.owner.coins);
    }
}

/// Power only usable on even turns.
#[derive(Debug)]
struct EvenTurns;

impl Hero for EvenTurns {
    fn name(&self) -> &str {
        "EvenTurns"
    }

    fn power_cost(&self) -> i32 {
        0
    }

    fn hero_power_valid_impl(&self, view: &BuyPhaseView<'_>) -> bool {
        view.turn % 2 == 0
    }
}

fn tavern_with(config: TavernConfig, hero: Box<dyn Hero>) -> (Tavern, PlayerId) {
    let mut tavern = Tavern::new(config);
    let id = tavern.add_player_with_hero("alice", hero).unwrap();
    tavern.add_player_with_hero("bob", Box::new(EmptyHero)).unwrap();
    (tavern, id)
}

#[test]
fn test_once_per_turn_across_turns() {
    let coins_seen = Arc::new(Mutex::new(Vec::new()));
    let config = TavernConfig::default().with_income(10, 10);
    let (mut tavern, alice) = tavern_with(config, Box::new(Tinkerer { coins_seen: coins_seen.clone() }));

    for turn in 0..5 {
        tavern.buying_step().unwrap();
        assert_eq!(tavern.player(alice).unwrap().hero_power().state(), PowerState::Unused);
        assert!(tavern.valid_actions(alice).contains(&BuyPhaseAction::HeroPower));

        tavern.use_hero_power(alice).unwrap();
        assert!(tavern.player(alice).unwrap().hero_power().is_used());
        assert!(!tavern.is_valid_action(alice, BuyPhaseAction::HeroPower));
        assert!(matches!(
            tavern.use_hero_power(alice),
            Err(TavernError::InvalidAction { .. })
        ));

        assert_eq!(coins_seen.lock().unwrap().len(), turn + 1);
        tavern.combat_step().unwrap();
    }
}

#[test]
fn test_cost_paid_before_effect() {
    let coins_seen = Arc::new(Mutex::new(Vec::new()));
    let config = TavernConfig::default().with_income(10, 10);
    let (mut tavern, alice) = tavern_with(config, Box::new(Tinkerer { coins_seen: coins_seen.clone() }));
    tavern.buying_step().unwrap();

    tavern.use_hero_power(alice).unwrap();

    assert_eq!(*coins_seen.lock().unwrap(), vec![7]);
    assert_eq!(tavern.player(alice).unwrap().state.coins, 7);
}

#[test]
fn test_validity_check_is_side_effect_free() {
    let coins_seen = Arc::new(Mutex::new(Vec::new()));
    let config = TavernConfig::default().with_income(10, 10);
    let (mut tavern, alice) = tavern_with(config, Box::new(Tinkerer { coins_seen: coins_seen.clone() }));
    tavern.buying_step().unwrap();

    for _ in 0..10 {
        assert!(tavern.is_valid_action(alice, BuyPhaseAction::HeroPower));
    }
    let _ = tavern.valid_actions(alice);

    let player = tavern.player(alice).unwrap();
    assert_eq!(player.state.coins, 10);
    assert!(!player.hero_power().is_used());
    assert!(coins_seen.lock().unwrap().is_empty());
}

#[test]
fn test_unaffordable_power_refused() {
    let coins_seen = Arc::new(Mutex::new(Vec::new()));
    // Turn 0 income is 2; the power costs 3.
    let config = TavernConfig::default().with_income(2, 10);
    let (mut tavern, alice) = tavern_with(config, Box::new(Tinkerer { coins_seen: coins_seen.clone() }));
    tavern.buying_step().unwrap();

    assert!(!tavern.is_valid_action(alice, BuyPhaseAction::HeroPower));
    assert!(tavern.use_hero_power(alice).is_err());
    assert_eq!(tavern.player(alice).unwrap().state.coins, 2);

    // Turn 1 income is 3.
    tavern.combat_step().unwrap();
    tavern.buying_step().unwrap();
    tavern.use_hero_power(alice).unwrap();
    assert_eq!(*coins_seen.lock().unwrap(), vec![0]);
}

#[test]
fn test_hero_predicate_vetoes_power() {
    let (mut tavern, alice) = tavern_with(TavernConfig::default(), Box::new(EvenTurns));

    tavern.buying_step().unwrap();
    assert!(tavern.is_valid_action(alice, BuyPhaseAction::HeroPower));

    tavern.combat_step().unwrap();
    tavern.buying_step().unwrap();
    assert!(!tavern.is_valid_action(alice, BuyPhaseAction::HeroPower));
    assert!(tavern.use_hero_power(alice).is_err());
    assert_eq!(tavern.player(alice).unwrap().hero_power().state(), PowerState::Unused);
}

#[test]
fn test_passive_hero_never_offers_power() {
    let (mut tavern, alice) = tavern_with(TavernConfig::default().with_income(10, 10), Box::new(Patchwerk));
    tavern.buying_step().unwrap();
    assert!(!tavern.valid_actions(alice).contains(&BuyPhaseAction::HeroPower));
}

#[test]
fn test_power_unavailable_outside_buy_phase() {
    let (mut tavern, alice) = tavern_with(TavernConfig::default(), Box::new(EvenTurns));
    assert!(!tavern.is_valid_action(alice, BuyPhaseAction::HeroPower));

    tavern.buying_step().unwrap();
    tavern.combat_step().unwrap();
    assert!(!tavern.is_valid_action(alice, BuyPhaseAction::HeroPower));
}
