//! Players and their per-match state.
//!
//! A [`Player`] is split into disjoint parts (hero, power gate, state) so
//! that the tavern can lend the hero and the state to a context at the same
//! time.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardPool};
use crate::core::TavernConfig;
use crate::heroes::{Hero, HeroId, HeroPower};
use crate::randomizer::Randomizer;

/// Mutable per-match state of one player.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerState {
    /// Zero or below means eliminated.
    pub health: i32,

    pub coins: i32,

    /// Current tavern tier (1-6).
    pub tavern_tier: u8,

    /// Coins needed for the next tavern upgrade. Drops by one every combat step.
    pub tavern_upgrade_cost: i32,

    pub hand: Vec<Card>,

    /// Cards offered for purchase this turn.
    pub store: Vec<Card>,

    /// The board, in position order.
    pub in_play: Vec<Card>,

    pub discovered_cards: Vec<Card>,
}

impl PlayerState {
    /// Fresh state at tier 1 with no coins and no cards.
    #[must_use]
    pub fn new(starting_health: i32, tavern_upgrade_cost: i32) -> Self {
        Self {
            health: starting_health,
            coins: 0,
            tavern_tier: 1,
            tavern_upgrade_cost,
            hand: Vec::new(),
            store: Vec::new(),
            in_play: Vec::new(),
            discovered_cards: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.health <= 0
    }

    /// Room for another card on a board of at most `max_board_size` cards.
    #[must_use]
    pub fn room_on_board(&self, max_board_size: usize) -> bool {
        self.in_play.len() < max_board_size
    }

    /// Set coins to the turn's income. Unspent coins don't carry over.
    pub fn apply_turn_start_income(&mut self, config: &TavernConfig, turn: u32) {
        self.coins = config.income_for_turn(turn);
    }

    /// Refill the store up to the tier's size from `deck`.
    ///
    /// Stops early if the deck runs out of eligible cards.
    pub fn draw(
        &mut self,
        deck: &mut CardPool,
        randomizer: &mut dyn Randomizer,
        player_name: &str,
        turn: u32,
        config: &TavernConfig,
    ) {
        let size = config.store_size(self.tavern_tier);
        while self.store.len() < size {
            match deck.draw(self.tavern_tier, randomizer, player_name, turn) {
                Some(card) => self.store.push(card),
                None => break,
            }
        }
    }

    /// Move every store card back into `deck`.
    pub fn return_store(&mut self, deck: &mut CardPool) {
        for card in self.store.drain(..) {
            deck.return_card(card);
        }
    }

    pub fn decrease_tavern_upgrade_cost(&mut self) {
        self.tavern_upgrade_cost = (self.tavern_upgrade_cost - 1).max(0);
    }
}

/// Cost of upgrading from `tier` under `hero`'s table, 0 at the top tier.
#[must_use]
pub fn upgrade_cost_at(hero: &dyn Hero, tier: u8) -> i32 {
    hero.tavern_upgrade_costs().get(usize::from(tier)).copied().unwrap_or(0)
}

/// A registered player.
#[derive(Debug)]
pub struct Player {
    pub(crate) name: String,
    pub(crate) hero: Box<dyn Hero>,
    pub(crate) hero_power: HeroPower,
    pub(crate) hero_options: SmallVec<[HeroId; 3]>,
    pub(crate) hero_chosen: bool,

    /// Health, coins and cards.
    pub state: PlayerState,
}

impl Player {
    /// Create a player whose state is seeded from `hero`.
    #[must_use]
    pub fn new(name: impl Into<String>, hero: Box<dyn Hero>, hero_options: SmallVec<[HeroId; 3]>) -> Self {
        let state = PlayerState::new(hero.starting_health(), upgrade_cost_at(hero.as_ref(), 1));
        Self {
            name: name.into(),
            hero,
            hero_power: HeroPower::new(),
            hero_options,
            hero_chosen: false,
            state,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn hero(&self) -> &dyn Hero {
        self.hero.as_ref()
    }

    #[must_use]
    pub fn hero_power(&self) -> &HeroPower {
        &self.hero_power
    }

    /// Heroes offered at registration, empty if the hero was assigned directly.
    #[must_use]
    pub fn hero_options(&self) -> &[HeroId] {
        &self.hero_options
    }

    #[must_use]
    pub fn has_chosen_hero(&self) -> bool {
        self.hero_chosen
    }

    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.state.is_eliminated()
    }

    /// Swap in the chosen hero and re-seed health and upgrade cost from it.
    pub(crate) fn assign_hero(&mut self, hero: Box<dyn Hero>) {
        self.state.health = hero.starting_health();
        self.state.tavern_upgrade_cost = upgrade_cost_at(hero.as_ref(), self.state.tavern_tier);
        self.hero = hero;
        self.hero_chosen = true;
    }
}
