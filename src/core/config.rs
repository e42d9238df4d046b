//! Match configuration.
//!
//! `TavernConfig` collects the economy constants and match setup knobs.
//! Everything has a default matching the standard ruleset; use the `with_*`
//! builders to override individual values.

use serde::{Deserialize, Serialize};

use super::logger::{OutputMode, VerbosityLevel};

/// Highest tavern tier a player can reach.
pub const MAX_TAVERN_TIER: u8 = 6;

/// Match configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TavernConfig {
    /// Seed for the default randomizer.
    /// Same seed produces the same match given the same decisions.
    pub seed: u64,

    /// Heroes offered to each player registered with `add_player`.
    pub hero_choices: usize,

    /// Copies of each catalog hero placed in the shared hero pool.
    pub hero_pool_copies: usize,

    /// Income on the first turn; grows by one each turn.
    pub base_income: i32,

    /// Income ceiling.
    pub max_income: i32,

    /// Coins paid to buy a card from the store.
    pub minion_cost: i32,

    /// Coins gained when selling a card from the board.
    pub sell_value: i32,

    /// Coins paid to refresh the store.
    pub reroll_cost: i32,

    /// Maximum cards on a board.
    pub max_board_size: usize,

    /// Maximum cards in a hand.
    pub max_hand_size: usize,

    /// Store slots per tavern tier (index 0 is tier 1).
    pub store_sizes: [usize; MAX_TAVERN_TIER as usize],

    /// Logger verbosity.
    pub verbosity: VerbosityLevel,

    /// Logger destination.
    pub output_mode: OutputMode,
}

impl Default for TavernConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            hero_choices: 3,
            hero_pool_copies: 3,
            base_income: 3,
            max_income: 10,
            minion_cost: 3,
            sell_value: 1,
            reroll_cost: 1,
            max_board_size: 7,
            max_hand_size: 10,
            store_sizes: [3, 4, 4, 5, 5, 6],
            verbosity: VerbosityLevel::Silent,
            output_mode: OutputMode::Stdout,
        }
    }
}

impl TavernConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the randomizer seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set how many heroes each player is offered.
    #[must_use]
    pub fn with_hero_choices(mut self, choices: usize) -> Self {
        self.hero_choices = choices;
        self
    }

    /// Set how many copies of each hero go into the pool.
    #[must_use]
    pub fn with_hero_pool_copies(mut self, copies: usize) -> Self {
        self.hero_pool_copies = copies;
        self
    }

    /// Set the income curve.
    #[must_use]
    pub fn with_income(mut self, base: i32, max: i32) -> Self {
        self.base_income = base;
        self.max_income = max;
        self
    }

    /// Set logging.
    #[must_use]
    pub fn with_logging(mut self, verbosity: VerbosityLevel, output_mode: OutputMode) -> Self {
        self.verbosity = verbosity;
        self.output_mode = output_mode;
        self
    }

    /// Income for the turn with the given number (0-based).
    #[must_use]
    pub fn income_for_turn(&self, turn: u32) -> i32 {
        let turn = i32::try_from(turn).unwrap_or(i32::MAX);
        turn.saturating_add(self.base_income).min(self.max_income)
    }

    /// Store slots for a tavern tier (clamped to 1..=6).
    #[must_use]
    pub fn store_size(&self, tier: u8) -> usize {
        let tier = tier.clamp(1, MAX_TAVERN_TIER);
        self.store_sizes[usize::from(tier - 1)]
    }
}
