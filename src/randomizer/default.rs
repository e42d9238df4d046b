//! Uniform randomizer backed by [`GameRng`].

use super::{pair_halves, Randomizer};
use crate::cards::Card;
use crate::core::{GameRng, GameRngState, PlayerId};
use crate::heroes::HeroId;

/// Uniformly random choices from a seeded ChaCha8 stream.
#[derive(Clone, Debug)]
pub struct DefaultRandomizer {
    rng: GameRng,
}

impl DefaultRandomizer {
    /// Create a randomizer with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }

    /// Wrap an existing stream, e.g. a fork of a rollout master RNG.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Checkpoint of the underlying stream.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        self.rng.state()
    }

    fn pick(&mut self, len: usize, what: &str) -> usize {
        assert!(len > 0, "Cannot select {what} from an empty sequence");
        self.rng.index(len)
    }
}

impl Randomizer for DefaultRandomizer {
    fn select_draw_card(&mut self, cards: &[&Card], _player_name: &str, _round: u32) -> usize {
        self.pick(cards.len(), "a draw card")
    }

    fn select_player_pairings(&mut self, mut players: Vec<PlayerId>) -> Vec<(PlayerId, PlayerId)> {
        self.rng.shuffle(&mut players);
        pair_halves(&players)
    }

    fn select_attack_target(&mut self, defenders: &[&Card]) -> usize {
        self.pick(defenders.len(), "an attack target")
    }

    fn select_friendly_minion(&mut self, friendly_minions: &[&Card]) -> usize {
        self.pick(friendly_minions.len(), "a friendly minion")
    }

    fn select_enemy_minion(&mut self, enemy_minions: &[&Card]) -> usize {
        self.pick(enemy_minions.len(), "an enemy minion")
    }

    fn select_discover_card(&mut self, discoverables: &[&Card]) -> usize {
        self.pick(discoverables.len(), "a discover card")
    }

    fn select_from_store(&mut self, store: &[&Card]) -> usize {
        self.pick(store.len(), "a store card")
    }

    fn select_gain_card(&mut self, cards: &[&Card]) -> usize {
        self.pick(cards.len(), "a card to gain")
    }

    fn select_hero(&mut self, heroes: &[HeroId]) -> usize {
        self.pick(heroes.len(), "a hero")
    }
}
