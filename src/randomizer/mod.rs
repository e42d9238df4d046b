//! The single funnel for every nondeterministic choice in a match.
//!
//! Pairings, draws, combat targets, discovers and hero offers all go through
//! a [`Randomizer`]. Swapping the implementation (seeded, scripted, or driven
//! by a learned policy) changes every choice without touching any caller.
//!
//! Given the same implementation and the same sequence of calls with the same
//! inputs, a match replays identically.
//!
//! ## Preconditions
//!
//! Every `select_*` call that picks one element requires a non-empty input.
//! Calling one with an empty slice is a bug in the caller and panics.

mod default;

pub use default::DefaultRandomizer;

use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::PlayerId;
use crate::heroes::HeroId;

/// Selection interface for every random decision point.
///
/// Card selections return an index into the slice they were given.
pub trait Randomizer: Send {
    /// Pick the card a player draws from the pool.
    fn select_draw_card(&mut self, cards: &[&Card], player_name: &str, round: u32) -> usize;

    /// Pair up players for a round.
    ///
    /// The tavern always passes an even number of players. The result covers
    /// each of them exactly once.
    fn select_player_pairings(&mut self, players: Vec<PlayerId>) -> Vec<(PlayerId, PlayerId)>;

    /// Pick which defender an attacker hits.
    fn select_attack_target(&mut self, defenders: &[&Card]) -> usize;

    /// Pick a friendly minion for an effect.
    fn select_friendly_minion(&mut self, friendly_minions: &[&Card]) -> usize;

    /// Pick an enemy minion for an effect.
    fn select_enemy_minion(&mut self, enemy_minions: &[&Card]) -> usize;

    /// Pick the card a discover resolves to.
    fn select_discover_card(&mut self, discoverables: &[&Card]) -> usize;

    /// Pick a card out of a store.
    fn select_from_store(&mut self, store: &[&Card]) -> usize;

    /// Pick a card to gain.
    fn select_gain_card(&mut self, cards: &[&Card]) -> usize;

    /// Pick one hero out of a pool.
    fn select_hero(&mut self, heroes: &[HeroId]) -> usize;

    /// Draw `count` heroes out of `pool` without replacement.
    ///
    /// Panics if the pool holds fewer than `count` heroes.
    fn select_heroes(&mut self, pool: &mut Vec<HeroId>, count: usize) -> SmallVec<[HeroId; 3]> {
        assert!(pool.len() >= count, "Hero pool holds {} heroes, {} requested", pool.len(), count);
        (0..count)
            .map(|_| {
                let choice = self.select_hero(pool);
                pool.remove(choice)
            })
            .collect()
    }
}

/// Pair the first half of `players` against the second half, in order.
///
/// With an odd count the last player is left out.
#[must_use]
pub fn pair_halves(players: &[PlayerId]) -> Vec<(PlayerId, PlayerId)> {
    let battles = players.len() / 2;
    players[..battles]
        .iter()
        .copied()
        .zip(players[battles..].iter().copied())
        .collect()
}
