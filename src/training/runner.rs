//! Match driver for rollouts.
//!
//! Runs the phase loop of a [`Tavern`] to completion, handing each live
//! player's buy phase to a [`BuyPhaseAgent`], and condenses the result into
//! a [`MatchRecord`].

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{GameRng, PlayerId};
use crate::error::Result;
use crate::tavern::{BuyPhaseAction, Tavern};

/// Decides what a player does during their buy phase.
///
/// The tavern is in the `Buying` phase when this is called. Implementations
/// should consult [`Tavern::is_valid_action`] or [`Tavern::valid_actions`]
/// before applying anything.
pub trait BuyPhaseAgent {
    fn buy_phase(&mut self, tavern: &mut Tavern, player: PlayerId) -> Result<()>;
}

impl<F> BuyPhaseAgent for F
where
    F: FnMut(&mut Tavern, PlayerId) -> Result<()>,
{
    fn buy_phase(&mut self, tavern: &mut Tavern, player: PlayerId) -> Result<()> {
        self(tavern, player)
    }
}

/// Ends every buy phase without acting.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassAgent;

impl BuyPhaseAgent for PassAgent {
    fn buy_phase(&mut self, tavern: &mut Tavern, player: PlayerId) -> Result<()> {
        tavern.apply_action(player, BuyPhaseAction::EndPhase)
    }
}

/// Outcome of one driven match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Seed the match was set up with.
    pub seed: u64,

    /// Completed combat steps.
    pub turns: u32,

    /// Every player was placed before the turn limit.
    pub finished: bool,

    /// Placed player names, best first.
    pub placements: Vec<String>,

    /// Hero names in registry order.
    pub heroes: Vec<String>,
}

impl MatchRecord {
    /// Name of the winner, if the match finished.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        if self.finished {
            self.placements.first().map(String::as_str)
        } else {
            None
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// Drives matches to completion.
#[derive(Clone, Copy, Debug)]
pub struct MatchRunner {
    max_turns: u32,
}

impl Default for MatchRunner {
    fn default() -> Self {
        Self { max_turns: 100 }
    }
}

impl MatchRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop after this many combat steps even if the match isn't decided.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    #[must_use]
    pub fn max_turns(&self) -> u32 {
        self.max_turns
    }

    /// Run buy and combat phases until the match is over or the turn limit hits.
    pub fn run(&self, tavern: &mut Tavern, agent: &mut dyn BuyPhaseAgent, seed: u64) -> Result<MatchRecord> {
        while !tavern.game_over() && tavern.turn_count() < self.max_turns {
            tavern.buying_step()?;
            let live: Vec<PlayerId> = PlayerId::all(tavern.players().len())
                .filter(|id| tavern.player(*id).is_some_and(|p| !p.is_eliminated()))
                .collect();
            for player in live {
                agent.buy_phase(tavern, player)?;
            }
            tavern.combat_step()?;
        }

        let finished = tavern.game_over();
        let standings = tavern.standings();
        Ok(MatchRecord {
            seed,
            turns: tavern.turn_count(),
            finished,
            placements: standings.placement_names().into_iter().map(str::to_string).collect(),
            heroes: tavern.players().iter().map(|p| p.hero().name().to_string()).collect(),
        })
    }
}

/// Derive `count` independent rollout seeds from one master seed.
///
/// Each seed comes from a fork of the master stream, so the same master seed
/// always yields the same batch.
#[must_use]
pub fn rollout_seeds(master_seed: u64, count: usize) -> Vec<u64> {
    let mut master = GameRng::new(master_seed);
    (0..count).map(|_| master.fork().seed()).collect()
}

/// A freshly set up match: the tavern and the agent that plays it.
pub type MatchSetup = (Tavern, Box<dyn BuyPhaseAgent + Send>);

/// Run one independent match per seed on rayon's pool.
///
/// Each match gets its own tavern and randomizer from `setup`; nothing is
/// shared between them. Results come back in seed order.
pub fn run_parallel<F>(seeds: &[u64], runner: &MatchRunner, setup: F) -> Vec<Result<MatchRecord>>
where
    F: Fn(u64) -> Result<MatchSetup> + Sync,
{
    seeds
        .par_iter()
        .map(|&seed| {
            let (mut tavern, mut agent) = setup(seed)?;
            runner.run(&mut tavern, agent.as_mut(), seed)
        })
        .collect()
}
