//! Full match tests.
//!
//! These tests verify whole matches played by random agents:
//! - Same seed, same match
//! - Parallel rollouts match sequential ones
//! - Pairing and standings invariants hold every turn
//! - Finished matches place every player exactly once

use std::collections::HashSet;

use rust_tavern::training::{rollout_seeds, run_parallel, MatchSetup, PassAgent};
use rust_tavern::{
    BuyPhaseAction, BuyPhaseAgent, GameRng, MatchPhase, MatchRecord, MatchRunner, PlayerId, Result, Tavern, TavernConfig,
};

const PLAYERS: usize = 8;

/// Plays uniformly random legal actions until it picks `EndPhase`.
#[derive(Debug)]
struct RandomAgent {
    rng: GameRng,
}

impl BuyPhaseAgent for RandomAgent {
    fn buy_phase(&mut self, tavern: &mut Tavern, player: PlayerId) -> Result<()> {
        for _ in 0..16 {
            let actions = tavern.valid_actions(player);
            let action = actions[self.rng.index(actions.len())];
            tavern.apply_action(player, action)?;
            if action == BuyPhaseAction::EndPhase {
                break;
            }
        }
        Ok(())
    }
}

fn setup(seed: u64) -> Result<MatchSetup> {
    let config = TavernConfig::default().with_seed(seed).with_hero_pool_copies(4);
    let mut tavern = Tavern::new(config);
    let mut rng = GameRng::new(seed);
    for index in 0..PLAYERS {
        let id = tavern.add_player(format!("p{index}"))?;
        tavern.choose_hero(id, rng.index(3))?;
    }
    let agent: Box<dyn BuyPhaseAgent + Send> = Box::new(RandomAgent { rng: rng.fork() });
    Ok((tavern, agent))
}

fn play(seed: u64) -> MatchRecord {
    let (mut tavern, mut agent) = setup(seed).unwrap();
    MatchRunner::new().run(&mut tavern, agent.as_mut(), seed).unwrap()
}

#[test]
fn test_same_seed_same_match() {
    for seed in [1, 2, 3] {
        assert_eq!(play(seed), play(seed));
    }
}

#[test]
fn test_parallel_matches_sequential() {
    let seeds = rollout_seeds(10, 8);
    let runner = MatchRunner::new();

    let parallel: Vec<MatchRecord> = run_parallel(&seeds, &runner, setup)
        .into_iter()
        .collect::<Result<_>>()
        .unwrap();
    let sequential: Vec<MatchRecord> = seeds.iter().map(|&seed| play(seed)).collect();

    assert_eq!(parallel, sequential);
    for (record, seed) in parallel.iter().zip(&seeds) {
        assert_eq!(record.seed, *seed);
        assert_eq!(record.heroes.len(), PLAYERS);
    }
}

#[test]
fn test_invariants_hold_every_turn() {
    for seed in 0..4 {
        let (mut tavern, mut agent) = setup(seed).unwrap();
        let mut previous_losers: Vec<PlayerId> = Vec::new();

        while !tavern.game_over() && tavern.turn_count() < 100 {
            tavern.buying_step().unwrap();

            let live: Vec<PlayerId> = PlayerId::all(PLAYERS)
                .filter(|id| !tavern.player(*id).unwrap().is_eliminated())
                .collect();
            let pairings = tavern.current_player_pairings();
            assert_eq!(pairings.len(), (live.len() + 1) / 2);
            let fighters: Vec<PlayerId> = pairings.iter().flat_map(|&(a, b)| [a, b]).collect();
            let unique: HashSet<PlayerId> = fighters.iter().copied().collect();
            assert_eq!(unique.len(), fighters.len());
            assert!(live.iter().all(|id| unique.contains(id)));

            for player in live {
                agent.buy_phase(&mut tavern, player).unwrap();
            }
            tavern.combat_step().unwrap();

            let losers: Vec<PlayerId> = tavern.loser_ids().iter().copied().collect();
            assert!(losers.starts_with(&previous_losers));
            let unique: HashSet<PlayerId> = losers.iter().copied().collect();
            assert_eq!(unique.len(), losers.len());
            for id in PlayerId::all(PLAYERS) {
                if tavern.player(id).unwrap().is_eliminated() {
                    assert!(unique.contains(&id));
                }
            }
            previous_losers = losers;
        }

        if tavern.game_over() {
            assert_eq!(tavern.phase(), MatchPhase::Finished);
            assert_eq!(tavern.loser_ids().len(), PLAYERS);
        }
    }
}

#[test]
fn test_finished_record_places_everyone() {
    for seed in 20..24 {
        let record = play(seed);
        if record.finished {
            assert_eq!(record.placements.len(), PLAYERS);
            let unique: HashSet<&String> = record.placements.iter().collect();
            assert_eq!(unique.len(), PLAYERS);
            assert_eq!(record.winner(), record.placements.first().map(String::as_str));
        } else {
            assert_eq!(record.turns, 100);
            assert_eq!(record.winner(), None);
        }

        let restored = MatchRecord::from_bytes(&record.to_bytes().unwrap()).unwrap();
        assert_eq!(restored, record);
    }
}

#[test]
fn test_passive_agents_hit_turn_limit() {
    let (mut tavern, _) = setup(5).unwrap();
    let record = MatchRunner::new()
        .with_max_turns(6)
        .run(&mut tavern, &mut PassAgent, 5)
        .unwrap();

    // Empty boards always draw.
    assert!(!record.finished);
    assert_eq!(record.turns, 6);
    assert!(record.placements.is_empty());
    assert!(tavern.losers().is_empty());
}
