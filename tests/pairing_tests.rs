//! Pairing tests.
//!
//! These tests verify round pairing:
//! - Every live player fights exactly once per round
//! - Odd counts are evened out with an eliminated player
//! - Same seed, same pairings

use proptest::prelude::*;

use rust_tavern::heroes::EmptyHero;
use rust_tavern::{PlayerId, Tavern, TavernConfig, TavernError};

fn tavern_with_players(count: usize, seed: u64) -> Tavern {
    let mut tavern = Tavern::new(TavernConfig::default().with_seed(seed));
    for index in 0..count {
        tavern
            .add_player_with_hero(format!("player-{index}"), Box::new(EmptyHero))
            .unwrap();
    }
    tavern
}

fn eliminate(tavern: &mut Tavern, players: impl IntoIterator<Item = usize>) {
    for index in players {
        tavern.player_mut(PlayerId::from_index(index)).unwrap().state.health = 0;
    }
    tavern.update_losers();
}

fn fighting(tavern: &Tavern) -> Vec<PlayerId> {
    PlayerId::all(tavern.players().len())
        .filter(|id| !tavern.player(*id).unwrap().is_eliminated())
        .collect()
}

/// Scenario: 8 players, one eliminated before the round and the only loser.
#[test]
fn test_seven_live_players_get_a_bye() {
    let mut tavern = tavern_with_players(8, 42);
    eliminate(&mut tavern, [5]);
    assert_eq!(tavern.loser_ids().iter().copied().collect::<Vec<_>>(), vec![PlayerId::new(5)]);

    tavern.generate_pairings().unwrap();
    let pairings = tavern.current_player_pairings();
    assert_eq!(pairings.len(), 4);

    let mut seen: Vec<PlayerId> = pairings.iter().flat_map(|&(a, b)| [a, b]).collect();
    seen.sort();
    assert_eq!(seen, PlayerId::all(8).collect::<Vec<_>>());
    // Pairing doesn't touch standings.
    assert_eq!(tavern.loser_ids().len(), 1);
}

/// The bye goes to the most recent loser.
#[test]
fn test_bye_is_most_recent_loser() {
    let mut tavern = tavern_with_players(6, 7);
    eliminate(&mut tavern, [0]);
    eliminate(&mut tavern, [3, 4]);
    // Losers: 0, 3, 4. Live: 1, 2, 5.

    tavern.generate_pairings().unwrap();
    let seen: Vec<PlayerId> = tavern
        .current_player_pairings()
        .iter()
        .flat_map(|&(a, b)| [a, b])
        .collect();
    assert!(seen.contains(&PlayerId::new(4)));
    assert!(!seen.contains(&PlayerId::new(0)));
    assert!(!seen.contains(&PlayerId::new(3)));
}

#[test]
fn test_odd_count_without_losers_is_refused() {
    let mut tavern = tavern_with_players(5, 1);
    assert!(matches!(tavern.generate_pairings(), Err(TavernError::NoByeOpponent)));
    assert!(matches!(tavern.buying_step(), Err(TavernError::NoByeOpponent)));
}

#[test]
fn test_pairings_available_during_buy_phase() {
    let mut tavern = tavern_with_players(4, 3);
    assert!(tavern.current_player_pairings().is_empty());
    tavern.buying_step().unwrap();
    assert_eq!(tavern.current_player_pairings().len(), 2);
}

proptest! {
    #[test]
    fn prop_pairings_cover_fighters_once(
        count in 2usize..=16,
        seed in any::<u64>(),
        dead_mask in any::<u16>(),
    ) {
        let mut tavern = tavern_with_players(count, seed);
        let dead: Vec<usize> = (0..count).filter(|i| dead_mask & (1 << i) != 0).collect();
        eliminate(&mut tavern, dead);

        let live = fighting(&tavern);
        match tavern.generate_pairings() {
            Ok(()) => {
                let pairings = tavern.current_player_pairings().to_vec();
                prop_assert_eq!(pairings.len(), (live.len() + 1) / 2);

                let mut seen: Vec<PlayerId> = pairings.iter().flat_map(|&(a, b)| [a, b]).collect();
                seen.sort();
                seen.dedup();
                prop_assert_eq!(seen.len(), pairings.len() * 2);

                for player in &live {
                    prop_assert!(seen.contains(player));
                }
                let byes: Vec<_> = seen.iter().filter(|p| !live.contains(p)).collect();
                if live.len() % 2 == 1 {
                    prop_assert_eq!(byes.len(), 1);
                    prop_assert!(tavern.loser_ids().contains(byes[0]));
                } else {
                    prop_assert!(byes.is_empty());
                }
            }
            Err(TavernError::NoByeOpponent) => {
                prop_assert_eq!(live.len() % 2, 1);
                prop_assert!(tavern.loser_ids().is_empty());
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    #[test]
    fn prop_same_seed_same_pairings(count in 1usize..=8, seed in any::<u64>()) {
        let count = count * 2;
        let mut a = tavern_with_players(count, seed);
        let mut b = tavern_with_players(count, seed);
        for _ in 0..3 {
            a.generate_pairings().unwrap();
            b.generate_pairings().unwrap();
            prop_assert_eq!(a.current_player_pairings(), b.current_player_pairings());
        }
    }
}
