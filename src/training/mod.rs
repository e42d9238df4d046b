//! Rollout infrastructure for training loops.
//!
//! ## Overview
//!
//! - **MatchRunner**: drives a tavern's phase loop until the match is decided
//! - **BuyPhaseAgent**: the hook a policy plugs into for each buy phase
//! - **MatchRecord**: placements and metadata for one finished rollout
//! - **run_parallel**: independent rollouts across rayon's thread pool
//! - **rollout_seeds**: a reproducible batch of match seeds from one master seed
//!
//! ## Usage
//!
//! ```rust
//! use rust_tavern::training::{MatchRunner, PassAgent};
//! use rust_tavern::{heroes::EmptyHero, Tavern, TavernConfig};
//!
//! let mut tavern = Tavern::new(TavernConfig::default());
//! tavern.add_player_with_hero("alice", Box::new(EmptyHero)).unwrap();
//! tavern.add_player_with_hero("bob", Box::new(EmptyHero)).unwrap();
//!
//! let record = MatchRunner::new()
//!     .with_max_turns(3)
//!     .run(&mut tavern, &mut PassAgent, 42)
//!     .unwrap();
//! assert_eq!(record.turns, 3);
//! ```

pub mod runner;

pub use runner::{rollout_seeds, run_parallel, BuyPhaseAgent, MatchRecord, MatchRunner, MatchSetup, PassAgent};
