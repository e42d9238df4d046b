//! # rust-tavern
//!
//! Match orchestration and event broadcast for an N-player auto-battler
//! tournament, built for bots and training rollouts.
//!
//! ## Design Principles
//!
//! 1. **One Funnel for Randomness**: Every nondeterministic choice goes
//!    through a `Randomizer`. Same implementation, same calls, same match.
//!
//! 2. **Symmetric Combat Delivery**: Combat events reach both sides in a
//!    fixed order, each side seeing itself as "friendly".
//!
//! 3. **Legality Is a Query**: Hero powers and buy actions expose validity
//!    checks. Acting without checking is a caller bug and is refused.
//!
//! ## Match Loop
//!
//! ```
//! use rust_tavern::{heroes::EmptyHero, Tavern, TavernConfig};
//!
//! let mut tavern = Tavern::new(TavernConfig::default());
//! for name in ["alice", "bob", "carol", "dave"] {
//!     tavern.add_player_with_hero(name, Box::new(EmptyHero)).unwrap();
//! }
//!
//! tavern.buying_step().unwrap();
//! assert_eq!(tavern.current_player_pairings().len(), 2);
//! tavern.combat_step().unwrap();
//! assert_eq!(tavern.turn_count(), 1);
//! assert!(!tavern.game_over());
//! ```
//!
//! ## Modules
//!
//! - `core`: Player ids, RNG, configuration, logging
//! - `randomizer`: The `Randomizer` selection interface and its default
//! - `cards`: Card instances, combat behaviors, the shared card pool
//! - `events`: Phase events and the buy/combat delivery contexts
//! - `heroes`: Hero capability trait, hero power gate, registry, catalog
//! - `combat`: Fight resolver seam and a reference resolver
//! - `tavern`: The orchestrator, players, buy actions, standings
//! - `training`: Match runner and parallel rollouts
//! - `python`: PyO3 bindings (feature `python`)

pub mod cards;
pub mod combat;
pub mod core;
pub mod error;
pub mod events;
pub mod heroes;
pub mod randomizer;
pub mod tavern;
pub mod training;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, MatchLogger, PlayerId, TavernConfig, VerbosityLevel};

pub use crate::error::{Result, TavernError};

pub use crate::randomizer::{DefaultRandomizer, Randomizer};

pub use crate::cards::{Card, CardBehavior, CardId, CardPool};

pub use crate::events::{BuyPhaseContext, BuyPhaseView, CombatPhaseContext, EventKind, PhaseEvent, WarParty};

pub use crate::heroes::{EmptyHero, Hero, HeroId, HeroPower, HeroRegistry, PowerState};

pub use crate::combat::{BoardStrengthResolver, CombatResolver, FightOutcome};

pub use crate::tavern::{
    BuyPhaseAction, FightRecord, MatchPhase, Player, PlayerState, Standings, Tavern, TavernBuilder,
};

pub use crate::training::{BuyPhaseAgent, MatchRecord, MatchRunner};
