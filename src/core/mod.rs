//! Core match types: player ids, RNG, configuration, logging.
//!
//! These are the building blocks every other module leans on. None of them
//! know about heroes, cards or the tavern itself.

pub mod config;
pub mod logger;
pub mod player;
pub mod rng;

pub use config::{TavernConfig, MAX_TAVERN_TIER};
pub use logger::{LogEntry, MatchLogger, OutputMode, VerbosityLevel};
pub use player::{PlayerId, MAX_PLAYERS};
pub use rng::{GameRng, GameRngState};
