//! Error types for the tavern engine.
//!
//! Every variant is a precondition violation: the caller asked for something
//! the validity queries would have refused. Game legality is never reported
//! through errors during play.

use thiserror::Error;

use crate::core::PlayerId;

#[derive(Error, Debug)]
pub enum TavernError {
    #[error("Player name already registered: {0}")]
    DuplicatePlayer(String),

    #[error("Player registry is full ({0} players)")]
    RegistryFull(usize),

    #[error("Unknown player: {0}")]
    UnknownPlayer(PlayerId),

    #[error("Unknown hero: {0}")]
    UnknownHero(String),

    #[error("Hero pool exhausted: needed {needed}, {available} left")]
    HeroPoolExhausted { needed: usize, available: usize },

    #[error("{0} has already chosen a hero")]
    HeroAlreadyChosen(PlayerId),

    #[error("Odd number of fighting players and no eliminated player to fill the bye")]
    NoByeOpponent,

    #[error("Hero power is not available to {0}")]
    HeroPowerUnavailable(PlayerId),

    #[error("Invalid buy phase action for {player}: {action}")]
    InvalidAction { player: PlayerId, action: String },

    #[error("Cannot {operation} during {phase}")]
    OutOfPhase { operation: &'static str, phase: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, TavernError>;
