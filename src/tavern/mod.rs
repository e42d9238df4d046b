//! The tavern: player registry, phase loop, elimination order and the
//! buy-phase action set.

mod action;
mod player;
mod standings;
#[allow(clippy::module_inception)]
mod tavern;

pub use action::BuyPhaseAction;
pub use player::{upgrade_cost_at, Player, PlayerState};
pub use standings::Standings;
pub use tavern::{FightRecord, MatchPhase, Tavern, TavernBuilder};
