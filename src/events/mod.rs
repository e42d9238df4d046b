//! Phase events and the contexts that deliver them.

mod context;
mod event;

pub use context::{BuyPhaseContext, BuyPhaseView, CombatPhaseContext, RandomizerCell, WarParty};
pub use event::{EventKind, PhaseEvent};
