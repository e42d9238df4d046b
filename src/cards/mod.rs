//! Cards and the shared card pool.
//!
//! The card catalog itself lives outside this crate; what is here is the
//! minimum the orchestrator touches: card instances with an optional combat
//! event handler, and the pool stores are refilled from.

mod card;
mod pool;

pub use card::{Card, CardBehavior, CardId};
pub use pool::CardPool;
