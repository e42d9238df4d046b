//! Heroes: the capability trait, the once-per-turn power gate, and the
//! registry the tavern draws hero offers from.

mod catalog;
mod hero;
mod power;
mod registry;

pub use catalog::{
    Bartendotron, Deathwing, MillhouseManastorm, Patchwerk, Pyramad, TradePrinceGallywix, BARTENDOTRON,
    DEATHWING, EMPTY_HERO, MILLHOUSE_MANASTORM, PATCHWERK, PYRAMAD, TRADE_PRINCE_GALLYWIX,
};
pub use hero::{EmptyHero, Hero, DEFAULT_POWER_COST, DEFAULT_STARTING_HEALTH, DEFAULT_UPGRADE_COSTS};
pub use power::{HeroPower, PowerState};
pub use registry::{HeroDefinition, HeroId, HeroRegistry};
