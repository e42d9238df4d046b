//! Hero registry for variant lookup and construction.
//!
//! The `HeroRegistry` maps a [`HeroId`] to a factory producing a fresh hero.
//! It is filled explicitly at startup (see [`HeroRegistry::standard`]); nothing
//! registers itself.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::hero::Hero;

/// Identifier of a hero variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HeroId(pub u16);

impl HeroId {
    /// Create a new hero ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }
}

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hero {}", self.0)
    }
}

/// A registered hero variant.
#[derive(Clone, Copy)]
pub struct HeroDefinition {
    pub id: HeroId,

    pub name: &'static str,

    /// Builds a fresh instance for a player.
    pub factory: fn() -> Box<dyn Hero>,

    /// Offered to players through the shared hero pool.
    pub in_pool: bool,
}

impl HeroDefinition {
    /// Create a definition that is offered in the hero pool.
    #[must_use]
    pub fn new(id: HeroId, name: &'static str, factory: fn() -> Box<dyn Hero>) -> Self {
        Self {
            id,
            name,
            factory,
            in_pool: true,
        }
    }

    /// Keep this hero out of the pool (builder pattern).
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.in_pool = false;
        self
    }
}

impl fmt::Debug for HeroDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeroDefinition")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("in_pool", &self.in_pool)
            .finish_non_exhaustive()
    }
}

/// Registry of hero variants, iterated in registration order.
#[derive(Clone, Debug, Default)]
pub struct HeroRegistry {
    heroes: FxHashMap<HeroId, HeroDefinition>,
    order: Vec<HeroId>,
}

impl HeroRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hero definition.
    ///
    /// Panics if a hero with the same ID already exists.
    pub fn register(&mut self, hero: HeroDefinition) {
        if self.heroes.contains_key(&hero.id) {
            panic!("Hero with ID {:?} already registered", hero.id);
        }
        self.order.push(hero.id);
        self.heroes.insert(hero.id, hero);
    }

    /// Get a hero definition by ID.
    #[must_use]
    pub fn get(&self, id: HeroId) -> Option<&HeroDefinition> {
        self.heroes.get(&id)
    }

    /// Find a hero definition by display name.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&HeroDefinition> {
        self.iter().find(|h| h.name == name)
    }

    /// Build a fresh hero instance.
    #[must_use]
    pub fn create(&self, id: HeroId) -> Option<Box<dyn Hero>> {
        self.get(id).map(|h| (h.factory)())
    }

    /// Check if a hero ID is registered.
    #[must_use]
    pub fn contains(&self, id: HeroId) -> bool {
        self.heroes.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }

    /// Iterate over definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &HeroDefinition> {
        self.order.iter().filter_map(|id| self.heroes.get(id))
    }

    /// IDs of heroes offered in the pool, in registration order.
    #[must_use]
    pub fn pool_ids(&self) -> Vec<HeroId> {
        self.iter().filter(|h| h.in_pool).map(|h| h.id).collect()
    }
}
