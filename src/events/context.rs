//! Delivery contexts for buy-phase and combat events.
//!
//! ## Buy phase
//!
//! A [`BuyPhaseContext`] binds one player to the shared match resources. Buy
//! events go straight to that player's hero; nothing fans out.
//!
//! ## Combat
//!
//! A [`CombatPhaseContext`] is a `Copy` value holding two [`WarParty`]
//! references and the shared randomizer. "Friendly" and "enemy" are always
//! relative to whoever is receiving; [`CombatPhaseContext::enemy_context`]
//! builds the mirrored value by swapping the two parties.
//!
//! War parties keep their parts in `RefCell`s so listeners can reach both
//! boards and owners through a shared context. A listener that borrows its
//! own cell again (a hero reaching for its own `hero` cell, say) panics;
//! that fault is fatal to the fight in progress.

use std::cell::RefCell;
use std::fmt;

use super::event::PhaseEvent;
use crate::cards::{Card, CardPool};
use crate::core::{PlayerId, TavernConfig};
use crate::heroes::Hero;
use crate::randomizer::Randomizer;
use crate::tavern::{Player, PlayerState};

/// Shared randomizer slot handed to combat listeners.
pub type RandomizerCell<'a> = RefCell<&'a mut dyn Randomizer>;

/// Read-only view of a player during the buy phase, used by validity checks.
#[derive(Clone, Copy, Debug)]
pub struct BuyPhaseView<'a> {
    pub owner_id: PlayerId,
    pub owner_name: &'a str,
    pub owner: &'a PlayerState,
    pub config: &'a TavernConfig,
    pub turn: u32,
}

/// One player's handle on the match during the buy phase.
pub struct BuyPhaseContext<'a> {
    /// Registry id of the owning player.
    pub owner_id: PlayerId,

    /// Name of the owning player.
    pub owner_name: &'a str,

    /// The owning player's mutable state.
    pub owner: &'a mut PlayerState,

    /// The match randomizer.
    pub randomizer: &'a mut dyn Randomizer,

    /// Shared card pool, for effects that draw or return cards.
    pub deck: &'a mut CardPool,

    pub config: &'a TavernConfig,

    /// Turn number (0-based).
    pub turn: u32,
}

impl<'a> BuyPhaseContext<'a> {
    /// Read-only view for validity checks.
    #[must_use]
    pub fn view(&self) -> BuyPhaseView<'_> {
        BuyPhaseView {
            owner_id: self.owner_id,
            owner_name: self.owner_name,
            owner: self.owner,
            config: self.config,
            turn: self.turn,
        }
    }

    /// Deliver a buy-phase event to the owner's hero.
    pub fn broadcast_buy_phase_event(&mut self, hero: &mut dyn Hero, event: &PhaseEvent) {
        hero.handle_buy_event(event, self);
    }
}

impl fmt::Debug for BuyPhaseContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuyPhaseContext")
            .field("owner_id", &self.owner_id)
            .field("owner_name", &self.owner_name)
            .field("turn", &self.turn)
            .finish_non_exhaustive()
    }
}

/// A player's side of a fight: hero, owner state and a combat copy of the board.
#[derive(Debug)]
pub struct WarParty<'a> {
    /// Owning player's name.
    pub name: &'a str,

    /// Owning player's hero.
    pub hero: RefCell<&'a mut dyn Hero>,

    /// Owning player's state (health takes the fight's damage).
    pub owner: RefCell<&'a mut PlayerState>,

    /// Board for this fight, copied from the owner's cards in play.
    pub board: RefCell<Vec<Card>>,
}

impl<'a> WarParty<'a> {
    /// Build a war party for a player, copying their board.
    pub fn new(player: &'a mut Player) -> Self {
        let Player {
            ref name,
            ref mut hero,
            ref mut state,
            ..
        } = *player;
        let board = state.in_play.clone();
        let hero: &'a mut dyn Hero = &mut **hero;
        Self::from_parts(name, hero, state, board)
    }

    /// Build a war party from loose parts.
    pub fn from_parts(
        name: &'a str,
        hero: &'a mut dyn Hero,
        owner: &'a mut PlayerState,
        board: Vec<Card>,
    ) -> Self {
        Self {
            name,
            hero: RefCell::new(hero),
            owner: RefCell::new(owner),
            board: RefCell::new(board),
        }
    }

    /// Cards on the board not marked dead.
    #[must_use]
    pub fn live_card_count(&self) -> usize {
        self.board.borrow().iter().filter(|c| c.is_alive()).count()
    }

    /// Tavern tier of the owner.
    #[must_use]
    pub fn tavern_tier(&self) -> u8 {
        self.owner.borrow().tavern_tier
    }

    /// Consume the party, returning the combat board.
    #[must_use]
    pub fn into_board(self) -> Vec<Card> {
        self.board.into_inner()
    }
}

/// Two opposing war parties plus the shared randomizer.
#[derive(Clone, Copy)]
pub struct CombatPhaseContext<'c, 'a> {
    /// The receiver's own side.
    pub friendly_war_party: &'c WarParty<'a>,

    /// The other side.
    pub enemy_war_party: &'c WarParty<'a>,

    /// The match randomizer.
    pub randomizer: &'c RandomizerCell<'a>,
}

impl<'c, 'a> CombatPhaseContext<'c, 'a> {
    /// Create a context seen from `friendly`'s side.
    #[must_use]
    pub fn new(
        friendly_war_party: &'c WarParty<'a>,
        enemy_war_party: &'c WarParty<'a>,
        randomizer: &'c RandomizerCell<'a>,
    ) -> Self {
        Self {
            friendly_war_party,
            enemy_war_party,
            randomizer,
        }
    }

    /// The same fight seen from the other side.
    #[must_use]
    pub fn enemy_context(&self) -> Self {
        Self {
            friendly_war_party: self.enemy_war_party,
            enemy_war_party: self.friendly_war_party,
            randomizer: self.randomizer,
        }
    }

    /// Deliver an event to every listener on both sides, synchronously.
    ///
    /// Order: friendly hero, friendly board in board order, enemy hero, enemy
    /// board in board order. Dead cards still receive the event, and so do
    /// cards summoned by an earlier listener. The enemy side receives it
    /// through the mirrored context.
    pub fn broadcast_combat_event(&self, event: &PhaseEvent) {
        self.deliver_to_friendly_side(event);
        self.enemy_context().deliver_to_friendly_side(event);
    }

    fn deliver_to_friendly_side(&self, event: &PhaseEvent) {
        let party = self.friendly_war_party;
        party.hero.borrow_mut().handle_combat_event(event, self);

        // Board length is re-read each step; listeners may summon.
        let mut slot = 0;
        while slot < party.board.borrow().len() {
            let behavior = party.board.borrow().get(slot).and_then(|card| card.behavior.clone());
            if let Some(behavior) = behavior {
                behavior.handle_combat_event(slot, event, self);
            }
            slot += 1;
        }
    }
}

impl fmt::Debug for CombatPhaseContext<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CombatPhaseContext")
            .field("friendly", &self.friendly_war_party.name)
            .field("enemy", &self.enemy_war_party.name)
            .finish_non_exhaustive()
    }
}
