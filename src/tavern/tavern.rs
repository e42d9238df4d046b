//! The match orchestrator.
//!
//! ## Phases
//!
//! ```text
//! Setup --buying_step--> Buying --combat_step--> Combat --buying_step--> Buying ...
//!                                 \--combat_step (all placed)--> Finished
//! ```
//!
//! A combat step that places every player finishes the match on its own.
//! [`Tavern::game_over`] does the same for eliminations made outside combat.
//!
//! ## Elimination order
//!
//! `losers` records players first-eliminated first and only ever grows.
//! Players reaching zero health in the same combat step are recorded in
//! registry order. Once a single player is left unrecorded, that player is
//! appended too, so final placements are the reverse of `losers`.
//!
//! ## Byes
//!
//! With an odd number of live players the most recently recorded loser who
//! is not fighting fills the gap. Nothing that happens in that fight changes
//! the loser's recorded place.

use std::cell::RefCell;
use std::fmt;

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::BuyPhaseAction;
use super::player::{upgrade_cost_at, Player};
use super::standings::Standings;
use crate::cards::CardPool;
use crate::combat::{BoardStrengthResolver, CombatResolver, FightOutcome};
use crate::core::{MatchLogger, PlayerId, TavernConfig, MAX_PLAYERS};
use crate::error::{Result, TavernError};
use crate::events::{BuyPhaseContext, EventKind, PhaseEvent, WarParty};
use crate::heroes::{EmptyHero, Hero, HeroId, HeroRegistry};
use crate::randomizer::{DefaultRandomizer, Randomizer};

/// Where a match is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Registering players and choosing heroes.
    #[default]
    Setup,
    Buying,
    Combat,
    /// Every player has a placement.
    Finished,
}

impl fmt::Display for MatchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatchPhase::Setup => "setup",
            MatchPhase::Buying => "buying",
            MatchPhase::Combat => "combat",
            MatchPhase::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// One fight of the most recent combat step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FightRecord {
    /// Turn the fight happened on.
    pub turn: u32,
    pub first: PlayerId,
    pub second: PlayerId,
    pub outcome: FightOutcome,
}

/// Builder for [`Tavern`]. Anything not supplied gets the standard default.
///
/// ```
/// use rust_tavern::{TavernBuilder, TavernConfig};
///
/// let mut tavern = TavernBuilder::new()
///     .with_config(TavernConfig::default().with_seed(7))
///     .build();
/// let alice = tavern.add_player("alice").unwrap();
/// assert_eq!(tavern.player(alice).unwrap().hero_options().len(), 3);
/// ```
#[derive(Default)]
pub struct TavernBuilder {
    config: TavernConfig,
    randomizer: Option<Box<dyn Randomizer>>,
    resolver: Option<Box<dyn CombatResolver>>,
    deck: Option<CardPool>,
    heroes: Option<HeroRegistry>,
}

impl TavernBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(mut self, config: TavernConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the seeded default randomizer.
    #[must_use]
    pub fn with_randomizer(mut self, randomizer: Box<dyn Randomizer>) -> Self {
        self.randomizer = Some(randomizer);
        self
    }

    /// Replace the reference fight resolver.
    #[must_use]
    pub fn with_resolver(mut self, resolver: Box<dyn CombatResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Replace the vanilla card pool.
    #[must_use]
    pub fn with_deck(mut self, deck: CardPool) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Replace the built-in hero catalog.
    #[must_use]
    pub fn with_heroes(mut self, heroes: HeroRegistry) -> Self {
        self.heroes = Some(heroes);
        self
    }

    #[must_use]
    pub fn build(self) -> Tavern {
        let config = self.config;
        let randomizer = self
            .randomizer
            .unwrap_or_else(|| Box::new(DefaultRandomizer::new(config.seed)));
        let resolver = self.resolver.unwrap_or_else(|| Box::new(BoardStrengthResolver::new()));
        let heroes = self.heroes.unwrap_or_else(HeroRegistry::standard);

        let pool_ids = heroes.pool_ids();
        let mut hero_pool = Vec::with_capacity(pool_ids.len() * config.hero_pool_copies);
        for _ in 0..config.hero_pool_copies {
            hero_pool.extend_from_slice(&pool_ids);
        }

        let logger = MatchLogger::with_settings(config.verbosity, config.output_mode);
        Tavern {
            players: Vec::new(),
            index: FxHashMap::default(),
            deck: self.deck.unwrap_or_else(CardPool::vanilla),
            heroes,
            hero_pool,
            turn_count: 0,
            current_player_pairings: Vec::new(),
            randomizer,
            resolver,
            losers: Vector::new(),
            phase: MatchPhase::Setup,
            last_fights: Vec::new(),
            logger,
            config,
        }
    }
}

/// One match: the player registry, the shared resources and the phase loop.
pub struct Tavern {
    config: TavernConfig,

    /// Players in registration order; `PlayerId` indexes this.
    players: Vec<Player>,

    /// Name to registry position.
    index: FxHashMap<String, PlayerId>,

    deck: CardPool,

    heroes: HeroRegistry,

    /// Heroes still available to offer.
    hero_pool: Vec<HeroId>,

    turn_count: u32,

    /// Pairings for the round in progress.
    current_player_pairings: Vec<(PlayerId, PlayerId)>,

    randomizer: Box<dyn Randomizer>,

    resolver: Box<dyn CombatResolver>,

    /// Elimination order, first eliminated first.
    losers: Vector<PlayerId>,

    phase: MatchPhase,

    last_fights: Vec<FightRecord>,

    logger: MatchLogger,
}

impl Tavern {
    /// A tavern with the standard randomizer, resolver, deck and heroes.
    #[must_use]
    pub fn new(config: TavernConfig) -> Self {
        TavernBuilder::new().with_config(config).build()
    }

    // === Registration ===

    /// Register a player and offer them `hero_choices` heroes from the pool.
    ///
    /// The player holds `EmptyHero` until [`Tavern::choose_hero`] is called.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<PlayerId> {
        let name = name.into();
        self.check_registration(&name)?;

        let needed = self.config.hero_choices;
        if self.hero_pool.len() < needed {
            return Err(TavernError::HeroPoolExhausted {
                needed,
                available: self.hero_pool.len(),
            });
        }
        let options = self.randomizer.select_heroes(&mut self.hero_pool, needed);
        self.logger.verbose("heroes", || {
            let offered: Vec<_> = options
                .iter()
                .filter_map(|id| self.heroes.get(*id))
                .map(|h| h.name)
                .collect();
            format!("{name} offered {}", offered.join(", "))
        });

        Ok(self.register(name, Box::new(EmptyHero), options, false))
    }

    /// Register a player with a hero already decided. No options are drawn.
    pub fn add_player_with_hero(&mut self, name: impl Into<String>, hero: Box<dyn Hero>) -> Result<PlayerId> {
        let name = name.into();
        self.check_registration(&name)?;
        Ok(self.register(name, hero, SmallVec::new(), true))
    }

    /// Register a player with a hero from the registry.
    pub fn add_player_with_hero_id(&mut self, name: impl Into<String>, hero: HeroId) -> Result<PlayerId> {
        let hero = self
            .heroes
            .create(hero)
            .ok_or_else(|| TavernError::UnknownHero(hero.to_string()))?;
        self.add_player_with_hero(name, hero)
    }

    /// Pick one of the heroes offered at registration. Once per player, in setup only.
    pub fn choose_hero(&mut self, player: PlayerId, option: usize) -> Result<()> {
        self.require_phase("choose a hero", &[MatchPhase::Setup])?;
        let entry = self.players.get(player.index()).ok_or(TavernError::UnknownPlayer(player))?;
        if entry.hero_chosen {
            return Err(TavernError::HeroAlreadyChosen(player));
        }
        let hero_id = *entry
            .hero_options
            .get(option)
            .ok_or_else(|| TavernError::UnknownHero(format!("option {option} of {player}")))?;
        let hero = self
            .heroes
            .create(hero_id)
            .ok_or_else(|| TavernError::UnknownHero(hero_id.to_string()))?;

        let entry = &mut self.players[player.index()];
        entry.assign_hero(hero);
        self.logger
            .normal("heroes", || format!("{} chose {}", entry.name, entry.hero.name()));
        Ok(())
    }

    fn check_registration(&self, name: &str) -> Result<()> {
        self.require_phase("add a player", &[MatchPhase::Setup])?;
        if self.index.contains_key(name) {
            return Err(TavernError::DuplicatePlayer(name.to_string()));
        }
        if self.players.len() >= MAX_PLAYERS {
            return Err(TavernError::RegistryFull(MAX_PLAYERS));
        }
        Ok(())
    }

    fn register(
        &mut self,
        name: String,
        hero: Box<dyn Hero>,
        options: SmallVec<[HeroId; 3]>,
        hero_chosen: bool,
    ) -> PlayerId {
        let id = PlayerId::from_index(self.players.len());
        let mut player = Player::new(name.clone(), hero, options);
        player.hero_chosen = hero_chosen;
        self.logger
            .normal("registration", || format!("{id} is {name} playing {}", player.hero.name()));
        self.index.insert(name, id);
        self.players.push(player);
        id
    }

    // === Phase loop ===

    /// Start a turn's buy phase.
    ///
    /// Pairs up the players first, then for every player in registry order:
    /// income, store refill, hero power reset, `BUY_START`.
    pub fn buying_step(&mut self) -> Result<()> {
        self.require_phase("start a buy phase", &[MatchPhase::Setup, MatchPhase::Combat])?;
        self.generate_pairings()?;

        for index in 0..self.players.len() {
            let id = PlayerId::from_index(index);
            let turn = self.turn_count;
            let player = &mut self.players[index];
            player.state.apply_turn_start_income(&self.config, turn);
            player
                .state
                .draw(&mut self.deck, &mut *self.randomizer, &player.name, turn, &self.config);
            player.hero_power.on_buy_step_start();
            self.deliver_buy_event(id, &PhaseEvent::new(EventKind::BuyStart));
        }

        self.phase = MatchPhase::Buying;
        Ok(())
    }

    /// Pair up the players still alive for this round.
    ///
    /// An odd count is evened out with the most recent loser who isn't
    /// already fighting; `NoByeOpponent` if there is none.
    pub fn generate_pairings(&mut self) -> Result<()> {
        let mut fighting: Vec<PlayerId> = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_eliminated())
            .map(|(index, _)| PlayerId::from_index(index))
            .collect();

        if fighting.len() % 2 == 1 {
            let bye = self
                .losers
                .iter()
                .rev()
                .find(|id| !fighting.contains(id))
                .copied()
                .ok_or(TavernError::NoByeOpponent)?;
            fighting.push(bye);
        }

        self.current_player_pairings = self.randomizer.select_player_pairings(fighting);
        let players = &self.players;
        self.logger.normal("pairing", || {
            let pairs: Vec<_> = self
                .current_player_pairings
                .iter()
                .map(|(a, b)| format!("{} vs {}", players[a.index()].name, players[b.index()].name))
                .collect();
            format!("turn {}: {}", self.turn_count, pairs.join(", "))
        });
        Ok(())
    }

    /// End the buy phase and fight every pairing of the round.
    ///
    /// Every player's upgrade cost drops by one and gets `BUY_END`, then each
    /// pairing is resolved in order. The turn counter advances and newly
    /// eliminated players are recorded. A round that places every player
    /// finishes the match.
    pub fn combat_step(&mut self) -> Result<()> {
        self.require_phase("start combat", &[MatchPhase::Buying])?;

        for index in 0..self.players.len() {
            self.players[index].state.decrease_tavern_upgrade_cost();
            self.deliver_buy_event(PlayerId::from_index(index), &PhaseEvent::new(EventKind::BuyEnd));
        }

        self.phase = MatchPhase::Combat;
        self.last_fights.clear();
        let pairings = self.current_player_pairings.clone();
        for (first, second) in pairings {
            self.fight(first, second);
        }

        self.turn_count += 1;
        self.update_losers();
        self.finish_if_decided();
        Ok(())
    }

    fn fight(&mut self, first: PlayerId, second: PlayerId) {
        let (first_player, second_player) = pair_mut(&mut self.players, first.index(), second.index());
        let first_party = WarParty::new(first_player);
        let second_party = WarParty::new(second_player);
        let randomizer: &mut dyn Randomizer = &mut *self.randomizer;
        let randomizer = RefCell::new(randomizer);

        let outcome = self.resolver.fight_boards(&first_party, &second_party, &randomizer);
        self.logger.verbose("combat", || {
            let first_name = first_party.name;
            let second_name = second_party.name;
            match outcome {
                FightOutcome::FirstWon { damage } => format!("{first_name} beat {second_name} for {damage}"),
                FightOutcome::SecondWon { damage } => format!("{second_name} beat {first_name} for {damage}"),
                FightOutcome::Draw => format!("{first_name} and {second_name} drew"),
            }
        });

        self.last_fights.push(FightRecord {
            turn: self.turn_count,
            first,
            second,
            outcome,
        });
    }

    /// Record newly eliminated players, in registry order, and the survivor
    /// once only one player is left unrecorded. Idempotent.
    pub fn update_losers(&mut self) {
        for (index, player) in self.players.iter().enumerate() {
            let id = PlayerId::from_index(index);
            if player.is_eliminated() && !self.losers.contains(&id) {
                self.losers.push_back(id);
                self.logger
                    .minimal("elimination", || format!("{} eliminated on turn {}", player.name, self.turn_count));
            }
        }

        if self.players.len() == self.losers.len() + 1 {
            let survivor = PlayerId::all(self.players.len()).find(|id| !self.losers.contains(id));
            if let Some(survivor) = survivor {
                self.losers.push_back(survivor);
            }
        }
    }

    /// Record eliminations, then report whether every player is placed.
    pub fn game_over(&mut self) -> bool {
        self.update_losers();
        self.finish_if_decided()
    }

    /// Move to `Finished` once every player is placed. Logs the result once.
    fn finish_if_decided(&mut self) -> bool {
        let over = self.losers.len() == self.players.len();
        if over && self.phase != MatchPhase::Finished {
            self.phase = MatchPhase::Finished;
            let winner = self.losers.last().map(|id| self.players[id.index()].name.as_str());
            self.logger.minimal("result", || {
                format!("game over after {} turns, winner {}", self.turn_count, winner.unwrap_or("nobody"))
            });
        }
        over
    }

    // === Buy-phase actions ===

    /// Is `action` legal for `player` right now?
    #[must_use]
    pub fn is_valid_action(&self, player: PlayerId, action: BuyPhaseAction) -> bool {
        if self.phase != MatchPhase::Buying {
            return false;
        }
        match self.players.get(player.index()) {
            Some(entry) if !entry.is_eliminated() => {
                action.is_valid(player, entry, &self.config, self.turn_count)
            }
            _ => false,
        }
    }

    /// All legal actions for `player`. Empty outside the buy phase.
    #[must_use]
    pub fn valid_actions(&self, player: PlayerId) -> Vec<BuyPhaseAction> {
        match self.players.get(player.index()) {
            Some(entry) => BuyPhaseAction::candidates(entry)
                .into_iter()
                .filter(|action| self.is_valid_action(player, *action))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Apply a legal action; `InvalidAction` if [`Tavern::is_valid_action`] says no.
    pub fn apply_action(&mut self, player: PlayerId, action: BuyPhaseAction) -> Result<()> {
        if !self.is_valid_action(player, action) {
            return Err(TavernError::InvalidAction {
                player,
                action: action.to_string(),
            });
        }

        let Self {
            players,
            randomizer,
            deck,
            config,
            turn_count,
            logger,
            ..
        } = self;
        let Player {
            name,
            hero,
            hero_power,
            state,
            ..
        } = &mut players[player.index()];
        let hero: &mut dyn Hero = &mut **hero;
        let mut context = BuyPhaseContext {
            owner_id: player,
            owner_name: name,
            owner: state,
            randomizer: &mut **randomizer,
            deck,
            config,
            turn: *turn_count,
        };

        match action {
            BuyPhaseAction::Buy(index) => {
                context.owner.coins -= context.config.minion_cost;
                let card = context.owner.store.remove(index);
                context.owner.hand.push(card.clone());
                context.broadcast_buy_phase_event(hero, &PhaseEvent::for_card(EventKind::Buy, card));
            }
            BuyPhaseAction::Summon(index) => {
                let card = context.owner.hand.remove(index);
                context.owner.in_play.push(card.clone());
                context.broadcast_buy_phase_event(hero, &PhaseEvent::for_card(EventKind::SummonBuy, card));
            }
            BuyPhaseAction::Sell(index) => {
                let card = context.owner.in_play.remove(index);
                context.owner.coins += context.config.sell_value;
                context.deck.return_card(card.clone());
                context.broadcast_buy_phase_event(hero, &PhaseEvent::for_card(EventKind::Sell, card));
            }
            BuyPhaseAction::TavernUpgrade => {
                context.owner.coins -= context.owner.tavern_upgrade_cost;
                context.owner.tavern_tier += 1;
                context.owner.tavern_upgrade_cost = upgrade_cost_at(hero, context.owner.tavern_tier);
            }
            BuyPhaseAction::Reroll => {
                context.owner.coins -= context.config.reroll_cost;
                context.owner.return_store(context.deck);
                context
                    .owner
                    .draw(context.deck, context.randomizer, context.owner_name, context.turn, context.config);
            }
            BuyPhaseAction::HeroPower => hero_power.activate(hero, &mut context)?,
            BuyPhaseAction::EndPhase => {}
        }

        logger.verbose("action", || format!("{name} {action}"));
        Ok(())
    }

    /// Use `player`'s hero power. Shorthand for applying [`BuyPhaseAction::HeroPower`].
    pub fn use_hero_power(&mut self, player: PlayerId) -> Result<()> {
        self.apply_action(player, BuyPhaseAction::HeroPower)
    }

    fn deliver_buy_event(&mut self, player: PlayerId, event: &PhaseEvent) {
        let Self {
            players,
            randomizer,
            deck,
            config,
            turn_count,
            ..
        } = self;
        let Player { name, hero, state, .. } = &mut players[player.index()];
        let mut context = BuyPhaseContext {
            owner_id: player,
            owner_name: name,
            owner: state,
            randomizer: &mut **randomizer,
            deck,
            config,
            turn: *turn_count,
        };
        context.broadcast_buy_phase_event(&mut **hero, event);
    }

    fn require_phase(&self, operation: &'static str, allowed: &[MatchPhase]) -> Result<()> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(TavernError::OutOfPhase {
                operation,
                phase: self.phase.to_string(),
            })
        }
    }

    // === Accessors ===

    /// Registered players in registry order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Mutable access to a player, for external rules and test setups.
    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id.index())
    }

    #[must_use]
    pub fn player_id(&self, name: &str) -> Option<PlayerId> {
        self.index.get(name).copied()
    }

    #[must_use]
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// `(name, player)` in elimination order, first eliminated first.
    #[must_use]
    pub fn losers(&self) -> Vec<(&str, &Player)> {
        self.losers
            .iter()
            .map(|id| {
                let player = &self.players[id.index()];
                (player.name(), player)
            })
            .collect()
    }

    /// Elimination order as ids.
    #[must_use]
    pub fn loser_ids(&self) -> &Vector<PlayerId> {
        &self.losers
    }

    #[must_use]
    pub fn current_player_pairings(&self) -> &[(PlayerId, PlayerId)] {
        &self.current_player_pairings
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Snapshot of placements so far.
    #[must_use]
    pub fn standings(&self) -> Standings {
        let names = self.players.iter().map(|p| p.name.clone()).collect();
        Standings::new(names, self.losers.clone())
    }

    /// Fights of the most recent combat step.
    #[must_use]
    pub fn last_fights(&self) -> &[FightRecord] {
        &self.last_fights
    }

    #[must_use]
    pub fn logger(&self) -> &MatchLogger {
        &self.logger
    }

    pub fn logger_mut(&mut self) -> &mut MatchLogger {
        &mut self.logger
    }

    #[must_use]
    pub fn config(&self) -> &TavernConfig {
        &self.config
    }

    /// Heroes still available to offer.
    #[must_use]
    pub fn hero_pool(&self) -> &[HeroId] {
        &self.hero_pool
    }

    #[must_use]
    pub fn heroes(&self) -> &HeroRegistry {
        &self.heroes
    }

    #[must_use]
    pub fn deck(&self) -> &CardPool {
        &self.deck
    }
}

impl fmt::Debug for Tavern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tavern")
            .field("players", &self.players.len())
            .field("phase", &self.phase)
            .field("turn_count", &self.turn_count)
            .field("losers", &self.losers)
            .finish_non_exhaustive()
    }
}

/// Mutable references to two distinct entries.
///
/// Panics if `a == b`; a player is never paired with themselves.
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    assert_ne!(a, b, "Cannot pair an entry with itself");
    if a < b {
        let (left, right) = items.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = items.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
