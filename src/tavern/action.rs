//! Buy-phase actions.
//!
//! Legality is always a query: [`BuyPhaseAction::is_valid`] answers it
//! without side effects, and the tavern refuses to apply anything that fails
//! the query.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::core::{PlayerId, TavernConfig, MAX_TAVERN_TIER};
use crate::events::BuyPhaseView;

/// Something a player can do during the buy phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuyPhaseAction {
    /// Buy the store card at this index into the hand.
    Buy(usize),
    /// Play the hand card at this index onto the board.
    Summon(usize),
    /// Sell the board card at this index.
    Sell(usize),
    TavernUpgrade,
    /// Return the store to the pool and draw a fresh one.
    Reroll,
    HeroPower,
    /// Done for this turn. Always valid.
    EndPhase,
}

impl BuyPhaseAction {
    /// Check legality for `player`. Side-effect free.
    #[must_use]
    pub fn is_valid(&self, player_id: PlayerId, player: &Player, config: &TavernConfig, turn: u32) -> bool {
        let state = &player.state;
        match *self {
            BuyPhaseAction::Buy(index) => {
                index < state.store.len()
                    && state.coins >= config.minion_cost
                    && state.hand.len() < config.max_hand_size
            }
            BuyPhaseAction::Summon(index) => index < state.hand.len() && state.room_on_board(config.max_board_size),
            BuyPhaseAction::Sell(index) => index < state.in_play.len(),
            BuyPhaseAction::TavernUpgrade => {
                state.tavern_tier < MAX_TAVERN_TIER && state.coins >= state.tavern_upgrade_cost
            }
            BuyPhaseAction::Reroll => state.coins >= config.reroll_cost,
            BuyPhaseAction::HeroPower => {
                let view = BuyPhaseView {
                    owner_id: player_id,
                    owner_name: &player.name,
                    owner: state,
                    config,
                    turn,
                };
                player.hero_power.valid(player.hero.as_ref(), &view)
            }
            BuyPhaseAction::EndPhase => true,
        }
    }

    /// Every action that could apply to `player`'s current collections,
    /// valid or not, in a stable order.
    #[must_use]
    pub fn candidates(player: &Player) -> Vec<BuyPhaseAction> {
        let state = &player.state;
        let mut actions = Vec::with_capacity(state.store.len() + state.hand.len() + state.in_play.len() + 4);
        actions.extend((0..state.store.len()).map(BuyPhaseAction::Buy));
        actions.extend((0..state.hand.len()).map(BuyPhaseAction::Summon));
        actions.extend((0..state.in_play.len()).map(BuyPhaseAction::Sell));
        actions.extend([
            BuyPhaseAction::TavernUpgrade,
            BuyPhaseAction::Reroll,
            BuyPhaseAction::HeroPower,
            BuyPhaseAction::EndPhase,
        ]);
        actions
    }
}

impl fmt::Display for BuyPhaseAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuyPhaseAction::Buy(index) => write!(f, "Buy({index})"),
            BuyPhaseAction::Summon(index) => write!(f, "Summon({index})"),
            BuyPhaseAction::Sell(index) => write!(f, "Sell({index})"),
            BuyPhaseAction::TavernUpgrade => write!(f, "TavernUpgrade"),
            BuyPhaseAction::Reroll => write!(f, "Reroll"),
            BuyPhaseAction::HeroPower => write!(f, "HeroPower"),
            BuyPhaseAction::EndPhase => write!(f, "EndPhase"),
        }
    }
}
