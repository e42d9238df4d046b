//! Tavern bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{PlayerId, TavernConfig};
use crate::error::TavernError;
use crate::tavern::Tavern;

impl From<TavernError> for PyErr {
    fn from(err: TavernError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Python wrapper for a match.
///
/// Players are addressed by their registry index.
#[pyclass(name = "Tavern")]
pub struct PyTavern {
    tavern: Tavern,
}

impl PyTavern {
    fn id(&self, player: u8) -> PyResult<PlayerId> {
        let id = PlayerId::new(player);
        if self.tavern.player(id).is_some() {
            Ok(id)
        } else {
            Err(TavernError::UnknownPlayer(id).into())
        }
    }

    fn name_of(&self, id: PlayerId) -> String {
        self.tavern.player(id).map(|p| p.name().to_string()).unwrap_or_default()
    }
}

#[pymethods]
impl PyTavern {
    /// Create a new match.
    ///
    /// # Arguments
    /// - seed: RNG seed for the default randomizer
    /// - hero_choices: Heroes offered to each player
    #[new]
    #[pyo3(signature = (seed = 42, hero_choices = 3))]
    fn new(seed: u64, hero_choices: usize) -> Self {
        let config = TavernConfig::default()
            .with_seed(seed)
            .with_hero_choices(hero_choices);
        Self {
            tavern: Tavern::new(config),
        }
    }

    /// Register a player with hero options drawn from the pool.
    fn add_player(&mut self, name: String) -> PyResult<u8> {
        Ok(self.tavern.add_player(name)?.0)
    }

    /// Register a player with a catalog hero, by name.
    fn add_player_with_hero(&mut self, name: String, hero: &str) -> PyResult<u8> {
        let hero_id = self
            .tavern
            .heroes()
            .get_by_name(hero)
            .map(|h| h.id)
            .ok_or_else(|| TavernError::UnknownHero(hero.to_string()))?;
        Ok(self.tavern.add_player_with_hero_id(name, hero_id)?.0)
    }

    /// Names of the heroes a player was offered.
    fn hero_options(&self, player: u8) -> PyResult<Vec<String>> {
        let id = self.id(player)?;
        let heroes = self.tavern.heroes();
        Ok(self
            .tavern
            .player(id)
            .map(|p| {
                p.hero_options()
                    .iter()
                    .filter_map(|h| heroes.get(*h))
                    .map(|h| h.name.to_string())
                    .collect()
            })
            .unwrap_or_default())
    }

    fn choose_hero(&mut self, player: u8, option: usize) -> PyResult<()> {
        let id = self.id(player)?;
        Ok(self.tavern.choose_hero(id, option)?)
    }

    fn buying_step(&mut self) -> PyResult<()> {
        Ok(self.tavern.buying_step()?)
    }

    fn combat_step(&mut self) -> PyResult<()> {
        Ok(self.tavern.combat_step()?)
    }

    fn game_over(&mut self) -> bool {
        self.tavern.game_over()
    }

    #[getter]
    fn turn_count(&self) -> u32 {
        self.tavern.turn_count()
    }

    #[getter]
    fn player_count(&self) -> usize {
        self.tavern.players().len()
    }

    /// Player names in elimination order, first eliminated first.
    fn losers(&self) -> Vec<String> {
        self.tavern.losers().into_iter().map(|(name, _)| name.to_string()).collect()
    }

    /// This round's pairings as name pairs.
    fn pairings(&self) -> Vec<(String, String)> {
        self.tavern
            .current_player_pairings()
            .iter()
            .map(|&(a, b)| (self.name_of(a), self.name_of(b)))
            .collect()
    }

    fn health(&self, player: u8) -> PyResult<i32> {
        let id = self.id(player)?;
        Ok(self.tavern.player(id).map_or(0, |p| p.state.health))
    }

    fn coins(&self, player: u8) -> PyResult<i32> {
        let id = self.id(player)?;
        Ok(self.tavern.player(id).map_or(0, |p| p.state.coins))
    }

    /// Valid buy-phase actions, rendered as strings.
    fn valid_actions(&self, player: u8) -> PyResult<Vec<String>> {
        let id = self.id(player)?;
        Ok(self.tavern.valid_actions(id).iter().map(ToString::to_string).collect())
    }

    /// Apply the `index`-th entry of `valid_actions(player)`.
    fn apply_action(&mut self, player: u8, index: usize) -> PyResult<()> {
        let id = self.id(player)?;
        let action = *self.tavern.valid_actions(id).get(index).ok_or_else(|| {
            PyValueError::new_err(format!("Action index {index} out of range"))
        })?;
        Ok(self.tavern.apply_action(id, action)?)
    }

    /// Serialized standings, for rating systems.
    fn standings_bytes(&self) -> PyResult<Vec<u8>> {
        Ok(self.tavern.standings().to_bytes()?)
    }

    fn __repr__(&self) -> String {
        format!(
            "Tavern(players={}, turn={}, phase={})",
            self.tavern.players().len(),
            self.tavern.turn_count(),
            self.tavern.phase()
        )
    }
}
