//! Python bindings for the rust-tavern match engine.
//!
//! # Quick Start
//!
//! ```python
//! import rust_tavern as rt
//!
//! tavern = rt.Tavern(seed=42)
//! for name in ["alice", "bob", "carol", "dave"]:
//!     player = tavern.add_player(name)
//!     tavern.choose_hero(player, 0)
//!
//! while not tavern.game_over():
//!     tavern.buying_step()
//!     for player in range(tavern.player_count):
//!         actions = tavern.valid_actions(player)
//!         ...
//!     tavern.combat_step()
//!
//! print(tavern.losers()[::-1])
//! ```

use pyo3::prelude::*;

mod py_tavern;

pub use py_tavern::*;

/// rust-tavern: auto-battler match orchestration for training loops.
#[pymodule]
fn rust_tavern(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTavern>()?;
    Ok(())
}
