//! Python bindings for the memory-match engine.
//!
//! # Quick Start
//!
//! ```python
//! import json
//! import memory_match as mm
//!
//! game = mm.MemoryGame(difficulty="easy", players=2, seed=42)
//! for effect in game.flip(0):
//!     print(json.loads(effect))
//! ```
//!
//! Effects come back as JSON strings. An effect with a `ScheduleUnflip` key
//! carries a token; pass `json.dumps(effect["ScheduleUnflip"]["token"])` to
//! `fire_unflip` once the delay has elapsed.

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// memory_match: a memory (concentration) game engine.
#[pymodule]
fn memory_match(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayerId>()?;
    m.add_class::<PyMemoryGame>()?;
    m.add_function(wrap_pyfunction!(generate_manifests, m)?)?;
    Ok(())
}
