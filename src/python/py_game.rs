//! Game bindings for Python.

use std::path::PathBuf;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::FaceSupply;
use crate::core::{GameConfig, GameRng};
use crate::engine::{Effect, GameController, UnflipToken};
use crate::theme::{write_manifests, ManifestThemes};

use super::py_core::{engine_err, json_err, parse_difficulty, theme_err, PyPlayerId};

fn to_json(effects: Vec<Effect>) -> PyResult<Vec<String>> {
    effects.iter().map(|e| serde_json::to_string(e).map_err(json_err)).collect()
}

/// Python wrapper for a game controller backed by a theme directory.
#[pyclass(name = "MemoryGame", unsendable)]
pub struct PyMemoryGame {
    game: GameController<ManifestThemes>,
}

#[pymethods]
impl PyMemoryGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - difficulty: "easy", "normal" or "hard"
    /// - players: Number of local players (1-8)
    /// - seed: RNG seed; random when omitted
    /// - theme: Theme folder under `themes_dir`; emoji when omitted
    /// - themes_dir: Root directory holding theme folders
    #[new]
    #[pyo3(signature = (difficulty = "normal", players = 2, seed = None, theme = None, themes_dir = "images"))]
    fn new(
        difficulty: &str,
        players: usize,
        seed: Option<u64>,
        theme: Option<String>,
        themes_dir: &str,
    ) -> PyResult<Self> {
        let mut config = GameConfig::new(players).with_difficulty(parse_difficulty(difficulty)?);
        if let Some(theme) = theme {
            config = config.with_face_supply(FaceSupply::Theme(theme));
        }
        let rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let game = GameController::new(config, ManifestThemes::new(themes_dir), rng)
            .map_err(|e| PyValueError::new_err(e.hint()))?;
        Ok(Self { game })
    }

    /// Effects that draw the current board from scratch.
    fn opening_effects(&self) -> PyResult<Vec<String>> {
        to_json(self.game.session().opening_effects())
    }

    /// Flip the card at `position`.
    fn flip(&mut self, position: usize) -> PyResult<Vec<String>> {
        to_json(self.game.flip(position))
    }

    /// Deliver an unflip timer, given its token as JSON.
    fn fire_unflip(&mut self, token_json: &str) -> PyResult<Vec<String>> {
        let token: UnflipToken = serde_json::from_str(token_json).map_err(json_err)?;
        to_json(self.game.fire_unflip(token))
    }

    fn pause(&mut self) -> PyResult<Vec<String>> {
        to_json(self.game.pause())
    }

    fn resume(&mut self) -> PyResult<Vec<String>> {
        to_json(self.game.resume())
    }

    /// Advance the clock by one second.
    fn tick(&mut self) -> PyResult<Vec<String>> {
        to_json(self.game.tick())
    }

    /// Deal a new game with the current settings.
    fn new_game(&mut self) -> PyResult<Vec<String>> {
        to_json(self.game.new_game())
    }

    /// Change difficulty. Fails once the first card has been flipped.
    fn set_difficulty(&mut self, difficulty: &str) -> PyResult<Vec<String>> {
        let effects = self.game.set_difficulty(parse_difficulty(difficulty)?).map_err(engine_err)?;
        to_json(effects)
    }

    /// Change the player count. Fails once the first card has been flipped.
    fn set_players(&mut self, players: usize) -> PyResult<Vec<String>> {
        let effects = self.game.set_players(players).map_err(engine_err)?;
        to_json(effects)
    }

    /// Mute or unmute cues.
    fn set_muted(&mut self, muted: bool) {
        self.game.set_muted(muted);
    }

    /// Set cue volume in 0.0-1.0.
    fn set_volume(&mut self, volume: f32) {
        self.game.set_volume(volume);
    }

    /// Player whose turn it is.
    #[getter]
    fn current_player(&self) -> PyPlayerId {
        PyPlayerId(self.game.session().current_player())
    }

    /// (label, score) for every player still in the game.
    #[getter]
    fn scores(&self) -> Vec<(u8, u32)> {
        let session = self.game.session();
        session
            .scoreboard()
            .iter()
            .map(|(player, score)| (session.label_of(player).label(), score))
            .collect()
    }

    #[getter]
    fn moves(&self) -> u32 {
        self.game.session().moves()
    }

    #[getter]
    fn elapsed(&self) -> u64 {
        self.game.elapsed()
    }

    #[getter]
    fn is_locked(&self) -> bool {
        self.game.is_locked()
    }

    /// Winner announcement, or None while the game is running.
    #[getter]
    fn outcome(&self) -> Option<String> {
        self.game.session().outcome().map(|o| o.announcement())
    }

    /// Final stats line.
    fn stats(&self) -> String {
        self.game.stats()
    }
}

/// Write a `manifest.json` into every theme folder under `root`.
///
/// Returns (theme, image count) pairs.
#[pyfunction]
pub fn generate_manifests(root: PathBuf) -> PyResult<Vec<(String, usize)>> {
    write_manifests(&root).map_err(theme_err)
}
