//! Core engine types: players, RNG, configuration, errors.
//!
//! This module contains the building blocks every other module leans on.
//! Nothing here knows about flips or boards beyond their dimensions.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{BoardPreset, Difficulty, GameConfig, DEFAULT_UNFLIP_DELAY_MS, MAX_GRID_SIDE, MAX_PLAYERS};
pub use error::{ConfigError, EngineError, ThemeError};
