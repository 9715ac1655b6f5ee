//! # memory-match
//!
//! A turn-based memory (concentration) game engine.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: Every flip, unflip and pause is a reducer
//!    `(session, input) -> (session, effects)`. The engine never touches a
//!    screen, a speaker or a timer.
//!
//! 2. **N-Player First**: Scores and turns are tracked for any player count.
//!    Ties at the end of a game go to sudden death between the tied players.
//!
//! 3. **Stale Input Is Harmless**: Unflip timers carry the session generation
//!    and round, so callbacks from a replaced board are ignored.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Boards use `im-rs` vectors, so sessions
//!   clone in O(1) and the controller can swap them wholesale.
//!
//! - **Pair Identity**: Cards match on `PairId`, never on what they display.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, errors
//! - `cards`: Faces, cards, shuffling, the board
//! - `theme`: Character themes, manifests, the emoji pool
//! - `engine`: Session state, flip reducer, controller, clock
//! - `rules`: Winner resolution and tie detection
//! - `presentation`: Render and audio seams, effect dispatch

pub mod core;
pub mod cards;
pub mod theme;
pub mod engine;
pub mod rules;
pub mod presentation;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng,
    BoardPreset, Difficulty, GameConfig,
    ConfigError, EngineError, ThemeError,
};

pub use crate::cards::{Board, Card, Face, FaceSupply, PairId};

pub use crate::theme::{CharacterFace, ManifestThemes, ThemeRegistry, ThemeSupply};

pub use crate::engine::{
    Cue, Effect, UnflipToken,
    FlipPhase, GameSession, TieBreaker,
    handle_flip, handle_unflip, set_paused,
    GameClock, GameController, Scoreboard,
};

pub use crate::rules::{GameOutcome, Resolution};

pub use crate::presentation::{dispatch, AudioSettings, AudioSink, RenderSink};
