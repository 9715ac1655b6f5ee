//! Error types.
//!
//! The engine has no fatal conditions once it holds a validated
//! configuration. Errors only surface at the edges: configuring a game and
//! loading theme assets.

use std::path::PathBuf;

use thiserror::Error;

/// A rejected game configuration.
///
/// The `Display` text is phrased as a hint the host can show next to the
/// grid and player selectors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a {rows}x{cols} grid has an odd number of tiles; pick an even total")]
    OddTileCount { rows: usize, cols: usize },

    #[error("a {rows}x{cols} grid is too small; it needs at least 2 tiles")]
    GridTooSmall { rows: usize, cols: usize },

    #[error("a {rows}x{cols} grid is too large; each side may be at most {max}")]
    GridTooLarge { rows: usize, cols: usize, max: usize },

    #[error("{count} players is not supported; choose between 1 and {max}")]
    PlayerCount { count: usize, max: usize },

    #[error("pair {pair} has {count} cards; every pair needs exactly 2")]
    UnevenPair { pair: u32, count: usize },
}

impl ConfigError {
    /// User-facing hint text for this error.
    #[must_use]
    pub fn hint(&self) -> String {
        let mut hint = self.to_string();
        if let Some(first) = hint.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        hint.push('.');
        hint
    }
}

/// A failure to load theme characters.
///
/// Never fatal: the board builder falls back to the emoji pool.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("unknown theme `{0}`")]
    UnknownTheme(String),

    #[error("theme `{0}` has no images")]
    EmptyTheme(String),

    #[error("failed to access {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed manifest {path}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors returned by the game controller.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("settings are locked while a game is in progress; start a new game first")]
    ConfigLocked,
}
