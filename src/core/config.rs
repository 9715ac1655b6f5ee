//! Game configuration types.
//!
//! Hosts configure a game before it starts by providing:
//! - Grid dimensions and the unflip delay, usually via a `Difficulty` preset
//! - The number of local players
//! - A `FaceSupply` deciding what each pair displays
//!
//! Presets are applied atomically as a `BoardPreset`; there is no path that
//! changes rows without also changing the delay that belongs to them.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::FaceSupply;

/// Delay before a mismatched pair is turned face-down again.
pub const DEFAULT_UNFLIP_DELAY_MS: u64 = 1000;

/// Largest supported grid side.
pub const MAX_GRID_SIDE: usize = 12;

/// Largest supported number of local players.
pub const MAX_PLAYERS: usize = 8;

/// Difficulty presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Grid and timing for this difficulty.
    #[must_use]
    pub const fn preset(self) -> BoardPreset {
        match self {
            Difficulty::Easy => BoardPreset { rows: 3, cols: 4, unflip_delay_ms: 1200 },
            Difficulty::Normal => BoardPreset { rows: 4, cols: 4, unflip_delay_ms: DEFAULT_UNFLIP_DELAY_MS },
            Difficulty::Hard => BoardPreset { rows: 6, cols: 6, unflip_delay_ms: 700 },
        }
    }
}

/// Board dimensions together with the unflip delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardPreset {
    pub rows: usize,
    pub cols: usize,
    pub unflip_delay_ms: u64,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid rows.
    pub rows: usize,

    /// Grid columns.
    pub cols: usize,

    /// Number of local players (1-8).
    pub player_count: usize,

    /// Milliseconds a mismatched pair stays face-up.
    pub unflip_delay_ms: u64,

    /// What each pair displays.
    pub face_supply: FaceSupply,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(2)
    }
}

impl GameConfig {
    /// Create a Normal-difficulty configuration for `player_count` players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        let preset = Difficulty::Normal.preset();
        Self {
            rows: preset.rows,
            cols: preset.cols,
            player_count,
            unflip_delay_ms: preset.unflip_delay_ms,
            face_supply: FaceSupply::PairIds,
        }
    }

    /// Apply a difficulty preset (grid and delay together).
    #[must_use]
    pub fn with_difficulty(self, difficulty: Difficulty) -> Self {
        self.with_preset(difficulty.preset())
    }

    /// Apply a custom preset.
    #[must_use]
    pub fn with_preset(mut self, preset: BoardPreset) -> Self {
        self.rows = preset.rows;
        self.cols = preset.cols;
        self.unflip_delay_ms = preset.unflip_delay_ms;
        self
    }

    /// Set the grid dimensions, keeping the current delay.
    #[must_use]
    pub fn with_grid(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set the number of players.
    #[must_use]
    pub fn with_players(mut self, player_count: usize) -> Self {
        self.player_count = player_count;
        self
    }

    /// Set the unflip delay.
    #[must_use]
    pub fn with_unflip_delay(mut self, delay_ms: u64) -> Self {
        self.unflip_delay_ms = delay_ms;
        self
    }

    /// Set the face-supply strategy.
    #[must_use]
    pub fn with_face_supply(mut self, face_supply: FaceSupply) -> Self {
        self.face_supply = face_supply;
        self
    }

    /// Total number of tiles.
    ///
    /// Saturates instead of overflowing on unvalidated dimensions.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// Number of pairs on the board.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.tile_count() / 2
    }

    /// Check that a board can be built from this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (rows, cols) = (self.rows, self.cols);

        if rows > MAX_GRID_SIDE || cols > MAX_GRID_SIDE {
            return Err(ConfigError::GridTooLarge { rows, cols, max: MAX_GRID_SIDE });
        }
        if self.tile_count() < 2 {
            return Err(ConfigError::GridTooSmall { rows, cols });
        }
        if self.tile_count() % 2 != 0 {
            return Err(ConfigError::OddTileCount { rows, cols });
        }
        check_player_count(self.player_count)
    }
}

/// Check a player count against `1..=MAX_PLAYERS`.
pub(crate) fn check_player_count(count: usize) -> Result<(), ConfigError> {
    if count == 0 || count > MAX_PLAYERS {
        return Err(ConfigError::PlayerCount { count, max: MAX_PLAYERS });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();

        assert_eq!(config.rows, 4);
        assert_eq!(config.cols, 4);
        assert_eq!(config.player_count, 2);
        assert_eq!(config.unflip_delay_ms, 1000);
        assert_eq!(config.face_supply, FaceSupply::PairIds);
        assert_eq!(config.pair_count(), 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_difficulty_presets() {
        let easy = GameConfig::new(1).with_difficulty(Difficulty::Easy);
        assert_eq!((easy.rows, easy.cols, easy.unflip_delay_ms), (3, 4, 1200));

        let hard = GameConfig::new(1).with_difficulty(Difficulty::Hard);
        assert_eq!((hard.rows, hard.cols, hard.unflip_delay_ms), (6, 6, 700));

        for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            assert!(GameConfig::new(2).with_difficulty(difficulty).validate().is_ok());
        }
    }

    #[test]
    fn test_grid_keeps_delay() {
        let config = GameConfig::new(2)
            .with_difficulty(Difficulty::Hard)
            .with_grid(2, 5);

        assert_eq!(config.unflip_delay_ms, 700);
        assert_eq!(config.tile_count(), 10);
    }

    #[test]
    fn test_odd_tile_count_rejected() {
        let err = GameConfig::new(2).with_grid(3, 3).validate().unwrap_err();
        assert_eq!(err, ConfigError::OddTileCount { rows: 3, cols: 3 });
    }

    #[test]
    fn test_grid_too_small_rejected() {
        assert_eq!(
            GameConfig::new(2).with_grid(1, 1).validate(),
            Err(ConfigError::GridTooSmall { rows: 1, cols: 1 })
        );
        assert_eq!(
            GameConfig::new(2).with_grid(0, 4).validate(),
            Err(ConfigError::GridTooSmall { rows: 0, cols: 4 })
        );
        assert!(GameConfig::new(2).with_grid(1, 2).validate().is_ok());
    }

    #[test]
    fn test_grid_too_large_rejected() {
        let err = GameConfig::new(2).with_grid(14, 2).validate().unwrap_err();
        assert_eq!(err, ConfigError::GridTooLarge { rows: 14, cols: 2, max: MAX_GRID_SIDE });
    }

    #[test]
    fn test_huge_grid_rejected() {
        let err = GameConfig::new(2).with_grid(usize::MAX, 2).validate().unwrap_err();
        assert_eq!(err, ConfigError::GridTooLarge { rows: usize::MAX, cols: 2, max: MAX_GRID_SIDE });

        let side = usize::MAX / 2;
        let config = GameConfig::new(2).with_grid(side, side);
        assert_eq!(config.tile_count(), usize::MAX);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::GridTooLarge { .. }));
        assert!(err.hint().contains("too large"));
    }

    #[test]
    fn test_player_count_rejected() {
        assert!(GameConfig::new(0).validate().is_err());
        assert!(GameConfig::new(9).validate().is_err());
        assert!(GameConfig::new(8).validate().is_ok());
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new(3)
            .with_difficulty(Difficulty::Easy)
            .with_face_supply(FaceSupply::Theme("cats".to_string()));

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, deserialized);
    }
}
