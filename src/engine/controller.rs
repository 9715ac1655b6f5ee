//! Game controller: owns the current session and its lifecycle.
//!
//! The controller is the single owner of a `GameSession`. It assigns session
//! generations, forks a fresh RNG stream for every deal, keeps the elapsed
//! clock in step with pause and game-over, and guards the configuration while
//! a game is in progress.
//!
//! ## Example
//!
//! ```
//! use memory_match::core::{GameConfig, GameRng};
//! use memory_match::engine::GameController;
//! use memory_match::theme::ThemeRegistry;
//!
//! let mut game = GameController::new(GameConfig::new(2), ThemeRegistry::new(), GameRng::new(42)).unwrap();
//! let effects = game.flip(0);
//! assert!(!effects.is_empty());
//! assert!(game.is_locked());
//! ```

use tracing::info;

use super::clock::GameClock;
use super::effects::{Effect, UnflipToken};
use super::flip::{handle_flip, handle_unflip, set_paused};
use super::session::GameSession;
use crate::core::{ConfigError, Difficulty, EngineError, GameConfig, GameRng};
use crate::presentation::AudioSettings;
use crate::theme::ThemeSupply;

/// Owns the configuration, theme source and current session.
pub struct GameController<T: ThemeSupply> {
    config: GameConfig,
    themes: T,
    rng: GameRng,
    next_generation: u64,
    session: GameSession,
    clock: GameClock,
    audio: AudioSettings,
}

impl<T: ThemeSupply> GameController<T> {
    /// Validate `config` and deal the first game.
    pub fn new(config: GameConfig, themes: T, mut rng: GameRng) -> Result<Self, ConfigError> {
        let session = GameSession::new(&config, &themes, rng.fork(), 1)?;
        Ok(Self {
            config,
            themes,
            rng,
            next_generation: 2,
            session,
            clock: GameClock::started(),
            audio: AudioSettings::default(),
        })
    }

    // === Accessors ===

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current session.
    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Theme source.
    #[must_use]
    pub fn themes(&self) -> &T {
        &self.themes
    }

    /// Elapsed-time clock.
    #[must_use]
    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    /// Elapsed play time in whole seconds.
    #[must_use]
    pub fn elapsed(&self) -> u64 {
        self.clock.seconds()
    }

    /// Audio settings.
    #[must_use]
    pub fn audio(&self) -> AudioSettings {
        self.audio
    }

    /// Mute or unmute cues.
    pub fn set_muted(&mut self, muted: bool) {
        self.audio = self.audio.with_muted(muted);
    }

    /// Set the cue volume (clamped to `0.0..=1.0`).
    pub fn set_volume(&mut self, volume: f32) {
        self.audio = self.audio.with_volume(volume);
    }

    /// Whether configuration changes are refused.
    ///
    /// True from the first flip until the next new game.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.session.has_started()
    }

    /// End-of-game summary line.
    #[must_use]
    pub fn stats(&self) -> String {
        format!("Moves: {} | Time: {}", self.session.moves(), self.clock)
    }

    // === Configuration ===

    /// Replace the configuration and deal a new game.
    ///
    /// Refused while a game is in progress; invalid settings are returned
    /// as an error whose text is suitable as a hint.
    pub fn configure(&mut self, config: GameConfig) -> Result<Vec<Effect>, EngineError> {
        if self.is_locked() {
            return Err(EngineError::ConfigLocked);
        }
        config.validate()?;
        self.config = config;
        Ok(self.new_game())
    }

    /// Apply a difficulty preset (grid and delay together).
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<Vec<Effect>, EngineError> {
        self.configure(self.config.clone().with_difficulty(difficulty))
    }

    /// Change the number of players.
    pub fn set_players(&mut self, player_count: usize) -> Result<Vec<Effect>, EngineError> {
        self.configure(self.config.clone().with_players(player_count))
    }

    // === Lifecycle ===

    /// Discard the current session and deal a new one.
    pub fn new_game(&mut self) -> Vec<Effect> {
        let generation = self.next_generation;
        self.next_generation += 1;

        self.session = GameSession::deal(&self.config, &self.themes, self.rng.fork(), generation);
        self.clock = GameClock::started();
        info!(generation, "session replaced");

        let mut effects = self.session.opening_effects();
        effects.push(Effect::Elapsed { seconds: 0 });
        effects
    }

    /// Same as [`GameController::new_game`].
    pub fn reset(&mut self) -> Vec<Effect> {
        self.new_game()
    }

    /// Same as [`GameController::new_game`], used from the game-over dialog.
    pub fn play_again(&mut self) -> Vec<Effect> {
        self.new_game()
    }

    // === Play ===

    /// Flip a card.
    pub fn flip(&mut self, position: usize) -> Vec<Effect> {
        let (session, effects) = handle_flip(self.session.clone(), position);
        self.commit(session, effects)
    }

    /// Deliver an unflip timer.
    pub fn fire_unflip(&mut self, token: UnflipToken) -> Vec<Effect> {
        let (session, effects) = handle_unflip(self.session.clone(), token);
        self.commit(session, effects)
    }

    /// Suspend input and the clock.
    pub fn pause(&mut self) -> Vec<Effect> {
        let (session, effects) = set_paused(self.session.clone(), true);
        self.commit(session, effects)
    }

    /// Accept input again, re-arming any deferred unflip.
    pub fn resume(&mut self) -> Vec<Effect> {
        let (session, effects) = set_paused(self.session.clone(), false);
        self.commit(session, effects)
    }

    /// Advance the clock by one second.
    pub fn tick(&mut self) -> Vec<Effect> {
        if self.clock.tick() {
            vec![Effect::Elapsed { seconds: self.clock.seconds() }]
        } else {
            Vec::new()
        }
    }

    fn commit(&mut self, session: GameSession, effects: Vec<Effect>) -> Vec<Effect> {
        self.session = session;
        if self.session.is_finished() || self.session.is_paused() {
            self.clock.stop();
        } else {
            self.clock.resume();
        }
        effects
    }
}
