//! Elapsed play time.

use serde::{Deserialize, Serialize};

/// Whole-second game clock.
///
/// The host calls [`GameClock::tick`] once a second; the clock only counts
/// while running.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameClock {
    seconds: u64,
    running: bool,
}

impl GameClock {
    /// A clock at 0:00 that is already running.
    #[must_use]
    pub fn started() -> Self {
        Self { seconds: 0, running: true }
    }

    /// Count one second if running. Returns whether the clock advanced.
    pub fn tick(&mut self) -> bool {
        if self.running {
            self.seconds += 1;
        }
        self.running
    }

    /// Stop counting.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Resume counting.
    pub fn resume(&mut self) {
        self.running = true;
    }

    /// Whether the clock is counting.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Elapsed whole seconds.
    #[must_use]
    pub fn seconds(&self) -> u64 {
        self.seconds
    }
}

impl std::fmt::Display for GameClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:02}", self.seconds / 60, self.seconds % 60)
    }
}
