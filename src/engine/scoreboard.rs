//! Turn and score tracking.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};

/// Per-player scores and the current-player pointer.
///
/// Rebuilt from scratch on every reset and on sudden-death entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    scores: PlayerMap<u32>,
    current: PlayerId,
}

impl Scoreboard {
    /// Create a scoreboard with every score at zero and player 1 to move.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            scores: PlayerMap::with_value(player_count, 0),
            current: PlayerId::FIRST,
        }
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.scores.player_count()
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.current
    }

    /// Pass the turn to the next player, wrapping to player 1.
    pub fn advance_turn(&mut self) -> PlayerId {
        self.current = self.current.next(self.player_count());
        self.current
    }

    /// Add one point to `player` and return the new score.
    pub fn record_score(&mut self, player: PlayerId) -> u32 {
        self.scores[player] += 1;
        self.scores[player]
    }

    /// Score of `player`.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player]
    }

    /// Highest score on the board.
    #[must_use]
    pub fn max_score(&self) -> u32 {
        self.scores.iter().map(|(_, &s)| s).max().unwrap_or(0)
    }

    /// Players holding the highest score, in label order.
    #[must_use]
    pub fn current_leaders(&self) -> Vec<PlayerId> {
        let max = self.max_score();
        self.scores
            .iter()
            .filter(|(_, &s)| s == max)
            .map(|(p, _)| p)
            .collect()
    }

    /// Iterate over (player, score) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, u32)> + '_ {
        self.scores.iter().map(|(p, &s)| (p, s))
    }
}
