//! End-of-game resolution.
//!
//! Runs once every pair is matched. Exactly one of two things happens:
//! a single leader wins, or the leaders go to sudden death.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::engine::Scoreboard;

/// Final result of a session, using the players' original labels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Highest score after every pair was found.
    Winner { player: PlayerId, score: u32 },
    /// First match in a sudden-death round.
    SuddenDeathWinner { player: PlayerId },
}

impl GameOutcome {
    /// The winning player.
    #[must_use]
    pub fn winner(&self) -> PlayerId {
        match self {
            GameOutcome::Winner { player, .. } | GameOutcome::SuddenDeathWinner { player } => *player,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner() == player
    }

    /// Text for the end-of-game banner.
    #[must_use]
    pub fn announcement(&self) -> String {
        match self {
            GameOutcome::Winner { player, score: 1 } => format!("{player} wins with 1 pair!"),
            GameOutcome::Winner { player, score } => format!("{player} wins with {score} pairs!"),
            GameOutcome::SuddenDeathWinner { player } => format!("{player} wins the tie-breaker!"),
        }
    }
}

/// What the resolver decided.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// One player holds the top score.
    SoleWinner { player: PlayerId, score: u32 },
    /// Several players share the top score.
    Tie { players: Vec<PlayerId>, score: u32 },
}

/// Decide the result from final scores.
///
/// Player IDs in the result are the scoreboard's own (possibly relabeled)
/// IDs; mapping back to original labels is the session's job.
#[must_use]
pub fn evaluate(scoreboard: &Scoreboard) -> Resolution {
    let score = scoreboard.max_score();
    let mut leaders = scoreboard.current_leaders();

    if leaders.len() == 1 {
        Resolution::SoleWinner { player: leaders.remove(0), score }
    } else {
        Resolution::Tie { players: leaders, score }
    }
}
