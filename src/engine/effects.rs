//! Effects emitted by the engine for the presentation layer.
//!
//! Every transition returns a list of effects instead of touching the DOM,
//! audio or timers directly. Hosts apply them in order, either by hand or
//! through [`crate::presentation::dispatch`].

use serde::{Deserialize, Serialize};

use crate::cards::Face;
use crate::core::PlayerId;
use crate::rules::GameOutcome;

/// Discrete audio cues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    Flip,
    Match,
    Mismatch,
}

/// Identifies a pending unflip.
///
/// Hosts hand the token back when their timer fires. Tokens from an earlier
/// session (`generation`) or an earlier sudden-death round (`round`) are
/// ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnflipToken {
    pub generation: u64,
    pub round: u32,
    pub first: usize,
    pub second: usize,
}

/// One instruction for the presentation layer.
///
/// Player IDs are always original labels, also during sudden death.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Effect {
    /// A fresh face-down board was dealt.
    BoardDealt { rows: usize, cols: usize },
    /// Show a card's face.
    Reveal { position: usize, face: Face },
    /// Turn a card face-down.
    Conceal { position: usize },
    /// Two cards were matched and are no longer interactive.
    Matched { first: usize, second: usize },
    /// Play a sound.
    Cue(Cue),
    /// A player's score changed.
    ScoreChanged { player: PlayerId, score: u32 },
    /// It is now this player's turn.
    TurnChanged { player: PlayerId },
    /// Move and pair counters changed.
    Progress { moves: u32, matched_pairs: usize, total_pairs: usize },
    /// Arm a timer and call back with the token after `delay_ms`.
    ScheduleUnflip { token: UnflipToken, delay_ms: u64 },
    /// Sudden death among these players.
    TieBreakerStarted { players: Vec<PlayerId> },
    /// The session is over.
    GameOver(GameOutcome),
    /// Input is suspended.
    Paused,
    /// Input is accepted again.
    Resumed,
    /// Elapsed play time, in whole seconds.
    Elapsed { seconds: u64 },
}

impl Effect {
    /// The pending unflip this effect asks for, if any.
    #[must_use]
    pub fn unflip_request(&self) -> Option<(UnflipToken, u64)> {
        match self {
            Effect::ScheduleUnflip { token, delay_ms } => Some((*token, *delay_ms)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unflip_request() {
        let token = UnflipToken { generation: 1, round: 0, first: 0, second: 3 };
        let effect = Effect::ScheduleUnflip { token, delay_ms: 700 };

        assert_eq!(effect.unflip_request(), Some((token, 700)));
        assert_eq!(Effect::Cue(Cue::Flip).unflip_request(), None);
    }

    #[test]
    fn test_effect_serialization() {
        let effects = vec![
            Effect::Reveal { position: 2, face: Face::emoji("🐸") },
            Effect::ScoreChanged { player: PlayerId::new(1), score: 2 },
            Effect::GameOver(GameOutcome::SuddenDeathWinner { player: PlayerId::new(2) }),
        ];

        let json = serde_json::to_string(&effects).unwrap();
        let deserialized: Vec<Effect> = serde_json::from_str(&json).unwrap();

        assert_eq!(effects, deserialized);
    }
}
