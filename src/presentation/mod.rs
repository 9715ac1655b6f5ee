//! Presentation seams: rendering and audio.
//!
//! The engine owns no DOM, sound or timer. Hosts implement `RenderSink` and
//! `AudioSink` and feed effect lists through [`dispatch`], which also hands
//! back any unflip timer the host must arm.

use serde::{Deserialize, Serialize};

use crate::cards::Face;
use crate::core::PlayerId;
use crate::engine::{Cue, Effect, UnflipToken};

/// Receives visual updates. Owns no game state.
///
/// Only card and scoreboard updates are required; the rest default to no-ops.
pub trait RenderSink {
    /// Redraw a fresh face-down board.
    fn board_dealt(&mut self, rows: usize, cols: usize);

    /// Show a card's face.
    fn reveal(&mut self, position: usize, face: &Face);

    /// Turn a card face-down.
    fn conceal(&mut self, position: usize);

    /// Mark two cards as found.
    fn mark_matched(&mut self, first: usize, second: usize);

    /// Update one player's score.
    fn score(&mut self, player: PlayerId, score: u32);

    /// Highlight whose turn it is.
    fn turn(&mut self, player: PlayerId);

    /// Update the move and pair counters.
    fn progress(&mut self, _moves: u32, _matched_pairs: usize, _total_pairs: usize) {}

    /// Update the elapsed-time display.
    fn elapsed(&mut self, _seconds: u64) {}

    /// Show or hide the pause overlay.
    fn paused(&mut self, _paused: bool) {}

    /// Show a banner (tie-breaker start, winner).
    fn announce(&mut self, _message: &str) {}
}

/// Plays sound cues. Must not block.
pub trait AudioSink {
    fn play(&mut self, cue: Cue, volume: f32);
}

/// Mute flag and volume applied to every cue.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AudioSettings {
    pub muted: bool,
    /// Volume in `0.0..=1.0`.
    pub volume: f32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self { muted: false, volume: 1.0 }
    }
}

impl AudioSettings {
    /// Set the volume, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = if volume.is_nan() { 0.0 } else { volume.clamp(0.0, 1.0) };
        self
    }

    /// Set the mute flag.
    #[must_use]
    pub fn with_muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    /// Whether cues should be played at all.
    #[must_use]
    pub fn is_audible(&self) -> bool {
        !self.muted && self.volume > 0.0
    }
}

/// Apply effects to the sinks in order.
///
/// Returns the last unflip request, if any; the host arms a timer for it
/// and passes the token back to the engine when it fires.
pub fn dispatch(
    effects: &[Effect],
    render: &mut dyn RenderSink,
    audio: &mut dyn AudioSink,
    settings: &AudioSettings,
) -> Option<(UnflipToken, u64)> {
    let mut pending = None;

    for effect in effects {
        match effect {
            Effect::BoardDealt { rows, cols } => render.board_dealt(*rows, *cols),
            Effect::Reveal { position, face } => render.reveal(*position, face),
            Effect::Conceal { position } => render.conceal(*position),
            Effect::Matched { first, second } => render.mark_matched(*first, *second),
            Effect::Cue(cue) => {
                if settings.is_audible() {
                    audio.play(*cue, settings.volume);
                }
            }
            Effect::ScoreChanged { player, score } => render.score(*player, *score),
            Effect::TurnChanged { player } => render.turn(*player),
            Effect::Progress { moves, matched_pairs, total_pairs } => {
                render.progress(*moves, *matched_pairs, *total_pairs);
            }
            Effect::ScheduleUnflip { token, delay_ms } => pending = Some((*token, *delay_ms)),
            Effect::TieBreakerStarted { players } => {
                let names: Vec<String> = players.iter().map(ToString::to_string).collect();
                render.announce(&format!("Tie! Sudden death: {}", names.join(" vs ")));
            }
            Effect::GameOver(outcome) => render.announce(&outcome.announcement()),
            Effect::Paused => render.paused(true),
            Effect::Resumed => render.paused(false),
            Effect::Elapsed { seconds } => render.elapsed(*seconds),
        }
    }

    pending
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::GameOutcome;

    #[derive(Default)]
    struct Log {
        calls: Vec<String>,
    }

    impl RenderSink for Log {
        fn board_dealt(&mut self, rows: usize, cols: usize) {
            self.calls.push(format!("deal {rows}x{cols}"));
        }
        fn reveal(&mut self, position: usize, face: &Face) {
            self.calls.push(format!("reveal {position} {face}"));
        }
        fn conceal(&mut self, position: usize) {
            self.calls.push(format!("conceal {position}"));
        }
        fn mark_matched(&mut self, first: usize, second: usize) {
            self.calls.push(format!("matched {first} {second}"));
        }
        fn score(&mut self, player: PlayerId, score: u32) {
            self.calls.push(format!("score {} {score}", player.label()));
        }
        fn turn(&mut self, player: PlayerId) {
            self.calls.push(format!("turn {}", player.label()));
        }
        fn announce(&mut self, message: &str) {
            self.calls.push(format!("announce {message}"));
        }
    }

    impl AudioSink for Log {
        fn play(&mut self, cue: Cue, volume: f32) {
            self.calls.push(format!("play {cue:?} {volume}"));
        }
    }

    #[test]
    fn test_dispatch_routes_effects() {
        let token = UnflipToken { generation: 1, round: 0, first: 0, second: 2 };
        let effects = vec![
            Effect::Reveal { position: 0, face: Face::emoji("🐸") },
            Effect::Cue(Cue::Flip),
            Effect::ScheduleUnflip { token, delay_ms: 800 },
            Effect::Conceal { position: 0 },
            Effect::TurnChanged { player: PlayerId::new(2) },
        ];
        let mut render = Log::default();
        let mut audio = Log::default();

        let pending = dispatch(&effects, &mut render, &mut audio, &AudioSettings::default().with_volume(0.5));

        assert_eq!(pending, Some((token, 800)));
        assert_eq!(render.calls, vec!["reveal 0 🐸", "conceal 0", "turn 2"]);
        assert_eq!(audio.calls, vec!["play Flip 0.5"]);
    }

    #[test]
    fn test_muted_skips_audio() {
        let effects = vec![Effect::Cue(Cue::Match), Effect::Cue(Cue::Mismatch)];
        let mut render = Log::default();
        let mut audio = Log::default();

        let pending = dispatch(&effects, &mut render, &mut audio, &AudioSettings::default().with_muted(true));

        assert!(pending.is_none());
        assert!(audio.calls.is_empty());
    }

    #[test]
    fn test_announcements() {
        let effects = vec![
            Effect::TieBreakerStarted { players: vec![PlayerId::new(1), PlayerId::new(3)] },
            Effect::GameOver(GameOutcome::SuddenDeathWinner { player: PlayerId::new(3) }),
        ];
        let mut render = Log::default();
        let mut audio = Log::default();

        dispatch(&effects, &mut render, &mut audio, &AudioSettings::default());

        assert_eq!(
            render.calls,
            vec![
                "announce Tie! Sudden death: Player 1 vs Player 3",
                "announce Player 3 wins the tie-breaker!",
            ]
        );
    }

    #[test]
    fn test_volume_clamped() {
        assert_eq!(AudioSettings::default().with_volume(3.0).volume, 1.0);
        assert_eq!(AudioSettings::default().with_volume(-1.0).volume, 0.0);
        assert!(!AudioSettings::default().with_volume(0.0).is_audible());
    }
}
