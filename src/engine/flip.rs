//! The flip state machine.
//!
//! ```text
//! Idle --flip--> OneFlipped --flip--> match    --> Idle (same player)
//!                                 \-> mismatch --> Resolving --unflip--> Idle (next player)
//! ```
//!
//! All entry points are reducers: they take a session by value and return
//! the next session with the effects the host should apply. Invalid input
//! (matched cards, a card that is already up, a locked or paused board, a
//! finished game, a position off the board) returns the session unchanged
//! with no effects.

use tracing::{debug, trace};

use super::effects::{Cue, Effect, UnflipToken};
use super::session::{FlipPhase, GameSession};
use crate::rules::{evaluate, GameOutcome, Resolution};

/// Flip the card at `position`.
#[must_use]
pub fn handle_flip(mut session: GameSession, position: usize) -> (GameSession, Vec<Effect>) {
    let effects = session.flip(position);
    (session, effects)
}

/// Turn a mismatched pair back over once its timer fires.
#[must_use]
pub fn handle_unflip(mut session: GameSession, token: UnflipToken) -> (GameSession, Vec<Effect>) {
    let effects = session.unflip(token);
    (session, effects)
}

/// Pause or resume input.
#[must_use]
pub fn set_paused(mut session: GameSession, paused: bool) -> (GameSession, Vec<Effect>) {
    let effects = session.set_paused(paused);
    (session, effects)
}

impl GameSession {
    fn flip(&mut self, position: usize) -> Vec<Effect> {
        let mut effects = Vec::new();

        if !self.accepts_input() {
            trace!(position, "flip ignored: input closed");
            return effects;
        }
        let face = match self.board.get(position) {
            Some(card) if card.is_flippable() => card.face.clone(),
            _ => {
                trace!(position, "flip ignored: card not flippable");
                return effects;
            }
        };

        self.started = true;
        self.board.reveal(position);
        effects.push(Effect::Reveal { position, face });
        effects.push(Effect::Cue(Cue::Flip));

        match self.phase {
            FlipPhase::Idle => self.phase = FlipPhase::OneFlipped { first: position },
            FlipPhase::OneFlipped { first } => {
                self.moves += 1;
                self.resolve_pair(first, position, &mut effects);
            }
            // Unreachable while input is locked
            FlipPhase::Resolving { .. } => {}
        }

        effects
    }

    fn resolve_pair(&mut self, first: usize, second: usize, effects: &mut Vec<Effect>) {
        let is_match = match (self.board.get(first), self.board.get(second)) {
            (Some(a), Some(b)) => a.matches(b),
            _ => false,
        };

        if !is_match {
            debug!(first, second, player = %self.current_player(), "mismatch");
            self.phase = FlipPhase::Resolving { first, second };
            self.input_locked = true;
            effects.push(Effect::Cue(Cue::Mismatch));
            effects.push(self.progress());
            effects.push(Effect::ScheduleUnflip {
                token: self.unflip_token(first, second),
                delay_ms: self.unflip_delay_ms,
            });
            return;
        }

        let player = self.scoreboard.current();
        self.board.mark_matched(first);
        self.board.mark_matched(second);
        self.phase = FlipPhase::Idle;
        self.matched_pairs += 1;
        let score = self.scoreboard.record_score(player);
        debug!(first, second, player = %self.label_of(player), score, "match");

        effects.push(Effect::Matched { first, second });
        effects.push(Effect::Cue(Cue::Match));
        effects.push(Effect::ScoreChanged { player: self.label_of(player), score });
        effects.push(self.progress());

        if self.tie_breaker.is_some() {
            let outcome = GameOutcome::SuddenDeathWinner { player: self.label_of(player) };
            self.finish(outcome, effects);
        } else if self.matched_pairs == self.total_pairs() {
            self.resolve_game(effects);
        }
    }

    fn resolve_game(&mut self, effects: &mut Vec<Effect>) {
        match evaluate(&self.scoreboard) {
            Resolution::SoleWinner { player, score } => {
                let outcome = GameOutcome::Winner { player: self.label_of(player), score };
                self.finish(outcome, effects);
            }
            Resolution::Tie { players, .. } => self.enter_tie_breaker(&players, effects),
        }
    }

    fn unflip(&mut self, token: UnflipToken) -> Vec<Effect> {
        let mut effects = Vec::new();

        if token.generation != self.generation || token.round != self.round {
            trace!(?token, "stale unflip ignored");
            return effects;
        }
        if self.phase != (FlipPhase::Resolving { first: token.first, second: token.second }) {
            trace!(?token, "unflip ignored: pair not pending");
            return effects;
        }
        if self.paused {
            debug!(?token, "unflip deferred until resume");
            self.deferred_unflip = Some(token);
            return effects;
        }

        self.board.conceal(token.first);
        self.board.conceal(token.second);
        self.phase = FlipPhase::Idle;
        self.input_locked = false;
        self.deferred_unflip = None;
        let next = self.scoreboard.advance_turn();
        debug!(player = %self.label_of(next), "turn passes");

        effects.push(Effect::Conceal { position: token.first });
        effects.push(Effect::Conceal { position: token.second });
        effects.push(Effect::TurnChanged { player: self.label_of(next) });
        effects
    }

    fn set_paused(&mut self, paused: bool) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.paused == paused || self.is_finished() {
            return effects;
        }

        self.paused = paused;
        if paused {
            effects.push(Effect::Paused);
            return effects;
        }

        effects.push(Effect::Resumed);
        if let Some(token) = self.deferred_unflip.take() {
            effects.push(Effect::ScheduleUnflip { token, delay_ms: self.unflip_delay_ms });
        }
        effects
    }
}
