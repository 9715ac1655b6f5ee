//! Game session: everything that changes while a game is played.
//!
//! A `GameSession` is a plain value. The flip reducer takes it by value and
//! hands back the next one, so nothing is shared between sessions and tests
//! can run many side by side. Boards and faces live in `im` vectors, which
//! keeps snapshots cheap.
//!
//! ## Tokens
//!
//! - `generation`: assigned by the controller, unique per session
//! - `round`: bumped on every sudden-death entry
//!
//! Together they stamp every unflip timer so late callbacks from a replaced
//! board are ignored.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::effects::{Effect, UnflipToken};
use super::scoreboard::Scoreboard;
use crate::cards::{Board, Face, PairId};
use crate::core::config::check_player_count;
use crate::core::{ConfigError, GameConfig, GameRng, PlayerId};
use crate::rules::GameOutcome;
use crate::theme::ThemeSupply;

/// Where the flip state machine stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipPhase {
    /// No unresolved card is face-up.
    #[default]
    Idle,
    /// One card is face-up, waiting for its partner.
    OneFlipped { first: usize },
    /// Two mismatched cards are face-up, waiting to be turned back.
    Resolving { first: usize, second: usize },
}

/// Sudden-death bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieBreaker {
    /// Original label of each relabeled player (index 0 is player 1).
    pub original_labels: Vec<PlayerId>,
    /// Number of consecutive sudden-death entries.
    pub depth: u32,
}

/// State of one game from deal to outcome.
#[derive(Clone, Debug)]
pub struct GameSession {
    pub(super) generation: u64,
    pub(super) round: u32,
    pub(super) board: Board,
    pub(super) faces: Vector<Face>,
    pub(super) scoreboard: Scoreboard,
    pub(super) phase: FlipPhase,
    pub(super) matched_pairs: usize,
    pub(super) moves: u32,
    pub(super) input_locked: bool,
    pub(super) paused: bool,
    pub(super) started: bool,
    pub(super) deferred_unflip: Option<UnflipToken>,
    pub(super) tie_breaker: Option<TieBreaker>,
    pub(super) outcome: Option<GameOutcome>,
    pub(super) unflip_delay_ms: u64,
    pub(super) rng: GameRng,
}

impl GameSession {
    /// Validate `config`, resolve faces and deal a fresh board.
    pub fn new(
        config: &GameConfig,
        themes: &dyn ThemeSupply,
        rng: GameRng,
        generation: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::deal(config, themes, rng, generation))
    }

    /// Deal from a configuration already known to be valid.
    pub(crate) fn deal(config: &GameConfig, themes: &dyn ThemeSupply, mut rng: GameRng, generation: u64) -> Self {
        let faces = config.face_supply.resolve(config.pair_count(), themes, &mut rng);
        let board = Board::deal(config.rows, config.cols, &faces, &mut rng);
        info!(generation, rows = config.rows, cols = config.cols, players = config.player_count, "new game");

        Self::assemble(board, faces.into_iter().collect(), config.player_count, config.unflip_delay_ms, rng, generation)
    }

    /// Start a session on a board laid out in advance.
    ///
    /// The board must hold every `PairId` exactly twice and the player count
    /// must be within `1..=MAX_PLAYERS`. The RNG is only used if a
    /// sudden-death round deals a new board.
    pub fn with_board(
        board: Board,
        player_count: usize,
        unflip_delay_ms: u64,
        rng: GameRng,
        generation: u64,
    ) -> Result<Self, ConfigError> {
        check_player_count(player_count)?;
        if board.is_empty() {
            return Err(ConfigError::GridTooSmall { rows: board.rows(), cols: board.cols() });
        }

        let mut counts: FxHashMap<PairId, usize> = FxHashMap::default();
        for card in board.iter() {
            *counts.entry(card.pair).or_default() += 1;
        }
        if let Some((pair, count)) = counts.into_iter().filter(|&(_, count)| count != 2).min() {
            return Err(ConfigError::UnevenPair { pair: pair.0, count });
        }

        let mut pairs: Vec<_> = board.iter().map(|c| (c.pair, c.face.clone())).collect();
        pairs.sort_by_key(|(pair, _)| *pair);
        pairs.dedup_by_key(|(pair, _)| *pair);
        let faces = pairs.into_iter().map(|(_, face)| face).collect();

        Ok(Self::assemble(board, faces, player_count, unflip_delay_ms, rng, generation))
    }

    fn assemble(
        board: Board,
        faces: Vector<Face>,
        player_count: usize,
        unflip_delay_ms: u64,
        rng: GameRng,
        generation: u64,
    ) -> Self {
        Self {
            generation,
            round: 0,
            board,
            faces,
            scoreboard: Scoreboard::new(player_count),
            phase: FlipPhase::Idle,
            matched_pairs: 0,
            moves: 0,
            input_locked: false,
            paused: false,
            started: false,
            deferred_unflip: None,
            tie_breaker: None,
            outcome: None,
            unflip_delay_ms,
            rng,
        }
    }

    /// Effects that draw the session from scratch.
    #[must_use]
    pub fn opening_effects(&self) -> Vec<Effect> {
        let mut effects = vec![Effect::BoardDealt { rows: self.board.rows(), cols: self.board.cols() }];
        effects.extend(self.scoreboard.iter().map(|(player, score)| Effect::ScoreChanged {
            player: self.label_of(player),
            score,
        }));
        effects.push(Effect::TurnChanged { player: self.current_player() });
        effects.push(self.progress());
        effects
    }

    // === Accessors ===

    /// Session token assigned by the controller.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Sudden-death round counter (0 for the main game).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Scores and turn pointer, in relabeled IDs during sudden death.
    #[must_use]
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Current player's original label.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.label_of(self.scoreboard.current())
    }

    /// Flip state machine position.
    #[must_use]
    pub fn phase(&self) -> FlipPhase {
        self.phase
    }

    /// Pairs found in the current round.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    /// Pairs on the board.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.board.total_pairs()
    }

    /// Pair attempts so far, across all rounds.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Whether a mismatch is waiting to be turned back.
    #[must_use]
    pub fn is_input_locked(&self) -> bool {
        self.input_locked
    }

    /// Whether the session is paused.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether any card has been flipped.
    #[must_use]
    pub fn has_started(&self) -> bool {
        self.started
    }

    /// Whether the session reached an outcome.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// The outcome, once finished.
    #[must_use]
    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    /// Whether a sudden-death round is in progress or decided the game.
    #[must_use]
    pub fn is_tie_breaker(&self) -> bool {
        self.tie_breaker.is_some()
    }

    /// Sudden-death bookkeeping, if any.
    #[must_use]
    pub fn tie_breaker(&self) -> Option<&TieBreaker> {
        self.tie_breaker.as_ref()
    }

    /// Unflip delay for this session.
    #[must_use]
    pub fn unflip_delay_ms(&self) -> u64 {
        self.unflip_delay_ms
    }

    /// Unflip waiting for the session to resume.
    #[must_use]
    pub fn deferred_unflip(&self) -> Option<UnflipToken> {
        self.deferred_unflip
    }

    /// Whether a flip would currently be considered.
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        !self.input_locked && !self.paused && self.outcome.is_none()
    }

    /// Original label of a (possibly relabeled) player.
    #[must_use]
    pub fn label_of(&self, player: PlayerId) -> PlayerId {
        self.tie_breaker
            .as_ref()
            .and_then(|t| t.original_labels.get(player.index()).copied())
            .unwrap_or(player)
    }

    /// Score of a player by original label.
    ///
    /// Players eliminated by a tie-breaker report `None`.
    #[must_use]
    pub fn score_of(&self, label: PlayerId) -> Option<u32> {
        self.scoreboard
            .iter()
            .find(|(player, _)| self.label_of(*player) == label)
            .map(|(_, score)| score)
    }

    pub(super) fn progress(&self) -> Effect {
        Effect::Progress {
            moves: self.moves,
            matched_pairs: self.matched_pairs,
            total_pairs: self.total_pairs(),
        }
    }

    pub(super) fn unflip_token(&self, first: usize, second: usize) -> UnflipToken {
        UnflipToken { generation: self.generation, round: self.round, first, second }
    }

    // === Transitions used by the reducer ===

    /// Finish with an outcome; input stays closed from here on.
    pub(super) fn finish(&mut self, outcome: GameOutcome, effects: &mut Vec<Effect>) {
        info!(generation = self.generation, winner = %outcome.winner(), "game over");
        self.phase = FlipPhase::Idle;
        self.input_locked = false;
        self.deferred_unflip = None;
        self.outcome = Some(outcome.clone());
        effects.push(Effect::GameOver(outcome));
    }

    /// Restart on a fresh board with only `tied` players.
    ///
    /// `tied` are the scoreboard's current IDs. Labels compose across nested
    /// rounds, so announcements always use the root player set.
    pub(super) fn enter_tie_breaker(&mut self, tied: &[PlayerId], effects: &mut Vec<Effect>) {
        let original_labels: Vec<PlayerId> = tied.iter().map(|&p| self.label_of(p)).collect();
        let depth = self.tie_breaker.as_ref().map_or(1, |t| t.depth + 1);
        debug!(players = ?original_labels, depth, "entering sudden death");

        let faces: Vec<Face> = self.faces.iter().cloned().collect();
        self.board = Board::deal(self.board.rows(), self.board.cols(), &faces, &mut self.rng);
        self.scoreboard = Scoreboard::new(original_labels.len());
        self.tie_breaker = Some(TieBreaker { original_labels: original_labels.clone(), depth });
        self.round += 1;
        self.matched_pairs = 0;
        self.phase = FlipPhase::Idle;
        self.input_locked = false;
        self.deferred_unflip = None;

        effects.push(Effect::TieBreakerStarted { players: original_labels });
        effects.extend(self.opening_effects());
    }
}
