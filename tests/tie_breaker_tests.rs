//! Sudden-death tie-breaker tests.
//!
//! Boards are laid out by hand so the scores at the end of the main game
//! are known in advance.

use memory_match::cards::{Board, Card, Face, PairId};
use memory_match::core::{GameRng, PlayerId};
use memory_match::engine::{handle_flip, handle_unflip, Effect, FlipPhase, GameSession, UnflipToken};
use memory_match::rules::GameOutcome;

fn arranged(rows: usize, cols: usize, pairs: &[u32]) -> Board {
    Board::arranged(
        rows,
        cols,
        pairs.iter().map(|&p| Card::new(PairId::new(p), Face::emoji(format!("F{p}")))),
    )
}

fn play(mut session: GameSession, positions: &[usize]) -> (GameSession, Vec<Effect>) {
    let mut all = Vec::new();
    for &position in positions {
        let (next, effects) = handle_flip(session, position);
        session = next;
        all.extend(effects);
    }
    (session, all)
}

fn unflip(session: GameSession, effects: &[Effect]) -> GameSession {
    let token = effects
        .iter()
        .find_map(Effect::unflip_request)
        .map(|(token, _)| token)
        .expect("unflip scheduled");
    handle_unflip(session, token).0
}

/// Two positions on `board` holding different pairs.
fn mismatch(board: &Board) -> [usize; 2] {
    let first = board.get(0).unwrap().pair;
    let other = (1..board.len()).find(|&p| board.get(p).unwrap().pair != first).unwrap();
    [0, other]
}

/// Three players where players 1 and 3 finish on 3 pairs and player 2 on 0.
fn tied_one_and_three() -> (GameSession, Vec<Effect>) {
    let board = arranged(3, 4, &[0, 0, 1, 1, 2, 2, 3, 4, 3, 4, 5, 5]);
    let session = GameSession::with_board(board, 3, 1000, GameRng::new(11), 4).unwrap();

    // Player 1: three matches, then a miss
    let (session, effects) = play(session, &[0, 1, 2, 3, 4, 5, 6, 7]);
    let session = unflip(session, &effects);
    // Player 2: a miss
    let (session, effects) = play(session, &[6, 7]);
    let session = unflip(session, &effects);
    // Player 3: the remaining three pairs
    play(session, &[6, 8, 7, 9, 10, 11])
}

/// Test that a tie between two of three players starts sudden death.
#[test]
fn test_tie_starts_sudden_death() {
    let (session, effects) = tied_one_and_three();

    assert!(!session.is_finished());
    assert!(effects.contains(&Effect::TieBreakerStarted { players: vec![PlayerId::new(1), PlayerId::new(3)] }));
    assert!(!effects.iter().any(|e| matches!(e, Effect::GameOver(_))));

    let tie = session.tie_breaker().unwrap();
    assert_eq!(tie.original_labels, vec![PlayerId::new(1), PlayerId::new(3)]);
    assert_eq!(tie.depth, 1);
    assert_eq!(session.round(), 1);
    assert_eq!(session.scoreboard().player_count(), 2);
    assert_eq!(session.current_player(), PlayerId::new(1));
    assert_eq!(session.score_of(PlayerId::new(3)), Some(0));
    assert_eq!(session.score_of(PlayerId::new(2)), None);
}

/// Test that sudden death deals a fresh, fully face-down board.
#[test]
fn test_sudden_death_board_is_fresh() {
    let (session, effects) = tied_one_and_three();

    assert_eq!(session.board().len(), 12);
    assert_eq!(session.matched_pairs(), 0);
    assert!(session.board().iter().all(|c| !c.face_up && !c.matched));
    for pair in 0..6 {
        assert_eq!(session.board().positions_of(PairId::new(pair)).len(), 2);
    }
    assert!(effects.contains(&Effect::BoardDealt { rows: 3, cols: 4 }));
    assert!(effects.contains(&Effect::TurnChanged { player: PlayerId::new(1) }));
}

/// Test that the first sudden-death match wins, announced under the original label.
#[test]
fn test_first_match_wins_under_original_label() {
    let (session, _) = tied_one_and_three();
    let moves_before = session.moves();

    // Player 1 misses, player 3 matches
    let miss = mismatch(session.board());
    let (session, effects) = play(session, &miss);
    let session = unflip(session, &effects);
    assert_eq!(session.current_player(), PlayerId::new(3));

    let pair = session.board().get(0).unwrap().pair;
    let positions = session.board().positions_of(pair);
    let (session, effects) = play(session, &[positions[0], positions[1]]);

    let outcome = GameOutcome::SuddenDeathWinner { player: PlayerId::new(3) };
    assert_eq!(session.outcome(), Some(&outcome));
    assert!(effects.contains(&Effect::ScoreChanged { player: PlayerId::new(3), score: 1 }));
    assert_eq!(effects.last(), Some(&Effect::GameOver(outcome.clone())));
    assert_eq!(outcome.announcement(), "Player 3 wins the tie-breaker!");
    assert_eq!(session.moves(), moves_before + 2);
    assert!(session.board().matched_cards() < session.board().len());
}

/// Test that an unflip timer from the main round cannot act in sudden death.
#[test]
fn test_main_round_timer_rejected_in_sudden_death() {
    let (session, _) = tied_one_and_three();
    let [a, b] = mismatch(session.board());
    let (session, _) = play(session, &[a, b]);
    assert_eq!(session.phase(), FlipPhase::Resolving { first: a, second: b });

    let stale = UnflipToken { generation: session.generation(), round: 0, first: a, second: b };
    let (session, effects) = handle_unflip(session, stale);

    assert!(effects.is_empty());
    assert!(session.is_input_locked());
    assert_eq!(session.board().unresolved_face_up(), 2);
}
