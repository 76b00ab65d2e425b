//! Elimination-mode rounds: eliminations, restarts, and the champion.

use number_bomb::{
    Feedback, GameConfig, GameEngine, GuessResult, Mode, Phase, PlayerId, Range, RestartPolicy,
    ScriptedTargets,
};

fn elimination(targets: impl Into<Vec<u32>>) -> GameEngine {
    GameEngine::with_rng(
        GameConfig::elimination(Mode::Easy),
        Box::new(ScriptedTargets::new(targets)),
    )
}

#[test]
fn test_hit_eliminates_the_guesser() {
    let mut engine = elimination([42, 17]);
    engine.setup_game(4);

    // Player 1 hits the bomb straight away.
    let result = engine.submit_guess(42u32);
    assert_eq!(
        result,
        GuessResult::Accepted {
            feedback: Feedback::Hit,
            phase: Phase::RoundOver,
        }
    );

    assert_eq!(engine.last_loser(), Some(PlayerId::new(1)));
    assert!(!engine.players()[0].is_alive());
    assert_eq!(
        engine.survivors(),
        vec![PlayerId::new(2), PlayerId::new(3), PlayerId::new(4)]
    );
    assert_eq!(engine.target_number(), Some(42));
}

#[test]
fn test_two_players_hit_crowns_the_other() {
    let mut engine = elimination([42]);
    engine.setup_game(2);

    engine.submit_guess(70u32); // Player 1 misses, turn passes.
    let result = engine.submit_guess(42u32); // Player 2 hits.

    assert_eq!(result.phase(), Some(Phase::Champion));
    assert_eq!(engine.phase(), Phase::Champion);
    assert_eq!(engine.last_loser(), Some(PlayerId::new(2)));
    assert_eq!(engine.champion(), Some(PlayerId::new(1)));
    assert_eq!(engine.survivors(), vec![PlayerId::new(1)]);
}

#[test]
fn test_next_round_resets_the_board_and_keeps_eliminations() {
    let mut engine = elimination([42, 17]);
    engine.setup_game(3);

    engine.submit_guess(70u32);
    engine.submit_guess(42u32); // Player 2 eliminated.
    assert_eq!(engine.phase(), Phase::RoundOver);
    assert_eq!(engine.history().len(), 2);

    engine.next_round();

    assert_eq!(engine.phase(), Phase::Playing);
    assert_eq!(engine.range(), Some(Range::full(100)));
    assert!(engine.history().is_empty());
    assert_eq!(engine.last_loser(), None);
    assert_eq!(engine.target_number(), None);
    // The roster carries over: player 2 stays dead.
    assert_eq!(engine.survivors(), vec![PlayerId::new(1), PlayerId::new(3)]);
}

#[test]
fn test_rotation_skips_the_eliminated() {
    let mut engine = elimination([42, 17]);
    engine.setup_game(4);

    engine.submit_guess(70u32); // P1 miss -> P2
    engine.submit_guess(42u32); // P2 eliminated
    engine.next_round();

    // First-alive restart: player 1 opens.
    assert_eq!(engine.current_player(), Some(PlayerId::new(1)));

    // Rotation goes 1 -> 3 -> 4 -> 1, never visiting the dead seat.
    engine.submit_guess(90u32);
    assert_eq!(engine.current_player(), Some(PlayerId::new(3)));
    engine.submit_guess(80u32);
    assert_eq!(engine.current_player(), Some(PlayerId::new(4)));
    engine.submit_guess(70u32);
    assert_eq!(engine.current_player(), Some(PlayerId::new(1)));
}

#[test]
fn test_first_alive_restart_opens_with_lowest_living_id() {
    // Player 2 loses the round; the next round still opens with player 1,
    // the lowest living id, not the player after the loser.
    let mut engine = elimination([42, 17]);
    engine.setup_game(4);
    engine.submit_guess(70u32);
    engine.submit_guess(42u32);

    engine.next_round();
    assert_eq!(engine.current_player(), Some(PlayerId::new(1)));
}

#[test]
fn test_after_loser_restart_policy() {
    let config = GameConfig::elimination(Mode::Easy).with_restart_policy(RestartPolicy::AfterLoser);
    let mut engine = GameEngine::with_rng(config, Box::new(ScriptedTargets::new([42, 17])));
    engine.setup_game(4);

    engine.submit_guess(70u32);
    engine.submit_guess(42u32); // Player 2 eliminated.

    engine.next_round();
    // The living player after the loser opens the round.
    assert_eq!(engine.current_player(), Some(PlayerId::new(3)));
}

#[test]
fn test_survival_game_runs_down_to_a_champion() {
    // Four players, three rounds, three eliminations.
    let mut engine = elimination([42, 17, 99]);
    engine.setup_game(4);

    // Round 1: P1 misses, P2 hits 42.
    engine.submit_guess(70u32);
    engine.submit_guess(42u32);
    assert_eq!(engine.phase(), Phase::RoundOver);
    assert_eq!(engine.survivors().len(), 3);

    // Round 2: P1 opens and hits 17 immediately.
    engine.next_round();
    engine.submit_guess(17u32);
    assert_eq!(engine.phase(), Phase::RoundOver);
    assert_eq!(engine.survivors(), vec![PlayerId::new(3), PlayerId::new(4)]);

    // Round 3: P3 opens (first alive), misses; P4 misses; P3 hits 99.
    engine.next_round();
    assert_eq!(engine.current_player(), Some(PlayerId::new(3)));
    engine.submit_guess(50u32);
    assert_eq!(engine.current_player(), Some(PlayerId::new(4)));
    engine.submit_guess(80u32);
    engine.submit_guess(99u32);

    assert_eq!(engine.phase(), Phase::Champion);
    assert_eq!(engine.champion(), Some(PlayerId::new(4)));
    assert_eq!(engine.last_loser(), Some(PlayerId::new(3)));

    // Liveness never came back for anyone.
    let alive: Vec<_> = engine.players().iter().filter(|p| p.is_alive()).collect();
    assert_eq!(alive.len(), 1);
    assert_eq!(alive[0].id, PlayerId::new(4));
}

#[test]
fn test_champion_is_terminal_until_reset() {
    let mut engine = elimination([42]);
    engine.setup_game(2);
    engine.submit_guess(70u32);
    engine.submit_guess(42u32);
    assert_eq!(engine.phase(), Phase::Champion);

    // No more guesses are accepted.
    assert!(!engine.submit_guess(10u32).accepted());
    assert_eq!(engine.phase(), Phase::Champion);

    engine.reset();
    assert_eq!(engine.phase(), Phase::Setup);
    assert!(engine.players().is_empty());
    assert_eq!(engine.champion(), None);
}

#[test]
#[should_panic(expected = "next_round requires round_over")]
fn test_next_round_outside_round_over_panics() {
    let mut engine = elimination([42]);
    engine.setup_game(2);
    engine.next_round();
}

#[test]
#[should_panic(expected = "cannot start a round: eliminated")]
fn test_round_cannot_open_on_a_dead_seat() {
    let mut engine = elimination([42, 17]);
    engine.setup_game(3);
    engine.submit_guess(42u32); // Player 1 eliminated.

    engine.start_new_round(PlayerId::new(1));
}
