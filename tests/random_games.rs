//! Full-game integration tests: drive the engine through the public API the
//! way the batch harness does and check the invariants that must survive
//! entire games.

use othello::agent::RandomAgent;
use othello::arena::{play_game, run_batch, BatchConfig};
use othello::{opponent, OthelloState, PLAYER_ONE};

fn scan_count(state: &OthelloState, player: i32) -> u32 {
    state
        .board()
        .iter()
        .flatten()
        .filter(|&&cell| cell == player)
        .count() as u32
}

#[test]
fn random_games_preserve_score_invariants() {
    for size in [4, 6, 8] {
        for seed in 0..4 {
            let mut agent = RandomAgent::new(seed);
            let mut state = OthelloState::new(size);
            let mut player = PLAYER_ONE;
            loop {
                if let Some(mv) = agent.pick_move(&state, player).unwrap() {
                    state.apply_move(&mv, player);
                }
                // The incremental tally must track the board exactly.
                let scores = state.scores();
                assert_eq!(scores.get(PLAYER_ONE), scan_count(&state, PLAYER_ONE));
                assert_eq!(
                    scores.get(opponent(PLAYER_ONE)),
                    scan_count(&state, opponent(PLAYER_ONE))
                );

                player = opponent(player);
                if state.game_status(player).unwrap().is_game_over() {
                    break;
                }
            }
        }
    }
}

#[test]
fn recorded_history_replays_to_the_same_result() {
    let record = play_game(8, 1001).unwrap();
    assert!(record.status.is_game_over());

    let mut state = OthelloState::new(8);
    for entry in &record.history {
        assert!(
            state.is_legal(&entry.mv, entry.player).unwrap(),
            "recorded move {} was not legal on replay",
            entry.mv
        );
        state.apply_move(&entry.mv, entry.player);
    }
    assert_eq!(state.game_status(PLAYER_ONE).unwrap(), record.status);
}

#[test]
fn batch_runs_are_reproducible() {
    let config = BatchConfig {
        games: 10,
        board_size: 8,
        seed: 5,
        threads: 1,
    };
    let a = run_batch(&config).unwrap();
    let b = run_batch(&config).unwrap();
    assert_eq!(a.player_one_wins, b.player_one_wins);
    assert_eq!(a.player_two_wins, b.player_two_wins);
    assert_eq!(a.draws, b.draws);
    assert_eq!(a.total_moves, b.total_moves);
    assert_eq!(a.player_one_wins + a.player_two_wins + a.draws, 10);
}
