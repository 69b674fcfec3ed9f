//! # Arena Module - Game Driver and Batch Harness
//!
//! Drives complete random-vs-random games against the engine and aggregates
//! results across batches. The engine stays single-threaded; a batch of
//! independent games is fanned out over a rayon pool when more than one
//! worker is requested. Determinism holds in both modes: game `i` of a batch
//! always plays with seed `base_seed + i`, so a fixed base seed produces the
//! same tallies regardless of scheduling.

use crate::agent::RandomAgent;
use crate::games::othello::{GameStatus, OthelloError, OthelloMove, OthelloState, PLAYER_ONE};
use parking_lot::Mutex;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use std::time::{Duration, Instant};

/// A single entry in a game's move history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveHistoryEntry {
    /// Move number (1-indexed)
    pub move_number: u32,
    /// Player who made the move
    pub player: i32,
    /// The move that was made
    pub mv: OthelloMove,
}

/// Outcome of one simulated game
#[derive(Debug, Clone)]
pub struct GameRecord {
    /// How the game ended (never `InProgress`)
    pub status: GameStatus,
    /// Every applied move in order; passes leave no entry
    pub history: Vec<MoveHistoryEntry>,
    /// Wall time the game took
    pub duration: Duration,
}

/// Plays one random-vs-random game to completion
///
/// Player 1 moves first. Each turn the agent picks a uniformly random legal
/// move (or passes), the turn passes to the other player, and the game status
/// is evaluated for the player now to move. Passes consume a turn; two
/// consecutive passes end the game through the status check.
///
/// # Arguments
/// * `board_size` - Size of the board (NxN), clamped to a minimum of 4
/// * `seed` - Seed for the shared agent; fixes the full move sequence
///
/// # Returns
/// The final status, the complete move history, and the elapsed wall time
pub fn play_game(board_size: usize, seed: u64) -> Result<GameRecord, OthelloError> {
    let mut agent = RandomAgent::new(seed);
    let mut state = OthelloState::new(board_size);
    let mut history = Vec::new();
    let mut player = PLAYER_ONE;
    let start = Instant::now();

    let status = loop {
        if let Some(mv) = agent.pick_move(&state, player)? {
            state.apply_move(&mv, player);
            history.push(MoveHistoryEntry {
                move_number: history.len() as u32 + 1,
                player,
                mv,
            });
        }
        player = -player;
        let status = state.game_status(player)?;
        if status.is_game_over() {
            break status;
        }
    };

    Ok(GameRecord {
        status,
        history,
        duration: start.elapsed(),
    })
}

/// Configuration for a batch simulation run
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Number of games to simulate
    pub games: usize,
    /// Board size for every game
    pub board_size: usize,
    /// Base seed; game `i` plays with `seed + i`
    pub seed: u64,
    /// Worker threads; 1 runs the games sequentially
    pub threads: usize,
}

/// Aggregated results of a batch of games
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Games won by player 1
    pub player_one_wins: usize,
    /// Games won by player 2
    pub player_two_wins: usize,
    /// Drawn games
    pub draws: usize,
    /// Applied moves across all games (passes excluded)
    pub total_moves: u64,
    /// Wall time for the whole batch
    pub elapsed: Duration,
}

impl BatchStats {
    fn record(&mut self, record: &GameRecord) {
        match record.status {
            GameStatus::Win(PLAYER_ONE) => self.player_one_wins += 1,
            GameStatus::Win(_) => self.player_two_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
        self.total_moves += record.history.len() as u64;
    }
}

/// Runs a batch of independent games and aggregates the results
///
/// With one worker the games run sequentially on the calling thread. With
/// more workers they are distributed over a dedicated rayon pool and the
/// tally is merged under a mutex. Win and draw counts for a fixed base seed
/// are identical in both modes.
pub fn run_batch(config: &BatchConfig) -> Result<BatchStats, OthelloError> {
    let start = Instant::now();
    let mut stats = if config.threads > 1 {
        run_batch_parallel(config)?
    } else {
        run_batch_sequential(config)?
    };
    stats.elapsed = start.elapsed();
    Ok(stats)
}

fn run_batch_sequential(config: &BatchConfig) -> Result<BatchStats, OthelloError> {
    let mut stats = BatchStats::default();
    for i in 0..config.games {
        let record = play_game(config.board_size, config.seed.wrapping_add(i as u64))?;
        stats.record(&record);
    }
    Ok(stats)
}

fn run_batch_parallel(config: &BatchConfig) -> Result<BatchStats, OthelloError> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .unwrap();
    let stats = Mutex::new(BatchStats::default());
    pool.install(|| {
        (0..config.games).into_par_iter().try_for_each(|i| {
            let record = play_game(config.board_size, config.seed.wrapping_add(i as u64))?;
            stats.lock().record(&record);
            Ok(())
        })
    })?;
    Ok(stats.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_runs_to_completion() {
        let record = play_game(8, 99).unwrap();
        assert!(record.status.is_game_over());
        assert!(!record.history.is_empty());
        assert_eq!(record.history[0].player, PLAYER_ONE);
        assert_eq!(record.history[0].move_number, 1);
        for window in record.history.windows(2) {
            assert_eq!(window[1].move_number, window[0].move_number + 1);
        }
    }

    #[test]
    fn test_fixed_seed_reproduces_the_game() {
        let a = play_game(8, 42).unwrap();
        let b = play_game(8, 42).unwrap();
        assert_eq!(a.status, b.status);
        assert_eq!(a.history, b.history);
    }

    #[test]
    fn test_small_board_games_terminate() {
        for seed in 0..8 {
            let record = play_game(4, seed).unwrap();
            assert!(record.status.is_game_over());
        }
    }

    #[test]
    fn test_batch_counts_sum_to_games() {
        let stats = run_batch(&BatchConfig {
            games: 25,
            board_size: 6,
            seed: 7,
            threads: 1,
        })
        .unwrap();
        assert_eq!(stats.player_one_wins + stats.player_two_wins + stats.draws, 25);
        assert!(stats.total_moves > 0);
    }

    #[test]
    fn test_parallel_batch_matches_sequential() {
        let sequential = run_batch(&BatchConfig {
            games: 16,
            board_size: 6,
            seed: 11,
            threads: 1,
        })
        .unwrap();
        let parallel = run_batch(&BatchConfig {
            games: 16,
            board_size: 6,
            seed: 11,
            threads: 4,
        })
        .unwrap();
        assert_eq!(sequential.player_one_wins, parallel.player_one_wins);
        assert_eq!(sequential.player_two_wins, parallel.player_two_wins);
        assert_eq!(sequential.draws, parallel.draws);
        assert_eq!(sequential.total_moves, parallel.total_moves);
    }
}
