//! # Othello Arena - Batch Benchmark Tool
//!
//! Simulates a batch of random-vs-random games and reports win/draw counts
//! and timing. One worker runs the games sequentially; more workers fan them
//! out over a rayon pool with identical tallies for a fixed base seed.

use clap::Parser;
use colored::Colorize;
use othello::arena::{run_batch, BatchConfig, BatchStats};
use othello::OthelloError;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of games to simulate
    #[arg(long, default_value_t = 100)]
    games: usize,

    /// Board size (minimum 4)
    #[arg(long, default_value_t = 8)]
    board_size: usize,

    /// Base seed; game i plays with seed + i
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Worker threads (0 = one per CPU core, 1 = sequential)
    #[arg(long, default_value_t = 1)]
    threads: usize,
}

fn main() -> Result<(), OthelloError> {
    let args = Args::parse();
    let threads = if args.threads == 0 {
        num_cpus::get()
    } else {
        args.threads
    };

    println!("Othello Arena - Random Agent Benchmark");
    println!("======================================");
    println!("Games: {}", args.games);
    println!("Board: {}x{}", args.board_size, args.board_size);
    println!("Base seed: {}", args.seed);
    println!("Threads: {}", threads);
    println!("--------------------------------------");

    #[cfg(debug_assertions)]
    println!("WARNING: Running in debug mode. Timings will be significantly slower.\nUse --release for accurate benchmarks.\n");

    let stats = run_batch(&BatchConfig {
        games: args.games,
        board_size: args.board_size,
        seed: args.seed,
        threads,
    })?;

    print_stats(&stats, args.games);
    Ok(())
}

fn print_stats(stats: &BatchStats, games: usize) {
    let secs = stats.elapsed.as_secs_f64();
    println!(
        "Total time taken for {} games: {:.2}s",
        games, secs
    );
    println!("================");
    println!("{}", "Final scores:".bold());
    println!("  Player 1 wins: {}", stats.player_one_wins);
    println!("  Player 2 wins: {}", stats.player_two_wins);
    println!("  Draws: {}", stats.draws);
    println!("  Total moves: {}", stats.total_moves);
    println!("  Games/sec: {:.0}", games as f64 / secs);
}
