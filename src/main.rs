//! # Othello Arena - Random Playout Viewer
//!
//! Plays a single random-vs-random game on the console, rendering the board
//! after every turn with the legal moves of the player about to move
//! highlighted. The seed is printed so any game can be replayed exactly.
//!
//! ## Usage
//! Run with `cargo run --release -- --board-size 8 --seed 42`.

use clap::Parser;
use colored::Colorize;
use othello::agent::RandomAgent;
use othello::{GameStatus, OthelloError, OthelloState, PLAYER_ONE, PLAYER_TWO};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board size (minimum 4)
    #[arg(long, default_value_t = 8)]
    board_size: usize,

    /// Seed for the agents; drawn from OS entropy if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Do not highlight the legal moves of the player to move
    #[arg(long, default_value_t = false, action = clap::ArgAction::SetTrue)]
    no_highlight: bool,
}

fn player_name(player: i32) -> &'static str {
    if player == PLAYER_ONE {
        "Player 1"
    } else {
        "Player 2"
    }
}

fn main() -> Result<(), OthelloError> {
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let highlight = !args.no_highlight;

    let mut agent = RandomAgent::new(seed);
    let mut state = OthelloState::new(args.board_size);
    let mut player = PLAYER_ONE;

    println!("Othello Arena - Random Playout");
    println!("Board: {}x{}  Seed: {}", state.size(), state.size(), seed);
    println!();
    println!("{}", state.render(player, highlight)?);

    let status = loop {
        match agent.pick_move(&state, player)? {
            Some(mv) => {
                println!("{} plays {}", player_name(player), mv);
                state.apply_move(&mv, player);
            }
            None => println!("{} passes", player_name(player)),
        }
        player = -player;
        println!("{}", state.render(player, highlight)?);

        let status = state.game_status(player)?;
        if status.is_game_over() {
            break status;
        }
    };

    let scores = state.scores();
    println!(
        "Final score: {} {} - {} {}",
        player_name(PLAYER_ONE),
        scores.get(PLAYER_ONE),
        player_name(PLAYER_TWO),
        scores.get(PLAYER_TWO)
    );
    match status {
        GameStatus::Win(winner) => {
            println!("{}", format!("{} won!", player_name(winner)).green().bold());
        }
        GameStatus::Draw => println!("{}", "Game draw!".yellow().bold()),
        GameStatus::InProgress => {}
    }
    Ok(())
}
