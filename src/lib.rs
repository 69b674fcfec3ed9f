//! # Othello Arena
//!
//! An Othello (Reversi) rules engine with a random-move agent and a batch
//! game simulator.
//!
//! The engine ([`games::othello::OthelloState`]) owns the board and the live
//! disc counts and exposes move generation, move application with
//! disc-flipping, termination detection, and text rendering. Everything else
//! is thin glue on top of it: [`agent::RandomAgent`] picks uniformly random
//! legal moves from a seeded generator, and [`arena`] drives complete games
//! and aggregates win/draw statistics across batches, sequentially or over a
//! rayon pool.
//!
//! The engine performs no I/O and is strictly single-threaded; a fixed seed
//! reproduces a full game move-for-move.

pub mod agent;
pub mod arena;
pub mod games;

pub use games::othello::{
    opponent, GameStatus, OthelloError, OthelloMove, OthelloState, ScoreTally, PLAYER_ONE,
    PLAYER_TWO,
};
