//! # Game Implementations Module
//!
//! This module contains the Othello rules engine. The engine exposes a
//! consistent surface for agents and drivers:
//! - Move generation and validation
//! - State transitions and disc-flip propagation
//! - Terminal state detection and winner determination
//! - Board representation and score tracking

pub mod othello;
