//! Match Runner for tic-tac-toe engines
//!
//! This crate provides infrastructure for:
//! - Running matches between engines, alternating who moves first
//! - Recording every game and saving reports as JSON
//!
//! # Usage
//!
//! ```bash
//! # Perfect play against the random baseline
//! cargo run -p tictactoe -- match alphabeta random --games 100
//! ```

mod match_runner;
mod results;

pub use match_runner::*;
pub use results::*;
