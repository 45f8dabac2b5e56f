//! Random Move Tic-Tac-Toe Engine
//!
//! A simple engine that selects moves uniformly at random from all empty cells.
//! Useful for:
//! - Baseline comparisons (a perfect engine must never lose to it)
//! - Exercising the match runner with varied games

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use ttt_core::{legal_moves_into, outcome, Board, Engine, Player, SearchResult};


/// A tic-tac-toe engine that plays random legal moves.
///
/// This engine provides no evaluation - it simply picks a random empty
/// cell. A seed makes its games reproducible.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, _to_move: Player) -> SearchResult {
        self.nodes = 0;

        if outcome(board).is_some() {
            return SearchResult::no_move();
        }

        let mut moves = Vec::with_capacity(9);
        legal_moves_into(board, &mut moves);

        self.nodes = 1;

        let best_move = moves.choose(&mut self.rng).copied();

        SearchResult {
            best_move,
            score: 0,
            nodes: self.nodes,
            max_depth: 1,
        }
    }

    fn name(&self) -> &str {
        "Random"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
