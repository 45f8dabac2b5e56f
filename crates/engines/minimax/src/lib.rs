//! Minimax Tic-Tac-Toe Engine
//!
//! Perfect play by searching the game tree to the end, with or without
//! alpha-beta pruning. Both variants pick the same move for every position.

mod error;
pub mod search;
mod selector;

use ttt_core::{Board, Engine, Player, SearchResult};

pub use error::SearchError;
pub use search::{minimax, minimax_pruned, SearchStats};
pub use selector::{find_best_move, find_best_move_for, search_root, BestMove, SearchVariant};

/// Tic-tac-toe engine backed by exhaustive minimax.
///
/// This engine uses:
/// - Full-depth search, no evaluation heuristic
/// - Optional alpha-beta pruning (`SearchVariant`)
/// - First-found tie-breaking in row-major order
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    variant: SearchVariant,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new(variant: SearchVariant) -> Self {
        Self { variant, nodes: 0 }
    }

    pub fn plain() -> Self {
        Self::new(SearchVariant::Plain)
    }

    pub fn alpha_beta() -> Self {
        Self::new(SearchVariant::AlphaBeta)
    }

    pub fn variant(&self) -> SearchVariant {
        self.variant
    }

    /// Nodes searched since the last `new_game`.
    pub fn total_nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &Board, to_move: Player) -> SearchResult {
        let mut stats = SearchStats::new();
        match search_root(board, to_move, self.variant, &mut stats) {
            Ok(best) => {
                self.nodes += best.stats.nodes;
                SearchResult {
                    best_move: Some(best.mv),
                    score: best.score,
                    nodes: best.stats.nodes,
                    max_depth: best.stats.max_depth,
                }
            }
            Err(SearchError::NoLegalMove) => SearchResult::no_move(),
        }
    }

    fn name(&self) -> &str {
        match self.variant {
            SearchVariant::Plain => "Minimax",
            SearchVariant::AlphaBeta => "Minimax (alpha-beta)",
        }
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
