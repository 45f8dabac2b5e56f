pub mod board;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod rules;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use movegen::*;
pub use notation::*;
pub use perft::{count_games, perft};
pub use rules::*;
pub use types::*;

/// Fresh all-empty board.
pub fn new_board() -> Board {
    Board::new()
}

/// Unconditional in-place write; the caller has already checked bounds and
/// `is_move_legal`.
pub fn apply_move(board: &mut Board, row: u8, col: u8, player: Player) {
    board.apply_move(row, col, player);
}

// =============================================================================
// Engine trait, implemented by every tic-tac-toe engine (minimax, random)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if the game is already over)
    pub best_move: Option<Move>,
    /// Value of the chosen move: +1 favours O, -1 favours X
    pub score: Score,
    /// Number of positions evaluated
    pub nodes: u64,
    /// Deepest ply reached below the root moves
    pub max_depth: u8,
}

impl SearchResult {
    /// Result for a board with nothing left to play.
    pub fn no_move() -> Self {
        Self {
            best_move: None,
            score: 0,
            nodes: 0,
            max_depth: 0,
        }
    }
}

/// Trait that all tic-tac-toe engines implement.
///
/// This allows swapping between the exhaustive searchers and the random
/// baseline in the match runner and the CLI.
pub trait Engine: Send {
    /// Picks a move for `to_move` on `board`.
    ///
    /// # Returns
    /// SearchResult containing best move, score, and statistics
    fn search(&mut self, board: &Board, to_move: Player) -> SearchResult;

    /// Returns the engine's name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
