//! Full-depth minimax, plain and with alpha-beta pruning.
//!
//! Both evaluators return the absolute game value of `board`: +1 if O wins
//! under perfect play, -1 if X does, 0 for a forced draw. `maximizing` is
//! true when O is to move. The board is mutated in place and restored
//! before every return.

use ttt_core::{
    Board, Cell, Move, Player, Score, DRAW, INFINITY, O_WINS, X_WINS, is_game_over, is_winner,
};

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Evaluator invocations, root included
    pub nodes: u64,
    /// Deepest `depth` argument seen
    pub max_depth: u8,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn visit(&mut self, depth: u8) {
        self.nodes += 1;
        if depth > self.max_depth {
            self.max_depth = depth;
        }
    }
}

/// Score of a finished board, or `None` if play continues.
///
/// X's win is checked before O's and both before the full-board draw.
#[inline]
fn terminal_score(board: &Board) -> Option<Score> {
    if is_winner(board, Player::X) {
        return Some(X_WINS);
    }
    if is_winner(board, Player::O) {
        return Some(O_WINS);
    }
    if is_game_over(board) {
        return Some(DRAW);
    }
    None
}

#[inline]
fn mover(maximizing: bool) -> Player {
    if maximizing { Player::O } else { Player::X }
}

/// Exhaustive minimax. Visits every continuation of every reachable position.
pub fn minimax(board: &mut Board, depth: u8, maximizing: bool, stats: &mut SearchStats) -> Score {
    stats.visit(depth);

    if let Some(score) = terminal_score(board) {
        return score;
    }

    let player = mover(maximizing);
    let mut best = if maximizing { -INFINITY } else { INFINITY };

    for idx in 0..9 {
        if board.cells[idx] != Cell::Empty {
            continue;
        }
        let mv = Move::from_index(idx);
        board.make_move(mv, player);
        let score = minimax(board, depth + 1, !maximizing, stats);
        board.unmake_move(mv);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Minimax with alpha-beta pruning.
///
/// `alpha` is what O can already guarantee, `beta` what X can. Returns the
/// same value as [`minimax`] for every position; siblings are skipped once
/// `beta <= alpha`.
pub fn minimax_pruned(
    board: &mut Board,
    depth: u8,
    maximizing: bool,
    mut alpha: Score,
    mut beta: Score,
    stats: &mut SearchStats,
) -> Score {
    stats.visit(depth);

    if let Some(score) = terminal_score(board) {
        return score;
    }

    let player = mover(maximizing);
    let mut best = if maximizing { -INFINITY } else { INFINITY };

    for idx in 0..9 {
        if board.cells[idx] != Cell::Empty {
            continue;
        }
        let mv = Move::from_index(idx);
        board.make_move(mv, player);
        let score = minimax_pruned(board, depth + 1, !maximizing, alpha, beta, stats);
        board.unmake_move(mv);

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if beta <= alpha {
            break; // cutoff
        }
    }

    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
