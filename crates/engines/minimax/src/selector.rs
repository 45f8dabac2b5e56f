//! Root move selection on top of the two evaluators.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use ttt_core::{is_game_over, is_move_legal, Board, Move, Player, Score, INFINITY};

use crate::error::SearchError;
use crate::search::{minimax, minimax_pruned, SearchStats};

/// Which evaluator drives the root search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchVariant {
    /// Exhaustive minimax, no pruning
    Plain,
    /// Minimax with alpha-beta pruning
    #[default]
    #[serde(alias = "alpha-beta", alias = "pruned")]
    AlphaBeta,
}

impl SearchVariant {
    pub fn name(self) -> &'static str {
        match self {
            SearchVariant::Plain => "plain",
            SearchVariant::AlphaBeta => "alphabeta",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "plain" | "minimax" | "simple" | "1" => Some(SearchVariant::Plain),
            "alphabeta" | "alpha-beta" | "pruned" | "optimized" | "2" => {
                Some(SearchVariant::AlphaBeta)
            }
            _ => None,
        }
    }

    /// Scores `board` with the opponent of `mover` to move next.
    fn evaluate_reply(self, board: &mut Board, mover: Player, stats: &mut SearchStats) -> Score {
        // O just moved means X (the minimizer) replies, and vice versa.
        let maximizing = mover == Player::X;
        match self {
            SearchVariant::Plain => minimax(board, 0, maximizing, stats),
            SearchVariant::AlphaBeta => {
                minimax_pruned(board, 0, maximizing, -INFINITY, INFINITY, stats)
            }
        }
    }
}

/// Outcome of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestMove {
    pub mv: Move,
    /// Game value after playing `mv`: +1 favours O, -1 favours X
    pub score: Score,
    pub stats: SearchStats,
}

/// Best move for O (the maximizer).
pub fn find_best_move(board: &Board, variant: SearchVariant) -> Result<Move, SearchError> {
    find_best_move_for(board, Player::O, variant)
}

/// Best move for `player`, ties resolved to the first move in row-major order.
pub fn find_best_move_for(
    board: &Board,
    player: Player,
    variant: SearchVariant,
) -> Result<Move, SearchError> {
    let mut stats = SearchStats::new();
    search_root(board, player, variant, &mut stats).map(|best| best.mv)
}

/// Root search: tries every empty cell for `player` and keeps the strictly
/// best score, accumulating node counts into `stats`.
pub fn search_root(
    board: &Board,
    player: Player,
    variant: SearchVariant,
    stats: &mut SearchStats,
) -> Result<BestMove, SearchError> {
    if is_game_over(board) {
        return Err(SearchError::NoLegalMove);
    }

    let mut tmp = *board;
    let maximizing = player == Player::O;
    let mut best: Option<(Move, Score)> = None;
    let mut best_score = if maximizing { -INFINITY } else { INFINITY };

    for row in 0..3u8 {
        for col in 0..3u8 {
            if !is_move_legal(&tmp, row, col) {
                continue;
            }
            let mv = Move::new(row, col);
            tmp.make_move(mv, player);
            let score = variant.evaluate_reply(&mut tmp, player, stats);
            tmp.unmake_move(mv);

            trace!(%mv, score, "root move scored");

            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improves {
                best_score = score;
                best = Some((mv, score));
            }
        }
    }

    let (mv, score) = best.ok_or(SearchError::NoLegalMove)?;
    debug!(
        %mv,
        score,
        nodes = stats.nodes,
        variant = variant.name(),
        "best move for {}",
        player
    );
    Ok(BestMove {
        mv,
        score,
        stats: *stats,
    })
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod selector_tests;
