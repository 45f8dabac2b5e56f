//! Alpha-beta must agree with plain minimax on every reachable position.

use std::collections::HashSet;

use rayon::prelude::*;

use minimax_engine::{find_best_move_for, minimax, minimax_pruned, SearchStats, SearchVariant};
use ttt_core::{is_game_over, is_winner, legal_moves, Board, Player, INFINITY};

/// Every (board, side to move) pair reachable by alternating play from the
/// empty board, for either first player.
fn reachable_positions() -> Vec<(Board, Player)> {
    fn walk(board: &mut Board, to_move: Player, seen: &mut HashSet<(Board, Player)>) {
        if !seen.insert((*board, to_move)) || is_game_over(board) {
            return;
        }
        for mv in legal_moves(board) {
            board.make_move(mv, to_move);
            walk(board, to_move.other(), seen);
            board.unmake_move(mv);
        }
    }

    let mut seen = HashSet::new();
    for first in Player::ALL {
        walk(&mut Board::new(), first, &mut seen);
    }
    seen.into_iter().collect()
}

#[test]
fn pruning_never_changes_the_score() {
    let positions = reachable_positions();
    assert!(positions.len() > 5_000);

    positions.par_iter().for_each(|&(board, to_move)| {
        let maximizing = to_move == Player::O;
        let mut a = board;
        let mut b = board;
        let mut full = SearchStats::new();
        let mut cut = SearchStats::new();
        let plain = minimax(&mut a, 0, maximizing, &mut full);
        let pruned = minimax_pruned(&mut b, 0, maximizing, -INFINITY, INFINITY, &mut cut);

        assert_eq!(plain, pruned, "score mismatch on\n{}", board);
        assert!(cut.nodes <= full.nodes);
        assert_eq!(a, board);
        assert_eq!(b, board);
    });
}

#[test]
fn reachable_boards_never_have_two_winners() {
    for (board, _) in reachable_positions() {
        assert!(
            !(is_winner(&board, Player::X) && is_winner(&board, Player::O)),
            "two winners on\n{}",
            board
        );
    }
}

#[test]
fn both_variants_choose_the_same_move() {
    let positions: Vec<_> = reachable_positions()
        .into_iter()
        .filter(|(board, _)| !is_game_over(board))
        .collect();

    positions.par_iter().for_each(|&(board, to_move)| {
        let plain = find_best_move_for(&board, to_move, SearchVariant::Plain);
        let pruned = find_best_move_for(&board, to_move, SearchVariant::AlphaBeta);
        assert_eq!(plain, pruned, "move mismatch on\n{}", board);
    });
}
