//! Games driven by the move selector never end in a loss for O.

use minimax_engine::{find_best_move, find_best_move_for, MinimaxEngine, SearchError, SearchVariant};
use ttt_core::{
    is_game_over, is_winner, legal_moves, outcome, Board, Engine, Outcome, Player,
};

const VARIANTS: [SearchVariant; 2] = [SearchVariant::Plain, SearchVariant::AlphaBeta];

fn assert_single_winner(board: &Board) {
    assert!(
        !(is_winner(board, Player::X) && is_winner(board, Player::O)),
        "both sides won on\n{}",
        board
    );
}

/// Both sides choose with the selector until the game ends.
fn perfect_game(first: Player, variant: SearchVariant) -> Board {
    let mut board = Board::new();
    let mut to_move = first;
    while !is_game_over(&board) {
        let mv = find_best_move_for(&board, to_move, variant).unwrap();
        board.apply_move(mv.row, mv.col, to_move);
        assert_single_winner(&board);
        to_move = to_move.other();
    }
    board
}

#[test]
fn perfect_play_never_loses_as_o() {
    for variant in VARIANTS {
        for first in Player::ALL {
            let board = perfect_game(first, variant);
            assert_ne!(outcome(&board), Some(Outcome::Win(Player::X)));
            assert_eq!(outcome(&board), Some(Outcome::Draw));
        }
    }
}

/// O answers every possible X line with the selector. X must never win.
fn o_survives_all_replies(board: &mut Board, variant: SearchVariant) {
    if is_game_over(board) {
        assert!(!is_winner(board, Player::X), "X beat the selector:\n{}", board);
        return;
    }
    for mv in legal_moves(board) {
        board.make_move(mv, Player::X);
        assert_single_winner(board);
        if is_game_over(board) {
            assert!(!is_winner(board, Player::X), "X beat the selector:\n{}", board);
        } else {
            let reply = find_best_move(board, variant).unwrap();
            board.make_move(reply, Player::O);
            assert_single_winner(board);
            o_survives_all_replies(board, variant);
            board.unmake_move(reply);
        }
        board.unmake_move(mv);
    }
}

#[test]
fn o_never_loses_to_any_x_strategy() {
    let mut board = Board::new();
    o_survives_all_replies(&mut board, SearchVariant::AlphaBeta);
    assert_eq!(board, Board::new());
}

#[test]
fn o_moving_first_never_loses() {
    let mut board = Board::new();
    let opening = find_best_move(&board, SearchVariant::AlphaBeta).unwrap();
    board.make_move(opening, Player::O);
    o_survives_all_replies(&mut board, SearchVariant::AlphaBeta);
}

#[test]
fn engine_reports_no_move_on_finished_board() {
    let board = Board::from_rows(["OOO", "XX.", "X.."]);
    let mut engine = MinimaxEngine::alpha_beta();
    let result = engine.search(&board, Player::X);
    assert!(result.best_move.is_none());
    assert_eq!(
        find_best_move(&board, SearchVariant::Plain),
        Err(SearchError::NoLegalMove)
    );
}

#[test]
fn engine_accumulates_nodes_until_new_game() {
    let mut engine = MinimaxEngine::plain();
    let board = Board::from_rows(["X..", "...", "..."]);
    let result = engine.search(&board, Player::O);
    assert_eq!(result.best_move, Some(ttt_core::Move::new(1, 1)));
    assert_eq!(result.score, 0);
    assert!(result.nodes > 0);
    assert_eq!(engine.total_nodes(), result.nodes);

    engine.new_game();
    assert_eq!(engine.total_nodes(), 0);
    assert_eq!(engine.name(), "Minimax");
}
