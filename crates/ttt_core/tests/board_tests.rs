//! Tests for the board value type and its public helpers
//!
//! Covers:
//! - Construction and layouts
//! - Apply/unmake discipline
//! - Move generation order
//! - Text rendering

use ttt_core::{
    Board, Cell, Move, Player, apply_move, is_game_over, is_move_legal, legal_moves, new_board,
    playable_moves_into,
};

// =============================================================================
// Construction
// =============================================================================

#[test]
fn new_board_is_empty() {
    let board = new_board();
    assert!(board.cells.iter().all(|&c| c == Cell::Empty));
    assert_eq!(board.empty_count(), 9);
    assert!(!board.is_full());
    assert_eq!(board.side_to_move(), Player::X);
}

#[test]
fn layout_places_marks_row_major() {
    let board = Board::from_rows(["X.O", "...", "..x"]);
    assert_eq!(board.get(0, 0), Cell::X);
    assert_eq!(board.get(0, 2), Cell::O);
    assert_eq!(board.get(2, 2), Cell::X);
    assert_eq!(board.count(Player::X), 2);
    assert_eq!(board.count(Player::O), 1);
    assert_eq!(board.side_to_move(), Player::O);
}

#[test]
#[should_panic(expected = "Invalid cell char")]
fn layout_rejects_unknown_chars() {
    let _ = Board::from_rows(["X?O", "...", "..."]);
}

// =============================================================================
// Apply / unmake
// =============================================================================

#[test]
fn apply_then_unmake_restores_board() {
    let original = Board::from_rows(["X..", ".O.", "..."]);
    let mut board = original;
    board.make_move(Move::new(2, 1), Player::X);
    assert_eq!(board.get(2, 1), Cell::X);
    board.unmake_move(Move::new(2, 1));
    assert_eq!(board, original);
}

#[test]
fn free_function_apply_move_writes_mark() {
    let mut board = new_board();
    assert!(is_move_legal(&board, 2, 0));
    apply_move(&mut board, 2, 0, Player::O);
    assert_eq!(board.get(2, 0), Cell::O);
    assert!(!is_move_legal(&board, 2, 0));
}

// =============================================================================
// Move generation
// =============================================================================

#[test]
fn legal_moves_are_row_major() {
    let board = Board::from_rows(["X.O", ".X.", "O.."]);
    let moves = legal_moves(&board);
    let expected = vec![
        Move::new(0, 1),
        Move::new(1, 0),
        Move::new(1, 2),
        Move::new(2, 1),
        Move::new(2, 2),
    ];
    assert_eq!(moves, expected);
}

#[test]
fn playable_moves_empty_once_game_is_won() {
    let board = Board::from_rows(["OOO", "XX.", "..."]);
    assert!(is_game_over(&board));
    assert_eq!(legal_moves(&board).len(), 4);

    let mut buf = vec![Move::new(0, 0)];
    playable_moves_into(&board, &mut buf);
    assert!(buf.is_empty());
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn display_matches_grid_format() {
    let board = Board::from_rows(["X.O", "...", ".X."]);
    let text = board.to_string();
    let expected = "X |   | O\n---------\n  |   |  \n---------\n  | X |  \n---------\n";
    assert_eq!(text, expected);
}
