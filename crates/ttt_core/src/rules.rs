//! Terminal-state detection.

use crate::{board::Board, types::*};

/// All eight winning lines as cell indices: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// True iff `player` fully occupies some row, column or diagonal.
pub fn is_winner(board: &Board, player: Player) -> bool {
    let cell = Cell::from(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| board.cells[i] == cell))
}

/// True iff the cell is empty. Coordinates must already be in range.
#[inline]
pub fn is_move_legal(board: &Board, row: u8, col: u8) -> bool {
    board.get(row, col) == Cell::Empty
}

/// True iff either side has won or the board is full.
pub fn is_game_over(board: &Board) -> bool {
    is_winner(board, Player::X) || is_winner(board, Player::O) || board.is_full()
}

/// Classifies a finished board. Returns `None` while the game is still going.
///
/// Checks X's win, then O's, then a full board, in the same order the
/// search base cases use.
pub fn outcome(board: &Board) -> Option<Outcome> {
    if is_winner(board, Player::X) {
        Some(Outcome::Win(Player::X))
    } else if is_winner(board, Player::O) {
        Some(Outcome::Win(Player::O))
    } else if board.is_full() {
        Some(Outcome::Draw)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
