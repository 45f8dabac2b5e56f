use crate::{board::Board, rules::is_game_over, types::*};

/// Empty cells in row-major order, returning a freshly allocated vector.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut out = Vec::with_capacity(9);
    legal_moves_into(board, &mut out);
    out
}

/// Empty cells in row-major order into the provided buffer, reusing it across calls.
///
/// This does not look at whether the game is already decided; a won board
/// with empty cells still yields moves. Use `playable_moves_into` for that.
pub fn legal_moves_into(board: &Board, out: &mut Vec<Move>) {
    out.clear();
    for (idx, &cell) in board.cells.iter().enumerate() {
        if cell == Cell::Empty {
            out.push(Move::from_index(idx));
        }
    }
}

/// Like `legal_moves_into`, but yields nothing once the game is over.
pub fn playable_moves_into(board: &Board, out: &mut Vec<Move>) {
    if is_game_over(board) {
        out.clear();
        return;
    }
    legal_moves_into(board, out);
}
