use crate::{board::Board, movegen::playable_moves_into, rules::is_game_over, types::*};

/// Counts move sequences of exactly `depth` plies from `board`.
///
/// Play never continues past a finished game, so lines that end early
/// contribute nothing at greater depths.
pub fn perft(board: &mut Board, to_move: Player, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(board: &mut Board, to_move: Player, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let (buf, rest) = layers
            .split_first_mut()
            .expect("perft requires one buffer per remaining ply");

        playable_moves_into(board, buf);

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            board.make_move(mv, to_move);
            nodes += inner(board, to_move.other(), depth - 1, rest);
            board.unmake_move(mv);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(9); depth as usize];
    inner(board, to_move, depth, &mut layers[..])
}

/// Counts every complete game (sequence of moves ending in a terminal board).
pub fn count_games(board: &mut Board, to_move: Player) -> u64 {
    if is_game_over(board) {
        return 1;
    }
    let mut games = 0u64;
    for idx in 0..9 {
        let mv = Move::from_index(idx);
        if board.cell_at(mv) != Cell::Empty {
            continue;
        }
        board.make_move(mv, to_move);
        games += count_games(board, to_move.other());
        board.unmake_move(mv);
    }
    games
}
