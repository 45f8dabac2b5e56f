use crate::{board::Board, rules::is_move_legal, types::*};

pub fn move_to_text(mv: Move) -> String {
    format!("{} {}", mv.row, mv.col)
}

/// Parses two whitespace-separated integers, e.g. `"1 2"`.
///
/// Only the shape is checked here; range and occupancy are `parse_move`'s job.
pub fn parse_coords(txt: &str) -> Option<(i64, i64)> {
    let mut parts = txt.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

/// Converts raw coordinates into a move if they are on the board.
pub fn coords_to_move(row: i64, col: i64) -> Option<Move> {
    if (0..3).contains(&row) && (0..3).contains(&col) {
        Some(Move::new(row as u8, col as u8))
    } else {
        None
    }
}

/// Parses `"row col"` and matches it against the board: `None` unless the
/// coordinates are in range and the cell is empty.
pub fn parse_move(board: &Board, txt: &str) -> Option<Move> {
    let (row, col) = parse_coords(txt)?;
    let mv = coords_to_move(row, col)?;
    if is_move_legal(board, mv.row, mv.col) {
        Some(mv)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_row_and_column() {
        assert_eq!(parse_coords("1 2"), Some((1, 2)));
        assert_eq!(parse_coords("  0   0 "), Some((0, 0)));
        assert_eq!(parse_coords("3 -1"), Some((3, -1)));
    }

    #[test]
    fn rejects_malformed_text() {
        assert_eq!(parse_coords(""), None);
        assert_eq!(parse_coords("1"), None);
        assert_eq!(parse_coords("a b"), None);
        assert_eq!(parse_coords("1 2 3"), None);
        assert_eq!(parse_coords("1,2"), None);
    }

    #[test]
    fn bounds_are_checked() {
        assert_eq!(coords_to_move(2, 2), Some(Move::new(2, 2)));
        assert_eq!(coords_to_move(3, 0), None);
        assert_eq!(coords_to_move(0, -1), None);
    }

    #[test]
    fn occupied_cells_do_not_parse() {
        let board = Board::from_rows(["X..", "...", "..."]);
        assert_eq!(parse_move(&board, "0 0"), None);
        assert_eq!(parse_move(&board, "0 1"), Some(Move::new(0, 1)));
        assert_eq!(move_to_text(Move::new(0, 1)), "0 1");
    }
}
