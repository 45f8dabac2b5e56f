use crate::types::*;

/// A 3x3 tic-tac-toe grid, stored row-major.
///
/// The board is plain data. It does not track whose turn it is and does not
/// check that moves alternate; the game loop and the search own that
/// discipline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    pub cells: [Cell; 9],
}

impl Board {
    /// Fresh board with every cell empty.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from three row strings, e.g. `["OO.", "...", "X.X"]`.
    ///
    /// `X`/`x` and `O`/`o` are marks, `.`, `_`, `-` and space are empty.
    /// Used by tests and diagnostics; panics on malformed layouts.
    pub fn from_rows(rows: [&str; 3]) -> Self {
        let mut board = Board::new();
        for (r, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.chars().collect();
            assert!(chars.len() == 3, "Invalid row layout: {:?}", row);
            for (c, ch) in chars.into_iter().enumerate() {
                board.cells[r * 3 + c] = match ch {
                    'X' | 'x' => Cell::X,
                    'O' | 'o' => Cell::O,
                    '.' | '_' | '-' | ' ' => Cell::Empty,
                    _ => panic!("Invalid cell char in layout: {}", ch),
                };
            }
        }
        board
    }

    #[inline]
    pub fn get(&self, row: u8, col: u8) -> Cell {
        self.cells[row as usize * 3 + col as usize]
    }

    #[inline]
    pub fn cell_at(&self, mv: Move) -> Cell {
        self.cells[mv.index()]
    }

    /// Writes `player`'s mark at (row, col) unconditionally.
    ///
    /// Callers validate bounds and emptiness first (see `is_move_legal`).
    #[inline]
    pub fn apply_move(&mut self, row: u8, col: u8, player: Player) {
        self.cells[row as usize * 3 + col as usize] = player.into();
    }

    #[inline]
    pub fn make_move(&mut self, mv: Move, player: Player) {
        self.cells[mv.index()] = player.into();
    }

    /// Clears a cell previously written by `make_move`.
    #[inline]
    pub fn unmake_move(&mut self, mv: Move) {
        self.cells[mv.index()] = Cell::Empty;
    }

    pub fn count(&self, player: Player) -> usize {
        let cell = Cell::from(player);
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Side to move under the usual "X moves first" convention.
    pub fn side_to_move(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..3u8 {
            writeln!(
                f,
                "{} | {} | {}",
                self.get(r, 0).symbol(),
                self.get(r, 1).symbol(),
                self.get(r, 2).symbol()
            )?;
            writeln!(f, "---------")?;
        }
        Ok(())
    }
}
