#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}
impl Player {
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    pub fn other(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Player::X => 0,
            Player::O => 1,
        }
    }
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }
    pub fn symbol(self) -> char {
        match self.player() {
            Some(p) => p.symbol(),
            None => ' ',
        }
    }
}

impl From<Player> for Cell {
    fn from(p: Player) -> Cell {
        match p {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: u8, // 0..3
    pub col: u8, // 0..3
}

impl Move {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / 3) as u8,
            col: (idx % 3) as u8,
        }
    }
    pub fn index(self) -> usize {
        self.row as usize * 3 + self.col as usize
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Game-theoretic value of a position. Positive favours O, negative favours X.
pub type Score = i32;

pub const X_WINS: Score = -1;
pub const DRAW: Score = 0;
pub const O_WINS: Score = 1;
/// Sentinel bound, strictly outside every real score.
pub const INFINITY: Score = 2;

/// Final result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win(Player),
    Draw,
}

impl Outcome {
    /// The score the search assigns to a board with this outcome.
    pub fn score(self) -> Score {
        match self {
            Outcome::Win(Player::X) => X_WINS,
            Outcome::Win(Player::O) => O_WINS,
            Outcome::Draw => DRAW,
        }
    }
}
