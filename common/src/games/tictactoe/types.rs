use std::fmt;

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// Score of a position from O's point of view.
pub type Score = i32;

pub const O_WIN_SCORE: Score = 1;
pub const DRAW_SCORE: Score = 0;
pub const X_WIN_SCORE: Score = -1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cell index on the board. The index is not range checked until the move is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move(usize);

impl Move {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn from_coords(row: usize, col: usize) -> Self {
        Self(row * BOARD_SIDE + col)
    }

    pub fn index(&self) -> usize {
        self.0
    }

    pub fn row(&self) -> usize {
        self.0 / BOARD_SIDE
    }

    pub fn col(&self) -> usize {
        self.0 % BOARD_SIDE
    }

    pub fn is_on_board(&self) -> bool {
        self.0 < CELL_COUNT
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell {} (row {}, column {})", self.0 + 1, self.row() + 1, self.col() + 1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    XWins,
    OWins,
    Draw,
    InProgress,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        *self != Outcome::InProgress
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::XWins => Some(Mark::X),
            Outcome::OWins => Some(Mark::O),
            Outcome::Draw | Outcome::InProgress => None,
        }
    }

    /// Terminal score without any depth adjustment. `None` while the game is running.
    pub fn score(&self) -> Option<Score> {
        match self {
            Outcome::OWins => Some(O_WIN_SCORE),
            Outcome::XWins => Some(X_WIN_SCORE),
            Outcome::Draw => Some(DRAW_SCORE),
            Outcome::InProgress => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::XWins => write!(f, "X wins"),
            Outcome::OWins => write!(f, "O wins"),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::InProgress => write!(f, "In progress"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; BOARD_SIDE],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [usize; BOARD_SIDE]) -> Self {
        Self { mark, cells }
    }

    pub fn start(&self) -> Move {
        Move::new(self.cells[0])
    }

    pub fn end(&self) -> Move {
        Move::new(self.cells[BOARD_SIDE - 1])
    }
}
