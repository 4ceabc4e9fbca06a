use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use super::error::{InvalidMoveReason, TicTacToeError};
use super::types::{BOARD_SIDE, CELL_COUNT, Mark, Move, Outcome, WinningLine};
use super::win_detector::{LINES, check_win, check_win_with_line};

/// 3x3 grid stored row-major. The player to move is derived from the mark counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    /// Fails when X does not have the same number of marks as O, or exactly one more,
    /// or when both players have completed a line.
    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Result<Self, TicTacToeError> {
        let board = Self { cells };
        let x_count = board.count(Mark::X);
        let o_count = board.count(Mark::O);
        if x_count < o_count || x_count - o_count > 1 {
            return Err(TicTacToeError::InvalidBoard(format!(
                "X has {} marks and O has {}, X must have as many marks as O or one more",
                x_count, o_count
            )));
        }

        let has_line = |mark: Mark| {
            LINES
                .iter()
                .any(|line| line.iter().all(|&index| cells[index] == mark))
        };
        if has_line(Mark::X) && has_line(Mark::O) {
            return Err(TicTacToeError::InvalidBoard(
                "both X and O have a completed line".to_string(),
            ));
        }
        Ok(board)
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn current_mark(&self) -> Mark {
        if self.count(Mark::X) == self.count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        }
    }

    fn last_mover(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Empty cells in ascending index order.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Mark::Empty)
            .map(|(index, _)| Move::new(index))
            .collect()
    }

    pub fn is_valid_move(&self, mv: Move) -> bool {
        self.get(mv.index()) == Some(Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    fn check_free(&self, mv: Move) -> Result<(), TicTacToeError> {
        let reason = match self.get(mv.index()) {
            Some(Mark::Empty) => return Ok(()),
            None => InvalidMoveReason::OutOfRange,
            Some(_) => InvalidMoveReason::Occupied,
        };
        Err(TicTacToeError::InvalidMove {
            index: mv.index(),
            reason,
        })
    }

    pub fn apply(&mut self, mv: Move, player: Mark) -> Result<(), TicTacToeError> {
        self.check_free(mv)?;

        let expected = self.current_mark();
        if player != expected {
            return Err(TicTacToeError::NotPlayersTurn {
                expected,
                found: player,
            });
        }

        self.cells[mv.index()] = player;
        Ok(())
    }

    /// Clears a cell marked by the player who moved last.
    pub fn undo(&mut self, mv: Move) -> Result<(), TicTacToeError> {
        let mark = match self.get(mv.index()) {
            None => {
                return Err(TicTacToeError::InvalidMove {
                    index: mv.index(),
                    reason: InvalidMoveReason::OutOfRange,
                });
            }
            Some(Mark::Empty) => {
                return Err(TicTacToeError::InvalidMove {
                    index: mv.index(),
                    reason: InvalidMoveReason::NotOccupied,
                });
            }
            Some(mark) => mark,
        };

        let expected = self.last_mover();
        if mark != expected {
            return Err(TicTacToeError::NotPlayersTurn {
                expected,
                found: mark,
            });
        }

        self.cells[mv.index()] = Mark::Empty;
        Ok(())
    }

    /// Places the current player's mark until the returned guard is dropped.
    /// Fails like `apply` on an occupied or off-board cell, leaving the board untouched.
    pub(crate) fn simulate(&mut self, mv: Move) -> Result<SimulatedMove<'_>, TicTacToeError> {
        self.check_free(mv)?;
        let mark = self.current_mark();
        self.cells[mv.index()] = mark;
        Ok(SimulatedMove { board: self, mv })
    }

    pub fn outcome(&self) -> Outcome {
        if let Some(winner) = check_win(&self.cells) {
            return match winner {
                Mark::X => Outcome::XWins,
                Mark::O => Outcome::OWins,
                Mark::Empty => unreachable!(),
            };
        }

        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.cells)
    }
}

/// Crate-private so nothing outside the search can apply extra moves through it.
pub(crate) struct SimulatedMove<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl Deref for SimulatedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for SimulatedMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for SimulatedMove<'_> {
    fn drop(&mut self) {
        self.board.cells[self.mv.index()] = Mark::Empty;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(BOARD_SIDE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = cells.iter().map(|cell| cell.to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Parses nine cells written as `X`, `O` and `.` (or `-`, `_`). Whitespace, `/` and `|` are ignored.
impl FromStr for Board {
    type Err = TicTacToeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Mark::Empty; CELL_COUNT];
        let mut count = 0;

        for ch in s.chars() {
            let mark = match ch {
                'X' | 'x' => Mark::X,
                'O' | 'o' => Mark::O,
                '.' | '-' | '_' => Mark::Empty,
                c if c.is_whitespace() || c == '/' || c == '|' => continue,
                other => {
                    return Err(TicTacToeError::InvalidBoard(format!(
                        "unexpected character '{}'",
                        other
                    )));
                }
            };
            if count == CELL_COUNT {
                return Err(TicTacToeError::InvalidBoard(format!(
                    "expected {} cells, got more",
                    CELL_COUNT
                )));
            }
            cells[count] = mark;
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(TicTacToeError::InvalidBoard(format!(
                "expected {} cells, got {}",
                CELL_COUNT, count
            )));
        }

        Board::from_cells(cells)
    }
}
