use super::types::Mark;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicTacToeError {
    InvalidMove { index: usize, reason: InvalidMoveReason },
    NoMovesAvailable,
    NotPlayersTurn { expected: Mark, found: Mark },
    GameOver,
    EngineDisabled,
    InvalidBoard(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    OutOfRange,
    Occupied,
    NotOccupied,
}

impl std::fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMoveReason::OutOfRange => write!(f, "position out of bounds"),
            InvalidMoveReason::Occupied => write!(f, "cell is already marked"),
            InvalidMoveReason::NotOccupied => write!(f, "cell is not marked"),
        }
    }
}

impl std::fmt::Display for TicTacToeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TicTacToeError::InvalidMove { index, reason } => {
                write!(f, "Invalid move at index {}: {}", index, reason)
            }
            TicTacToeError::NoMovesAvailable => write!(f, "No moves available, the game is over"),
            TicTacToeError::NotPlayersTurn { expected, found } => {
                write!(f, "Not {}'s turn, {} is to move", found, expected)
            }
            TicTacToeError::GameOver => write!(f, "The game has ended"),
            TicTacToeError::EngineDisabled => {
                write!(f, "The engine does not play in a two-player game")
            }
            TicTacToeError::InvalidBoard(message) => write!(f, "Invalid board: {}", message),
        }
    }
}

impl std::error::Error for TicTacToeError {}
