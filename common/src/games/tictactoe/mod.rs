mod board;
mod error;
mod game_state;
mod minimax;
mod settings;
mod types;
mod win_detector;

pub use board::Board;
pub use error::{InvalidMoveReason, TicTacToeError};
pub use game_state::{AI_MARK, HUMAN_MARK, TicTacToeGameState};
pub use minimax::{SearchResult, best_move, search};
pub use settings::SearchSettings;
pub use types::{
    BOARD_SIDE, CELL_COUNT, DRAW_SCORE, Mark, Move, O_WIN_SCORE, Outcome, Score, WinningLine,
    X_WIN_SCORE,
};
pub use win_detector::{LINES, check_win, check_win_with_line};
