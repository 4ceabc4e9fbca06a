use super::board::Board;
use super::error::TicTacToeError;
use super::minimax::{SearchResult, search};
use super::settings::SearchSettings;
use super::types::{Mark, Move, Outcome};

pub const HUMAN_MARK: Mark = Mark::X;
pub const AI_MARK: Mark = Mark::O;

/// One game of a human playing X against the engine playing O, or of two humans
/// taking turns when the engine is disabled.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    last_move: Option<Move>,
    settings: SearchSettings,
    engine_enabled: bool,
}

impl TicTacToeGameState {
    pub fn new(settings: SearchSettings) -> Self {
        Self {
            board: Board::new(),
            last_move: None,
            settings,
            engine_enabled: true,
        }
    }

    /// Both marks are placed through `place_mark`; the engine only gives hints.
    pub fn new_two_players(settings: SearchSettings) -> Self {
        Self {
            engine_enabled: false,
            ..Self::new(settings)
        }
    }

    pub fn restart(&mut self) {
        self.board = Board::new();
        self.last_move = None;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    pub fn engine_enabled(&self) -> bool {
        self.engine_enabled
    }

    /// The mark the next `place_mark` call places.
    pub fn human_mark(&self) -> Mark {
        if self.engine_enabled {
            HUMAN_MARK
        } else {
            self.board.current_mark()
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    pub fn move_count(&self) -> usize {
        self.board.count(Mark::X) + self.board.count(Mark::O)
    }

    pub fn place_mark(&mut self, mv: Move) -> Result<Outcome, TicTacToeError> {
        self.place(mv, self.human_mark())
    }

    /// Searches for O's reply and plays it.
    pub fn ai_move(&mut self) -> Result<SearchResult, TicTacToeError> {
        if self.outcome().is_terminal() {
            return Err(TicTacToeError::GameOver);
        }
        if !self.engine_enabled {
            return Err(TicTacToeError::EngineDisabled);
        }
        let result = search(&self.board, AI_MARK, &self.settings)?;
        self.place(result.best_move, AI_MARK)?;
        Ok(result)
    }

    /// The move the engine would play for the human to move, without playing it.
    pub fn hint(&self) -> Result<SearchResult, TicTacToeError> {
        if self.outcome().is_terminal() {
            return Err(TicTacToeError::GameOver);
        }
        search(&self.board, self.human_mark(), &self.settings)
    }

    fn place(&mut self, mv: Move, mark: Mark) -> Result<Outcome, TicTacToeError> {
        if self.outcome().is_terminal() {
            return Err(TicTacToeError::GameOver);
        }

        self.board.apply(mv, mark)?;
        self.last_move = Some(mv);
        Ok(self.board.outcome())
    }
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new(SearchSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::error::InvalidMoveReason;

    #[test]
    fn human_and_ai_alternate() {
        let mut state = TicTacToeGameState::default();
        assert_eq!(state.place_mark(Move::new(4)).unwrap(), Outcome::InProgress);
        let reply = state.ai_move().unwrap();
        assert_eq!(state.board().get(reply.best_move.index()), Some(Mark::O));
        assert_eq!(state.last_move(), Some(reply.best_move));
        assert_eq!(state.move_count(), 2);
    }

    #[test]
    fn human_cannot_move_twice() {
        let mut state = TicTacToeGameState::default();
        state.place_mark(Move::new(0)).unwrap();
        assert_eq!(
            state.place_mark(Move::new(1)),
            Err(TicTacToeError::NotPlayersTurn {
                expected: Mark::O,
                found: Mark::X
            })
        );
    }

    #[test]
    fn occupied_cell_is_reported() {
        let mut state = TicTacToeGameState::default();
        state.place_mark(Move::new(0)).unwrap();
        state.ai_move().unwrap();
        let taken = state.last_move().unwrap();
        assert_eq!(
            state.place_mark(taken),
            Err(TicTacToeError::InvalidMove {
                index: taken.index(),
                reason: InvalidMoveReason::Occupied
            })
        );
    }

    fn quick_win_state() -> TicTacToeGameState {
        TicTacToeGameState::new(SearchSettings {
            pruning: true,
            depth_weighting: true,
        })
    }

    #[test]
    fn ai_punishes_a_blunder() {
        let mut state = quick_win_state();
        // X: 0, O: 4 (engine), X: 1, O must block 2, X: 7 leaves the 2-4-6 diagonal open
        state.place_mark(Move::new(0)).unwrap();
        assert_eq!(state.ai_move().unwrap().best_move, Move::new(4));
        state.place_mark(Move::new(1)).unwrap();
        assert_eq!(state.ai_move().unwrap().best_move, Move::new(2));
        state.place_mark(Move::new(7)).unwrap();
        let win = state.ai_move().unwrap();
        assert_eq!(win.best_move, Move::new(6));
        assert_eq!(state.outcome(), Outcome::OWins);
    }

    #[test]
    fn finished_game_refuses_moves_until_restart() {
        let mut state = quick_win_state();
        for mv in [0, 1, 7] {
            state.place_mark(Move::new(mv)).unwrap();
            state.ai_move().unwrap();
        }
        assert!(state.outcome().is_terminal());
        assert_eq!(state.place_mark(Move::new(8)), Err(TicTacToeError::GameOver));
        assert_eq!(state.ai_move(), Err(TicTacToeError::GameOver));
        assert_eq!(state.hint(), Err(TicTacToeError::GameOver));

        state.restart();
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.last_move(), None);
    }

    #[test]
    fn hint_does_not_change_the_board() {
        let state = TicTacToeGameState::default();
        let before = *state.board();
        let hint = state.hint().unwrap();
        assert!(state.board().is_valid_move(hint.best_move));
        assert_eq!(*state.board(), before);
    }

    #[test]
    fn two_players_alternate_marks() {
        let mut state = TicTacToeGameState::new_two_players(SearchSettings::default());
        assert!(!state.engine_enabled());
        assert_eq!(state.human_mark(), Mark::X);
        state.place_mark(Move::new(4)).unwrap();
        assert_eq!(state.human_mark(), Mark::O);
        state.place_mark(Move::new(0)).unwrap();
        assert_eq!(state.board().get(4), Some(Mark::X));
        assert_eq!(state.board().get(0), Some(Mark::O));
        assert_eq!(state.human_mark(), Mark::X);
    }

    #[test]
    fn two_players_game_can_be_won_by_o() {
        let mut state = TicTacToeGameState::new_two_players(SearchSettings::default());
        for mv in [0, 2, 1, 4, 8] {
            assert_eq!(state.place_mark(Move::new(mv)).unwrap(), Outcome::InProgress);
        }
        assert_eq!(state.place_mark(Move::new(6)).unwrap(), Outcome::OWins);
        assert_eq!(state.place_mark(Move::new(3)), Err(TicTacToeError::GameOver));
    }

    #[test]
    fn two_players_mode_never_runs_the_engine() {
        let mut state = TicTacToeGameState::new_two_players(SearchSettings::default());
        state.place_mark(Move::new(0)).unwrap();
        assert_eq!(state.ai_move(), Err(TicTacToeError::EngineDisabled));
        assert_eq!(state.move_count(), 1);
    }

    #[test]
    fn hint_is_for_the_mark_to_move() {
        let mut state = TicTacToeGameState::new_two_players(SearchSettings::default());
        for mv in [0, 4, 1] {
            state.place_mark(Move::new(mv)).unwrap();
        }
        // O must block the top row
        let hint = state.hint().unwrap();
        assert_eq!(hint.best_move, Move::new(2));
        assert_eq!(state.move_count(), 3);

        state.restart();
        assert!(!state.engine_enabled());
        assert_eq!(state.human_mark(), Mark::X);
    }
}
