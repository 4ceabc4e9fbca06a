use super::board::Board;
use super::error::TicTacToeError;
use super::settings::SearchSettings;
use super::types::{CELL_COUNT, Mark, Move, Score};

/// Weighted terminal scores are `±(DEPTH_WEIGHT_BASE - depth)`, never zero since depth <= 9.
const DEPTH_WEIGHT_BASE: Score = CELL_COUNT as Score + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Move,
    pub score: Score,
    pub nodes_visited: u64,
}

/// Best move for `player` with the default settings: alpha-beta, no depth weighting.
pub fn best_move(board: &Board, player: Mark) -> Result<Move, TicTacToeError> {
    search(board, player, &SearchSettings::default()).map(|result| result.best_move)
}

/// Exhaustive minimax over every continuation of `board`.
///
/// O maximizes and X minimizes. Every root move is searched with a full window,
/// so the reported score is exact and the first move (by index) reaching the
/// best score is returned, with or without pruning.
pub fn search(
    board: &Board,
    player: Mark,
    settings: &SearchSettings,
) -> Result<SearchResult, TicTacToeError> {
    if board.outcome().is_terminal() {
        return Err(TicTacToeError::NoMovesAvailable);
    }

    let expected = board.current_mark();
    if player != expected {
        return Err(TicTacToeError::NotPlayersTurn {
            expected,
            found: player,
        });
    }

    let mut searcher = Searcher {
        settings: *settings,
        nodes_visited: 0,
    };
    let mut scratch = *board;
    let mut best: Option<(Move, Score)> = None;

    for mv in board.legal_moves() {
        let score = {
            let mut child = scratch.simulate(mv)?;
            searcher.minimax(&mut child, opposite(player), Score::MIN, Score::MAX, 1)
        };

        let improves = match best {
            None => true,
            Some((_, best_score)) => is_better(player, score, best_score),
        };
        if improves {
            best = Some((mv, score));
        }
    }

    let (best_move, score) = best.ok_or(TicTacToeError::NoMovesAvailable)?;
    Ok(SearchResult {
        best_move,
        score,
        nodes_visited: searcher.nodes_visited,
    })
}

fn opposite(player: Mark) -> Mark {
    if player == Mark::O { Mark::X } else { Mark::O }
}

fn is_better(player: Mark, score: Score, best_score: Score) -> bool {
    if player == Mark::O {
        score > best_score
    } else {
        score < best_score
    }
}

struct Searcher {
    settings: SearchSettings,
    nodes_visited: u64,
}

impl Searcher {
    fn minimax(
        &mut self,
        board: &mut Board,
        player: Mark,
        mut alpha: Score,
        mut beta: Score,
        depth: Score,
    ) -> Score {
        debug_assert_eq!(board.current_mark(), player);
        self.nodes_visited += 1;

        if let Some(score) = board.outcome().score() {
            return self.terminal_score(score, depth);
        }

        let next = opposite(player);

        if player == Mark::O {
            let mut max_eval = Score::MIN;
            for mv in board.legal_moves() {
                let eval = {
                    let Ok(mut child) = board.simulate(mv) else {
                        continue;
                    };
                    self.minimax(&mut child, next, alpha, beta, depth + 1)
                };

                max_eval = max_eval.max(eval);
                if self.settings.pruning {
                    alpha = alpha.max(max_eval);
                    if alpha >= beta {
                        break;
                    }
                }
            }
            max_eval
        } else {
            let mut min_eval = Score::MAX;
            for mv in board.legal_moves() {
                let eval = {
                    let Ok(mut child) = board.simulate(mv) else {
                        continue;
                    };
                    self.minimax(&mut child, next, alpha, beta, depth + 1)
                };

                min_eval = min_eval.min(eval);
                if self.settings.pruning {
                    beta = beta.min(min_eval);
                    if beta <= alpha {
                        break;
                    }
                }
            }
            min_eval
        }
    }

    fn terminal_score(&self, score: Score, depth: Score) -> Score {
        if self.settings.depth_weighting {
            score * (DEPTH_WEIGHT_BASE - depth)
        } else {
            score
        }
    }
}
