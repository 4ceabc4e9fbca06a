use std::io::{self, BufRead, Write};

use common::games::tictactoe::{
    BOARD_SIDE, Board, HUMAN_MARK, Mark, Move, Outcome, Score, SearchResult, TicTacToeError,
    TicTacToeGameState,
};
use common::log;

use crate::command::{Command, HELP_TEXT, parse_command};
use crate::config::Config;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl SessionSummary {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::XWins => self.x_wins += 1,
            Outcome::OWins => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Turn loop: the human types moves for X and the engine answers for O,
/// or two humans type moves in turn.
pub struct ConsoleGame<R: BufRead, W: Write> {
    state: TicTacToeGameState,
    player_name: String,
    show_evaluation: bool,
    input: R,
    output: W,
    summary: SessionSummary,
}

impl<R: BufRead, W: Write> ConsoleGame<R, W> {
    pub fn new(config: &Config, input: R, output: W) -> Self {
        Self {
            state: if config.two_players {
                TicTacToeGameState::new_two_players(config.search)
            } else {
                TicTacToeGameState::new(config.search)
            },
            player_name: config.player_name.trim().to_string(),
            show_evaluation: config.show_evaluation,
            input,
            output,
            summary: SessionSummary::default(),
        }
    }

    pub fn run(mut self) -> io::Result<SessionSummary> {
        if self.state.engine_enabled() {
            writeln!(
                self.output,
                "{} plays X and moves first, the engine plays O. Type 'help' for commands.",
                self.player_name
            )?;
        } else {
            writeln!(
                self.output,
                "Two-player game: X moves first, then O. Type 'help' for commands."
            )?;
        }
        self.print_board()?;

        loop {
            self.prompt()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break;
            }

            match parse_command(&line) {
                Err(message) => writeln!(self.output, "{}", message)?,
                Ok(Command::Quit) => break,
                Ok(Command::Help) => writeln!(self.output, "{}", HELP_TEXT)?,
                Ok(Command::Restart) => {
                    self.state.restart();
                    log!("New game started");
                    writeln!(self.output, "New game.")?;
                    self.print_board()?;
                }
                Ok(Command::Hint) => self.show_hint()?,
                Ok(Command::Place(mv)) => self.play_turn(mv)?,
            }
        }

        writeln!(
            self.output,
            "Thanks for playing! Games: {}, X wins: {}, O wins: {}, draws: {}",
            self.summary.games(),
            self.summary.x_wins,
            self.summary.o_wins,
            self.summary.draws
        )?;
        self.output.flush()?;
        Ok(self.summary)
    }

    fn prompt(&mut self) -> io::Result<()> {
        if self.state.outcome().is_terminal() {
            write!(self.output, "> ")?;
        } else if self.state.engine_enabled() {
            write!(self.output, "{} (X), your move: ", self.player_name)?;
        } else {
            write!(self.output, "{}, your move: ", self.state.human_mark())?;
        }
        self.output.flush()
    }

    fn player_label(&self, mark: Mark) -> String {
        if self.state.engine_enabled() && mark == HUMAN_MARK {
            self.player_name.clone()
        } else {
            mark.to_string()
        }
    }

    fn play_turn(&mut self, mv: Move) -> io::Result<()> {
        match self.state.place_mark(mv) {
            Err(TicTacToeError::GameOver) => {
                return writeln!(
                    self.output,
                    "The game has ended. Type 'restart' to play again."
                );
            }
            Err(e) => return writeln!(self.output, "{}. Please try again.", e),
            Ok(outcome) if outcome.is_terminal() => {
                self.print_board()?;
                return self.finish_game(outcome);
            }
            Ok(_) if !self.state.engine_enabled() => return self.print_board(),
            Ok(_) => {}
        }

        match self.state.ai_move() {
            Ok(result) => self.announce_ai_move(&result)?,
            Err(e) => {
                log!("Engine could not move: {}", e);
                return writeln!(self.output, "The engine could not move: {}", e);
            }
        }

        self.print_board()?;
        let outcome = self.state.outcome();
        if outcome.is_terminal() {
            self.finish_game(outcome)?;
        }
        Ok(())
    }

    fn announce_ai_move(&mut self, result: &SearchResult) -> io::Result<()> {
        log!(
            "O plays {} with score {} after {} positions",
            result.best_move,
            result.score,
            result.nodes_visited
        );
        writeln!(self.output, "O plays {}", result.best_move)?;
        if self.show_evaluation {
            writeln!(
                self.output,
                "Evaluation: {} ({}), {} positions searched",
                result.score,
                describe_score(result.score),
                result.nodes_visited
            )?;
        }
        Ok(())
    }

    fn show_hint(&mut self) -> io::Result<()> {
        match self.state.hint() {
            Ok(result) => writeln!(
                self.output,
                "Suggested move: {} ({})",
                result.best_move,
                describe_score(result.score)
            ),
            Err(TicTacToeError::GameOver) => writeln!(
                self.output,
                "The game has ended. Type 'restart' to play again."
            ),
            Err(e) => writeln!(self.output, "{}", e),
        }
    }

    fn finish_game(&mut self, outcome: Outcome) -> io::Result<()> {
        self.summary.record(outcome);
        log!("Game over: {} after {} moves", outcome, self.state.move_count());

        match outcome.winner() {
            Some(mark) => {
                let winner = self.player_label(mark);
                writeln!(self.output, "{} wins!", winner)?
            }
            None => writeln!(self.output, "It's a draw.")?,
        }
        if let Some(line) = self.state.board().winning_line() {
            let cells: Vec<String> = line.cells.iter().map(|c| (c + 1).to_string()).collect();
            writeln!(self.output, "Winning line: cells {}", cells.join(", "))?;
        }
        writeln!(
            self.output,
            "Type 'restart' to play again or 'quit' to exit."
        )
    }

    fn print_board(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", render_board(self.state.board()))
    }
}

fn describe_score(score: Score) -> &'static str {
    match score {
        s if s > 0 => "O can force a win",
        s if s < 0 => "X can force a win",
        _ => "draw with best play",
    }
}

/// Marked cells show their mark, free cells show the number to type.
pub fn render_board(board: &Board) -> String {
    let rows: Vec<String> = (0..BOARD_SIDE)
        .map(|row| {
            let cells: Vec<String> = (0..BOARD_SIDE)
                .map(|col| {
                    let index = row * BOARD_SIDE + col;
                    match board.get(index) {
                        Some(Mark::Empty) | None => (index + 1).to_string(),
                        Some(mark) => mark.to_string(),
                    }
                })
                .collect();
            format!(" {} ", cells.join(" | "))
        })
        .collect();
    rows.join("\n---+---+---\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::SearchSettings;

    fn run_script(config: &Config, script: &str) -> (SessionSummary, String) {
        let mut output = Vec::new();
        let summary = ConsoleGame::new(config, script.as_bytes(), &mut output)
            .run()
            .unwrap();
        (summary, String::from_utf8(output).unwrap())
    }

    fn quick_win_config() -> Config {
        Config {
            search: SearchSettings {
                pruning: true,
                depth_weighting: true,
            },
            ..Config::default()
        }
    }

    #[test]
    fn render_board_numbers_free_cells() {
        let board: Board = "X../.O./...".parse().unwrap();
        assert_eq!(
            render_board(&board),
            " X | 2 | 3 \n---+---+---\n 4 | O | 6 \n---+---+---\n 7 | 8 | 9 "
        );
    }

    #[test]
    fn engine_wins_after_blunder() {
        // X: 1, O: 5, X: 2, O: 3, X: 8, O completes 3-5-7
        let (summary, output) = run_script(&quick_win_config(), "1\n2\n8\n9\nquit\n");
        assert_eq!(
            summary,
            SessionSummary {
                x_wins: 0,
                o_wins: 1,
                draws: 0
            }
        );
        assert!(output.contains("O plays cell 7 (row 3, column 1)"));
        assert!(output.contains("O wins!"));
        assert!(output.contains("Winning line: cells 3, 5, 7"));
        assert!(output.contains("The game has ended"));
    }

    #[test]
    fn invalid_input_reprompts() {
        let (summary, output) = run_script(&Config::default(), "abc\n10\n5\n5\n");
        assert_eq!(summary.games(), 0);
        assert!(output.contains("is not a number"));
        assert!(output.contains("between 1 and 9"));
        assert!(output.contains("cell is already marked. Please try again."));
    }

    #[test]
    fn hint_suggests_a_move() {
        let (_, output) = run_script(&Config::default(), "hint\nq\n");
        assert!(output.contains("Suggested move: cell 1 (row 1, column 1) (draw with best play)"));
    }

    #[test]
    fn restart_clears_the_board() {
        let (_, output) = run_script(&Config::default(), "5\nrestart\nquit\n");
        assert!(output.contains("New game."));
        assert!(output.ends_with("Thanks for playing! Games: 0, X wins: 0, O wins: 0, draws: 0\n"));
    }

    #[test]
    fn evaluation_is_printed_when_enabled() {
        let config = Config {
            show_evaluation: true,
            ..Config::default()
        };
        let (_, output) = run_script(&config, "5\nquit\n");
        assert!(output.contains("Evaluation: 0 (draw with best play)"));
        assert!(output.contains("positions searched"));
    }

    fn two_player_config() -> Config {
        Config {
            two_players: true,
            ..Config::default()
        }
    }

    #[test]
    fn two_players_take_turns_without_the_engine() {
        // X: 1, O: 3, X: 2, O: 5, X: 9, O: 7 completes 3-5-7
        let (summary, output) = run_script(&two_player_config(), "1
3
2
5
9
7
quit
");
        assert_eq!(
            summary,
            SessionSummary {
                x_wins: 0,
                o_wins: 1,
                draws: 0
            }
        );
        assert!(output.starts_with("Two-player game"));
        assert!(output.contains("O, your move: "));
        assert!(!output.contains("O plays"));
        assert!(output.contains("O wins!"));
        assert!(output.contains("Winning line: cells 3, 5, 7"));
    }

    #[test]
    fn two_player_hint_is_for_the_mark_to_move() {
        // X: 1, O: 5, X: 2, so O has to block cell 3
        let (_, output) = run_script(&two_player_config(), "1
5
2
hint
quit
");
        assert!(output.contains("Suggested move: cell 3 (row 1, column 3)"));
    }

    #[test]
    fn two_player_win_for_x_uses_the_mark() {
        let (summary, output) = run_script(&two_player_config(), "1
4
2
5
3
");
        assert_eq!(summary.x_wins, 1);
        assert!(output.contains("X wins!"));
        assert!(!output.contains("Player wins!"));
    }
}
