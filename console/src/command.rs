use common::games::tictactoe::{BOARD_SIDE, CELL_COUNT, Move};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(Move),
    Hint,
    Restart,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  1-9        place the next mark on that cell (1 is top left, 9 is bottom right)
  row col    place the next mark by row and column, e.g. '2 3' or '2,3'
  hint       ask the engine for the best move for the mark to play
  restart    start a new game
  help       show this list
  quit       leave the game";

pub fn parse_command(line: &str) -> Result<Command, String> {
    let input = line.trim().to_lowercase();

    match input.as_str() {
        "" => return Err("Please enter a cell number (1-9) or 'help'".to_string()),
        "hint" => return Ok(Command::Hint),
        "restart" | "new" => return Ok(Command::Restart),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        _ => {}
    }

    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [cell] => {
            let cell = parse_number(cell)?;
            if cell == 0 || cell > CELL_COUNT {
                return Err(format!("Cell number must be between 1 and {}", CELL_COUNT));
            }
            Ok(Command::Place(Move::new(cell - 1)))
        }
        [row, col] => {
            let row = parse_number(row)?;
            let col = parse_number(col)?;
            if row == 0 || row > BOARD_SIDE || col == 0 || col > BOARD_SIDE {
                return Err(format!(
                    "Row and column must be between 1 and {}",
                    BOARD_SIDE
                ));
            }
            Ok(Command::Place(Move::from_coords(row - 1, col - 1)))
        }
        _ => Err(format!("Unknown command '{}', type 'help' for the list", line.trim())),
    }
}

fn parse_number(token: &str) -> Result<usize, String> {
    token
        .parse::<usize>()
        .map_err(|_| format!("'{}' is not a number, type 'help' for the list", token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_numbers_are_one_based() {
        assert_eq!(parse_command("1"), Ok(Command::Place(Move::new(0))));
        assert_eq!(parse_command(" 9\n"), Ok(Command::Place(Move::new(8))));
    }

    #[test]
    fn row_and_column_pairs() {
        assert_eq!(parse_command("2 3"), Ok(Command::Place(Move::new(5))));
        assert_eq!(parse_command("3,1"), Ok(Command::Place(Move::new(6))));
        assert_eq!(parse_command("1, 1"), Ok(Command::Place(Move::new(0))));
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(parse_command("HINT"), Ok(Command::Hint));
        assert_eq!(parse_command("Restart"), Ok(Command::Restart));
        assert_eq!(parse_command("new"), Ok(Command::Restart));
        assert_eq!(parse_command("?"), Ok(Command::Help));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command("exit"), Ok(Command::Quit));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(parse_command("0").is_err());
        assert!(parse_command("10").is_err());
        assert!(parse_command("4 1").is_err());
        assert!(parse_command("1 0").is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_command("").is_err());
        assert!(parse_command("abc").is_err());
        assert!(parse_command("1 2 3").is_err());
        assert!(parse_command("-1").is_err());
    }
}
