//! Text front end over stdin/stdout
//!
//! Prints the board and a status line after every command and reads
//! `row col` moves (0-based), `reset` or `quit`.

use std::io::{BufRead, Write};

use tracing::{debug, instrument, warn};

use crate::error::InputError;
use crate::game::GameState;
use crate::rules::Outcome;

/// One parsed line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Raw coordinates; range checking is left to the engine
    Move { row: i32, col: i32 },
    Reset,
    Quit,
}

/// Parse a line such as `1 2`, `1,2`, `reset` or `quit`.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(InputError::Empty);
    }

    match line.to_ascii_lowercase().as_str() {
        "r" | "reset" | "new" => return Ok(Command::Reset),
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    let tokens: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.len() != 2 {
        return Err(InputError::WrongArity {
            count: tokens.len(),
        });
    }

    // Huge values are still coordinates, just off the grid
    let number = |token: &str| {
        token
            .parse::<i64>()
            .map(|n| n.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
            .map_err(|_| InputError::NotANumber {
                token: token.to_string(),
            })
    };
    Ok(Command::Move {
        row: number(tokens[0])?,
        col: number(tokens[1])?,
    })
}

/// Status line for the current state, consuming the rejection flag
pub fn status_message(game: &mut GameState) -> String {
    if game.take_rejection() {
        return "That square is already taken, pick another".to_string();
    }
    match game.outcome() {
        Outcome::InProgress => format!("Player {}'s turn", game.current_turn()),
        Outcome::Win(winner) => format!("Player {} wins!", winner),
        Outcome::Tie => "It's a tie!".to_string(),
    }
}

/// Run an interactive session until `quit` or end of input
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(input: R, mut output: W) -> std::io::Result<()> {
    let mut game = GameState::new();
    render(&mut game, &mut output)?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Reset) => game.reset(),
            Ok(Command::Move { row, col }) => {
                let result = game.attempt_move(row, col);
                debug!(?result, "move handled");
            }
            Err(err) => {
                warn!(%err, "unreadable input");
                writeln!(output, "{err}")?;
                continue;
            }
        }
        render(&mut game, &mut output)?;
    }

    Ok(())
}

fn render<W: Write>(game: &mut GameState, output: &mut W) -> std::io::Result<()> {
    let message = status_message(game);
    writeln!(output, "{}", game.board())?;
    writeln!(output, "{message}")?;
    if game.is_over() {
        writeln!(output, "Type 'reset' to play again")?;
    }
    output.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_command("1 2"), Ok(Command::Move { row: 1, col: 2 }));
        assert_eq!(parse_command(" 0,2 "), Ok(Command::Move { row: 0, col: 2 }));
        assert_eq!(parse_command("2, 0"), Ok(Command::Move { row: 2, col: 0 }));
    }

    #[test]
    fn test_out_of_range_is_not_a_parse_error() {
        assert_eq!(parse_command("-1 -1"), Ok(Command::Move { row: -1, col: -1 }));
        assert_eq!(parse_command("5 9"), Ok(Command::Move { row: 5, col: 9 }));
        assert_eq!(
            parse_command("99999999999 0"),
            Ok(Command::Move { row: i32::MAX, col: 0 })
        );
        assert_eq!(
            parse_command("0 -99999999999"),
            Ok(Command::Move { row: 0, col: i32::MIN })
        );
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse_command("reset"), Ok(Command::Reset));
        assert_eq!(parse_command("R"), Ok(Command::Reset));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_command("   "), Err(InputError::Empty));
        assert_eq!(parse_command("1"), Err(InputError::WrongArity { count: 1 }));
        assert_eq!(parse_command("1 2 3"), Err(InputError::WrongArity { count: 3 }));
        assert_eq!(
            parse_command("a 1"),
            Err(InputError::NotANumber {
                token: "a".to_string()
            })
        );
        assert_eq!(
            InputError::WrongArity { count: 3 }.to_string(),
            "expected 'row col', got 3 value(s)"
        );
    }

    #[test]
    fn test_status_message_warning_shows_once() {
        let mut game = GameState::new();
        game.attempt_move(1, 1);
        game.attempt_move(1, 1);
        assert_eq!(status_message(&mut game), "That square is already taken, pick another");
        assert_eq!(status_message(&mut game), "Player O's turn");
    }

    #[test]
    fn test_session_plays_to_a_win() {
        let input = "0 0\n1 1\n0 1\n2 2\n0 2\nquit\n";
        let mut output = Vec::new();
        run(input.as_bytes(), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Player X wins!"));
        assert!(text.contains("X|X|X"));
    }

    #[test]
    fn test_session_reports_bad_input_and_continues() {
        let input = "hello there\n1 1\n1 1\n";
        let mut output = Vec::new();
        run(input.as_bytes(), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("'hello' is not a number"));
        assert!(text.contains("already taken"));
    }

    #[test]
    fn test_session_ignores_overflowing_coordinates() {
        let input = "99999999999 0\n";
        let mut output = Vec::new();
        run(input.as_bytes(), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(!text.contains("not a number"));
        assert!(text.ends_with("Player X's turn\n"));
    }
}
