//! Command-line interface for the tictactoe binary.

use clap::{Parser, Subcommand};

use crate::ui::DisplayMode;

/// Two-player tic-tac-toe on a single screen
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// How marks are drawn in the window
    #[arg(long, value_enum, default_value_t = DisplayMode::Marker)]
    pub mode: DisplayMode,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log: String,

    /// Front end to run (defaults to the window)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available front ends
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play in a native window
    Gui,
    /// Play in the terminal, one `row col` per line
    Terminal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert_eq!(cli.mode, DisplayMode::Marker);
        assert_eq!(cli.log, "info");
        assert_eq!(cli.command, None);
    }

    #[test]
    fn test_terminal_with_color_mode() {
        let cli = Cli::parse_from(["tictactoe", "--mode", "color", "terminal"]);
        assert_eq!(cli.mode, DisplayMode::Color);
        assert_eq!(cli.command, Some(Command::Terminal));
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["tictactoe", "--mode", "emoji"]).is_err());
    }
}
