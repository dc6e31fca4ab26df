//! Tic-tac-toe binary
//!
//! Opens the game window by default; `tictactoe terminal` plays over stdin.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tictactoe::cli::{Cli, Command};
use tictactoe::ui::{DisplayMode, TicTacToeApp, MIN_WINDOW_SIZE, WINDOW_SIZE};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log)))
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Command::Gui) {
        Command::Gui => run_gui(cli.mode),
        Command::Terminal => run_terminal(),
    }
}

/// Run the game in a native window
fn run_gui(mode: DisplayMode) -> Result<()> {
    info!(%mode, "starting window");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE)
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, mode)))),
    )
    .map_err(|err| anyhow!("window failed: {err}"))
}

/// Run the game over stdin/stdout
fn run_terminal() -> Result<()> {
    info!("starting terminal session");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    tictactoe::terminal::run(stdin.lock(), stdout.lock()).context("terminal session failed")
}
