//! GUI module for the tic-tac-toe game
//!
//! This module provides a native Rust GUI using egui/eframe. It only reads
//! engine state and forwards clicks; all rules live in [`crate::game`].

mod app;
mod board_view;
mod theme;

pub use app::TicTacToeApp;
pub use theme::{MIN_WINDOW_SIZE, WINDOW_SIZE};

use strum::{Display, EnumIter};

/// How marks are drawn on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, clap::ValueEnum)]
pub enum DisplayMode {
    /// Player glyphs (X / O)
    #[default]
    #[strum(to_string = "Markers")]
    Marker,
    /// Solid player colours
    #[strum(to_string = "Colors")]
    Color,
}

impl DisplayMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Marker => DisplayMode::Color,
            DisplayMode::Color => DisplayMode::Marker,
        }
    }
}
