//! Two-player tic-tac-toe engine
//!
//! A 3x3 game engine with strictly alternating turns and an egui front end:
//! - X always moves first
//! - Three contiguous marks horizontally, vertically or diagonally wins
//! - A full board with no line is a tie
//! - Taken squares, off-grid coordinates and moves after the end are
//!   absorbed without errors
//!
//! # Architecture
//!
//! - [`board`]: Players, squares, positions and the 3x3 grid
//! - [`rules`]: Outcome evaluation by counting along the four axes
//!   through the square just played
//! - [`game`]: The game state machine driven by the front ends
//! - [`ui`]: Native window front end (egui/eframe)
//! - [`terminal`]: Line-based front end over stdin/stdout
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{GameState, Outcome, Player};
//!
//! let mut game = GameState::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     game.attempt_move(row, col);
//! }
//!
//! assert_eq!(game.outcome(), Outcome::Win(Player::X));
//! assert_eq!(game.current_turn(), Player::X);
//! ```

pub mod board;
pub mod cli;
pub mod error;
pub mod game;
pub mod rules;
pub mod terminal;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, BOARD_SIZE};
pub use error::InputError;
pub use game::{GameState, MoveResult};
pub use rules::Outcome;
