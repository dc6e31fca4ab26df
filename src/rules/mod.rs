//! Game rules for tic-tac-toe
//!
//! A move can only complete a line that passes through the square it was
//! played on, so outcome evaluation looks at the four axes through that
//! pivot instead of scanning every line on the board.

pub mod win;

use tracing::trace;

use crate::board::{Board, Player, Pos};

// Re-exports for convenient access
pub use win::{check_winner, count_direction, line_length_through, winning_axis, winning_line, Axis};

/// Classification of a game position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    InProgress,
    Win(Player),
    Tie,
}

impl Outcome {
    /// True for `Win` and `Tie`
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    #[inline]
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            _ => None,
        }
    }
}

/// Evaluate the outcome after a mark was written at `pivot`.
///
/// Wins are checked before the tie so a final move that completes a line
/// is reported as a win even though it also fills the board.
pub fn evaluate(board: &Board, pivot: Pos) -> Outcome {
    let Some(owner) = board.get(pivot).owner() else {
        return Outcome::InProgress;
    };

    if let Some(axis) = winning_axis(board, pivot) {
        trace!(%pivot, %axis, "line completed");
        return Outcome::Win(owner);
    }

    if board.is_full() {
        return Outcome::Tie;
    }

    Outcome::InProgress
}
