//! Win condition checking
//!
//! Three contiguous marks along any of the four axes wins. Lines are
//! measured outward from a pivot square in both directions.

use strum::{Display, EnumIter, IntoEnumIterator};

use crate::board::{Board, Player, Pos};

/// Marks needed in a row to win
const WIN_LENGTH: usize = 3;

/// The four line directions through a square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Axis {
    #[strum(to_string = "horizontal")]
    Horizontal,
    #[strum(to_string = "vertical")]
    Vertical,
    /// NW to SE
    #[strum(to_string = "diagonal NW-SE")]
    DiagonalDown,
    /// NE to SW
    #[strum(to_string = "diagonal NE-SW")]
    DiagonalUp,
}

impl Axis {
    /// Step vector (row, col) in the axis' positive direction
    #[inline]
    pub fn step(self) -> (i32, i32) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::DiagonalDown => (1, 1),
            Axis::DiagonalUp => (1, -1),
        }
    }
}

/// Count contiguous `owner` marks beyond `pivot` in one direction.
///
/// The pivot itself is not counted. Stops at the board edge or the first
/// square not held by `owner`.
pub fn count_direction(board: &Board, pivot: Pos, owner: Player, (dr, dc): (i32, i32)) -> usize {
    let mut count = 0;
    let mut r = pivot.row as i32 + dr;
    let mut c = pivot.col as i32 + dc;
    while let Some(pos) = Pos::try_new(r, c) {
        if board.get(pos).owner() != Some(owner) {
            break;
        }
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Length of the same-owner run through `pivot` along `axis`, pivot included.
///
/// Returns 0 for an empty pivot.
pub fn line_length_through(board: &Board, pivot: Pos, axis: Axis) -> usize {
    let Some(owner) = board.get(pivot).owner() else {
        return 0;
    };
    let (dr, dc) = axis.step();
    1 + count_direction(board, pivot, owner, (dr, dc)) + count_direction(board, pivot, owner, (-dr, -dc))
}

/// First axis through `pivot` holding three in a row, if any
pub fn winning_axis(board: &Board, pivot: Pos) -> Option<Axis> {
    Axis::iter().find(|&axis| line_length_through(board, pivot, axis) >= WIN_LENGTH)
}

/// The three squares of the completed line through `pivot`, ordered along the axis
pub fn winning_line(board: &Board, pivot: Pos) -> Option<[Pos; 3]> {
    let axis = winning_axis(board, pivot)?;
    let owner = board.get(pivot).owner()?;
    let (dr, dc) = axis.step();

    // Walk back to the start of the run, then collect forward
    let back = count_direction(board, pivot, owner, (-dr, -dc)) as i32;
    let start_r = pivot.row as i32 - dr * back;
    let start_c = pivot.col as i32 - dc * back;

    let mut line = [pivot; WIN_LENGTH];
    for (i, slot) in line.iter_mut().enumerate() {
        let i = i as i32;
        *slot = Pos::try_new(start_r + dr * i, start_c + dc * i)?;
    }
    Some(line)
}

/// Full-board scan for a winner.
///
/// Not used on the move path, where `winning_axis` on the pivot suffices.
pub fn check_winner(board: &Board) -> Option<Player> {
    board
        .iter()
        .filter(|(_, cell)| cell.owner().is_some())
        .find(|&(pos, _)| winning_axis(board, pos).is_some())
        .and_then(|(_, cell)| cell.owner())
}
