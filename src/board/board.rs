//! Board structure

use super::{Cell, Player, Pos, BOARD_SIZE, TOTAL_CELLS};

/// 3x3 grid of squares, indexed by (row, col)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Write a player's mark (no rule checking)
    /// Use `GameState::attempt_move` for game moves
    #[inline]
    pub fn place(&mut self, pos: Pos, player: Player) {
        self.cells[pos.row as usize][pos.col as usize] = Cell::Taken(player);
    }

    /// Number of marks placed by `player`
    pub fn count(&self, player: Player) -> usize {
        self.iter()
            .filter(|(_, cell)| cell.owner() == Some(player))
            .count()
    }

    /// Number of squares still open
    pub fn empty_count(&self) -> usize {
        self.iter().filter(|(_, cell)| *cell == Cell::Empty).count()
    }

    /// Total marks on board
    #[inline]
    pub fn mark_count(&self) -> usize {
        TOTAL_CELLS - self.empty_count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.empty_count() == TOTAL_CELLS
    }

    /// Rows of the grid, top to bottom
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Iterate cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        Pos::all().map(move |pos| (pos, self.get(pos)))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.rows().iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, "|")?;
                }
                match cell {
                    Cell::Empty => write!(f, ".")?,
                    Cell::Taken(player) => write!(f, "{}", player.marker())?,
                }
            }
        }
        Ok(())
    }
}
