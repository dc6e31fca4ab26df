//! Game engine: state machine for a single game
//!
//! `GameState` is the only mutator of its board. Presentation code drives it
//! through [`GameState::attempt_move`] and [`GameState::reset`] and reads the
//! result back through the query methods after each call.
//!
//! Bad input never produces an error. Off-grid coordinates and moves after
//! the game has ended are ignored, and picking a taken square only raises the
//! rejection flag.

use tracing::{debug, info, instrument};

use crate::board::{Board, Player, Pos};
use crate::rules::{self, Outcome};

/// What a call to [`GameState::attempt_move`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// Mark written; carries the outcome it produced
    Placed { pos: Pos, outcome: Outcome },
    /// Square already taken; only the rejection flag changed
    Occupied(Pos),
    /// Coordinates off the grid; nothing changed
    OutOfBounds,
    /// Game already decided; nothing changed
    GameOver,
}

impl MoveResult {
    /// True if the board changed
    #[inline]
    pub fn is_placed(self) -> bool {
        matches!(self, MoveResult::Placed { .. })
    }
}

/// Complete state of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_turn: Player,
    outcome: Outcome,
    last_move_rejected: bool,
    last_move: Option<Pos>,
}

impl GameState {
    /// Start a fresh game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_turn: Player::X,
            outcome: Outcome::InProgress,
            last_move_rejected: false,
            last_move: None,
        }
    }

    /// Abandon the current game and start over.
    #[instrument(skip(self), fields(marks = self.board.mark_count(), outcome = ?self.outcome))]
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("board reset");
    }

    /// Try to play the current player's mark at (row, col).
    ///
    /// Coordinates come straight from the caller and may be off the grid;
    /// a `-1` sentinel is how adapters report a click that missed the board.
    #[instrument(skip(self), fields(player = %self.current_turn))]
    pub fn attempt_move(&mut self, row: i32, col: i32) -> MoveResult {
        if self.outcome.is_over() {
            debug!("move after game end ignored");
            return MoveResult::GameOver;
        }

        match Pos::try_new(row, col) {
            Some(pos) => self.attempt_move_at(pos),
            None => {
                debug!("move off the grid ignored");
                MoveResult::OutOfBounds
            }
        }
    }

    /// Same as [`attempt_move`](Self::attempt_move) for an already built position.
    ///
    /// `Pos` fields are public, so the position is range checked again here.
    pub fn attempt_move_at(&mut self, pos: Pos) -> MoveResult {
        if self.outcome.is_over() {
            return MoveResult::GameOver;
        }

        if !Pos::is_valid(pos.row as i32, pos.col as i32) {
            debug!(?pos, "move off the grid ignored");
            return MoveResult::OutOfBounds;
        }

        if !self.board.is_empty(pos) {
            debug!(%pos, "square already taken");
            self.last_move_rejected = true;
            return MoveResult::Occupied(pos);
        }

        self.execute_move(pos);
        MoveResult::Placed {
            pos,
            outcome: self.outcome,
        }
    }

    /// Write the mark, evaluate, and pass the turn if the game goes on
    fn execute_move(&mut self, pos: Pos) {
        let player = self.current_turn;
        debug_assert!(self.turn_parity_holds());

        self.board.place(pos, player);
        self.last_move = Some(pos);
        self.last_move_rejected = false;

        self.outcome = rules::evaluate(&self.board, pos);
        match self.outcome {
            Outcome::InProgress => self.current_turn = player.opponent(),
            Outcome::Win(winner) => info!(%winner, %pos, "game won"),
            Outcome::Tie => info!(%pos, "game tied"),
        }

        debug_assert!(self.turn_parity_holds());
    }

    /// X moves on even mark counts, O on odd ones, while the game is open
    fn turn_parity_holds(&self) -> bool {
        if self.outcome.is_over() {
            return true;
        }
        let expected = if self.board.mark_count() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        self.current_turn == expected
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose mark the next accepted move writes.
    ///
    /// After a win this stays on the winner.
    #[inline]
    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Whether the latest attempt hit a taken square (does not clear the flag)
    #[inline]
    pub fn last_move_rejected(&self) -> bool {
        self.last_move_rejected
    }

    /// Read and clear the rejection flag.
    ///
    /// Adapters call this when rendering so the warning shows exactly once.
    pub fn take_rejection(&mut self) -> bool {
        std::mem::take(&mut self.last_move_rejected)
    }

    /// Square written by the most recent accepted move
    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Squares of the completed line, once the game is won
    pub fn winning_line(&self) -> Option<[Pos; 3]> {
        match self.outcome {
            Outcome::Win(_) => rules::winning_line(&self.board, self.last_move?),
            _ => None,
        }
    }

    /// Number of accepted moves this game
    #[inline]
    pub fn move_count(&self) -> usize {
        self.board.mark_count()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
