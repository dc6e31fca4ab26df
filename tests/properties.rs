//! Property-based tests for the game engine.
//!
//! Random move sequences, including off-grid and repeated coordinates, are
//! fed through `attempt_move` and the state is checked after every call.

use proptest::prelude::*;
use tictactoe::rules::check_winner;
use tictactoe::{GameState, MoveResult, Outcome, Player};

/// Coordinates mostly on the grid, sometimes off it
fn arb_coord() -> impl Strategy<Value = (i32, i32)> {
    prop_oneof![
        8 => (0i32..3, 0i32..3),
        1 => (-2i32..5, -2i32..5),
    ]
}

fn arb_moves() -> impl Strategy<Value = Vec<(i32, i32)>> {
    proptest::collection::vec(arb_coord(), 0..30)
}

proptest! {
    #[test]
    fn turn_follows_parity_while_in_progress(moves in arb_moves()) {
        let mut game = GameState::new();
        for (row, col) in moves {
            game.attempt_move(row, col);
            if game.outcome() == Outcome::InProgress {
                let expected = if game.move_count() % 2 == 0 { Player::X } else { Player::O };
                prop_assert_eq!(game.current_turn(), expected);
            }
        }
    }

    #[test]
    fn occupied_square_never_changes_board(moves in arb_moves()) {
        let mut game = GameState::new();
        for (row, col) in moves {
            let before = game.clone();
            match game.attempt_move(row, col) {
                MoveResult::Occupied(_) => {
                    prop_assert!(game.last_move_rejected());
                    prop_assert_eq!(game.board(), before.board());
                    prop_assert_eq!(game.current_turn(), before.current_turn());
                    prop_assert_eq!(game.outcome(), before.outcome());
                }
                MoveResult::OutOfBounds | MoveResult::GameOver => {
                    prop_assert_eq!(&game, &before);
                }
                MoveResult::Placed { .. } => {
                    prop_assert!(!game.last_move_rejected());
                    prop_assert_eq!(game.move_count(), before.move_count() + 1);
                }
            }
        }
    }

    #[test]
    fn finished_game_is_frozen(moves in arb_moves(), extra in arb_moves()) {
        let mut game = GameState::new();
        for (row, col) in moves {
            game.attempt_move(row, col);
        }
        prop_assume!(game.is_over());

        let finished = game.clone();
        for (row, col) in extra {
            prop_assert_eq!(game.attempt_move(row, col), MoveResult::GameOver);
        }
        prop_assert_eq!(game, finished);
    }

    #[test]
    fn outcome_agrees_with_full_scan(moves in arb_moves()) {
        let mut game = GameState::new();
        for (row, col) in moves {
            game.attempt_move(row, col);
            match game.outcome() {
                Outcome::Win(winner) => prop_assert_eq!(check_winner(game.board()), Some(winner)),
                Outcome::Tie => {
                    prop_assert!(game.board().is_full());
                    prop_assert_eq!(check_winner(game.board()), None);
                }
                Outcome::InProgress => {
                    prop_assert!(!game.board().is_full());
                    prop_assert_eq!(check_winner(game.board()), None);
                }
            }
        }
    }

    #[test]
    fn reset_always_yields_fresh_game(moves in arb_moves()) {
        let mut game = GameState::new();
        for (row, col) in moves {
            game.attempt_move(row, col);
        }
        game.reset();
        prop_assert!(game.board().is_board_empty());
        prop_assert_eq!(game.current_turn(), Player::X);
        prop_assert_eq!(game.outcome(), Outcome::InProgress);
        prop_assert!(!game.last_move_rejected());
    }
}
