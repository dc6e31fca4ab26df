//! Errors raised while reading player input.
//!
//! The engine itself never fails; only turning text into a command can.

use derive_more::{Display, Error};

/// A line of terminal input that could not be understood
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Nothing but whitespace
    #[display("empty input")]
    Empty,
    /// A coordinate that is not an integer
    #[display("'{}' is not a number", token)]
    NotANumber {
        #[error(not(source))]
        token: String,
    },
    /// Wrong number of coordinates
    #[display("expected 'row col', got {} value(s)", count)]
    WrongArity {
        #[error(not(source))]
        count: usize,
    },
}
