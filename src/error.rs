//! Error types for the solver.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("zero denominator in fraction {numerator}/0")]
    ZeroDenominator { numerator: i64 },

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow in fraction arithmetic")]
    Overflow,

    #[error("matrix has {actual} rows, expected {expected}")]
    RowCountMismatch { expected: usize, actual: usize },

    #[error("row {row} has {actual} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("got {actual} entries, expected {expected}")]
    EntryCountMismatch { expected: usize, actual: usize },

    #[error("a {rows}x{cols} matrix is too large")]
    TooLarge { rows: usize, cols: usize },

    #[error("got {actual} parameters for {expected} free variables")]
    ParamCountMismatch { expected: usize, actual: usize },

    #[error("matrix has no rows or no columns")]
    Empty,

    #[error("particular system needs at least one unknown besides the right-hand side")]
    MissingRhs,

    #[error("invalid input: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
