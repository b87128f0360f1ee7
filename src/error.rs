//! Error types for matrix construction, multiplication and input handling.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Exactly one of the two dimensions was zero.
    #[error("not zero dimension for empty matrix: {height}x{width}")]
    Dimension { height: usize, width: usize },

    #[error("matrix shape {height}x{width} overflows the addressable size")]
    Overflow { height: usize, width: usize },

    /// A flat value sequence did not hold exactly `height * width` values.
    #[error("wrong range size: expected {expected} values, got {found}")]
    Range { expected: usize, found: usize },

    #[error("dimension mismatch in {op}: {}x{} by {}x{}", .lhs.0, .lhs.1, .rhs.0, .rhs.1)]
    DimensionMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    #[error("parse error: {token:?} is not a number")]
    Parse { token: String },

    #[error("input data size is odd: {0} values")]
    OddLength(usize),

    #[error("matrix is not squared: {0} values per operand")]
    NotSquare(usize),

    #[error("invalid value {value:?} for {key}")]
    Config { key: &'static str, value: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
