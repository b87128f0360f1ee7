//! Reading operands from a whitespace-separated stream of numbers.
//!
//! The stream holds both operands back to back. Its length decides their
//! shape: `2 * n * n` values make two `n × n` matrices.

use std::io::Read;

use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Reads every whitespace-separated number until end of stream.
///
/// The first token that does not parse as `f64` fails the whole read.
pub fn read_values<R: Read>(mut reader: R) -> Result<Vec<f64>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_values(&text)
}

/// Parses whitespace-separated finite numbers. `inf`, `NaN` and values
/// too large for `f64` are rejected like any other non-numeric token.
pub fn parse_values(text: &str) -> Result<Vec<f64>> {
    text.split_whitespace()
        .map(|token| match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(Error::Parse {
                token: token.to_string(),
            }),
        })
        .collect()
}

/// Splits `values` into two equal halves and shapes each as an `n × n`
/// matrix.
///
/// ```
/// use matmul::input::square_operands;
///
/// let (a, b) = square_operands(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]).unwrap();
/// assert_eq!((a.height(), a.width()), (2, 2));
/// assert_eq!(b.at(0, 0), 5.0);
/// ```
pub fn square_operands(mut values: Vec<f64>) -> Result<(Matrix, Matrix)> {
    if values.len() % 2 != 0 {
        return Err(Error::OddLength(values.len()));
    }

    let half = values.len() / 2;
    let n = half.isqrt();
    if n * n != half {
        return Err(Error::NotSquare(half));
    }

    let second = values.split_off(half);
    let lhs = Matrix::from_values(values, n, n)?;
    let rhs = Matrix::from_values(second, n, n)?;
    Ok((lhs, rhs))
}
