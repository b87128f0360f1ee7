//! Dense row-major matrix and the single-threaded reference products.
//!
//! The serial multiplications are correctness baselines for the threaded
//! multiplier and the benchmark; they share its conformability check.

pub mod naive_ijk;
pub mod naive_ikj;

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};

/// A dense `height × width` matrix of `f64`, stored row-major.
///
/// The shape is fixed at construction. Either both dimensions are zero
/// (the empty matrix) or both are positive, and the backing storage always
/// holds exactly `height * width` values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Matrix {
    height: usize,
    width: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// The 0×0 matrix.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Zero-filled `height × width` matrix.
    ///
    /// Fails with [`Error::Dimension`] when exactly one dimension is zero,
    /// and with [`Error::Overflow`] when the cell count overflows `usize`.
    pub fn zeros(height: usize, width: usize) -> Result<Self> {
        let len = check_shape(height, width)?;
        Ok(Self {
            height,
            width,
            data: vec![0.0; len],
        })
    }

    /// Builds a matrix from values given in row-major order.
    ///
    /// The sequence must yield exactly `height * width` values; anything
    /// shorter or longer fails with [`Error::Range`].
    ///
    /// ```
    /// use matmul::Matrix;
    ///
    /// let m = Matrix::from_values([1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
    /// assert_eq!(m.at(1, 0), 4.0);
    /// assert!(Matrix::from_values([1.0, 2.0], 2, 2).is_err());
    /// ```
    pub fn from_values<I>(values: I, height: usize, width: usize) -> Result<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let expected = check_shape(height, width)?;

        let mut values = values.into_iter();
        let data: Vec<f64> = values.by_ref().take(expected).collect();
        let found = data.len() + values.count();

        if found != expected {
            return Err(Error::Range { expected, found });
        }

        Ok(Self {
            height,
            width,
            data,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at `(row, col)`.
    ///
    /// The caller guarantees `row < height()` and `col < width()`; the
    /// bounds are only asserted in debug builds.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f64 {
        self.data[self.offset(row, col)]
    }

    /// Writable reference to `(row, col)`. Same contract as [`Matrix::at`].
    #[inline]
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut f64 {
        let offset = self.offset(row, col);
        &mut self.data[offset]
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        debug_assert!(
            row < self.height && col < self.width,
            "({}, {}) out of range for {}x{}",
            row,
            col,
            self.height,
            self.width
        );
        row * self.width + col
    }

    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.width;
        &self.data[start..start + self.width]
    }

    /// The whole matrix as one row-major slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable row slices, top to bottom. Yields nothing for the empty matrix.
    pub(crate) fn rows_mut(&mut self) -> impl Iterator<Item = &mut [f64]> {
        // chunks_mut(0) panics, and a zero width only occurs with zero rows.
        self.data.chunks_mut(self.width.max(1))
    }

    /// Shape-then-values comparison with absolute tolerance `eps`.
    ///
    /// Matrices of different shapes are never equal; otherwise every pair
    /// of cells must satisfy `|a - b| <= eps`.
    pub fn approx_eq(&self, other: &Matrix, eps: f64) -> bool {
        if self.height != other.height || self.width != other.width {
            return false;
        }

        self.data
            .iter()
            .zip(&other.data)
            .all(|(a, b)| (a - b).abs() <= eps)
    }

    /// Fails with [`Error::DimensionMismatch`] unless `self * rhs` is defined.
    pub(crate) fn check_conformable(&self, rhs: &Matrix, op: &'static str) -> Result<()> {
        if self.width != rhs.height {
            return Err(Error::DimensionMismatch {
                op,
                lhs: (self.height, self.width),
                rhs: (rhs.height, rhs.width),
            });
        }
        Ok(())
    }
}

/// Validates a shape and returns its cell count.
fn check_shape(height: usize, width: usize) -> Result<usize> {
    if (height == 0) != (width == 0) {
        return Err(Error::Dimension { height, width });
    }
    height
        .checked_mul(width)
        .ok_or(Error::Overflow { height, width })
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[self.offset(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        self.at_mut(row, col)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "Empty");
        }

        for r in 0..self.height {
            for (c, value) in self.row(r).iter().enumerate() {
                if c > 0 {
                    f.write_str("\t")?;
                }
                write!(f, "{}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
