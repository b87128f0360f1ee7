use crate::matrix::Matrix;

/// One unit of multiplication work: a fixed `row` of the left operand and
/// a fixed index `k` into the contracted dimension.
///
/// Running a job adds `lhs[row][k] * rhs[k][col]` into `result[row][col]`
/// for every output column in a single pass. Jobs are numbered
/// `0..lhs.height() * lhs.width()`, row by row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    pub row: usize,
    pub k: usize,
}

impl Job {
    /// Maps a job number to its `(row, k)` pair.
    ///
    /// `contracted` is the left operand's width and must be non-zero.
    #[inline]
    pub fn from_index(index: usize, contracted: usize) -> Self {
        Self {
            row: index / contracted,
            k: index % contracted,
        }
    }

    /// Job numbers belonging to result row `row`, in ascending `k`.
    pub fn indices_for_row(row: usize, contracted: usize) -> std::ops::Range<usize> {
        row * contracted..(row + 1) * contracted
    }

    /// Accumulates this job's contribution into `result_row`, which must be
    /// row `self.row` of the result and `rhs.width()` long.
    #[inline]
    pub fn run(&self, lhs: &Matrix, rhs: &Matrix, result_row: &mut [f64]) {
        debug_assert_eq!(result_row.len(), rhs.width());

        let a = lhs.at(self.row, self.k);
        for (cell, &b) in result_row.iter_mut().zip(rhs.row(self.k)) {
            *cell += a * b;
        }
    }
}
