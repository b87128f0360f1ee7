use super::Matrix;
use crate::error::Result;

/// Cache-friendly single-threaded multiplication using row/k/col loop order.
///
/// Swapping the two inner loops makes the innermost loop stream through a
/// row of `rhs` and a row of the result, both with stride 1, and loads
/// `lhs.at(row, k)` once per pass instead of once per cell.
///
/// Each cell still sums its products in ascending `k`, so the result is
/// bit-identical to [`ParallelMultiplier`](crate::ParallelMultiplier).
pub fn multiply_ikj(lhs: &Matrix, rhs: &Matrix) -> Result<Matrix> {
    lhs.check_conformable(rhs, "multiply")?;

    let mut result = Matrix::zeros(lhs.height(), rhs.width())?;
    for row in 0..lhs.height() {
        for k in 0..lhs.width() {
            let a = lhs.at(row, k);
            for col in 0..rhs.width() {
                *result.at_mut(row, col) += a * rhs.at(k, col);
            }
        }
    }
    Ok(result)
}
