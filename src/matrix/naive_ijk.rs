use super::Matrix;
use crate::error::Result;

/// Naive matrix multiplication using row/col/k loop order.
///
/// This is the textbook triple loop. The innermost loop walks `rhs` down a
/// column (stride `rhs.width()`), so it misses cache on nearly every step.
///
/// Use this as a correctness baseline, not for performance.
pub fn multiply_ijk(lhs: &Matrix, rhs: &Matrix) -> Result<Matrix> {
    lhs.check_conformable(rhs, "multiply")?;

    let mut result = Matrix::zeros(lhs.height(), rhs.width())?;
    for row in 0..lhs.height() {
        for col in 0..rhs.width() {
            for k in 0..lhs.width() {
                *result.at_mut(row, col) += lhs.at(row, k) * rhs.at(k, col);
            }
        }
    }
    Ok(result)
}
