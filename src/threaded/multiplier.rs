use std::num::NonZeroUsize;
use std::ops::Mul;
use std::panic;
use std::sync::{Mutex, PoisonError};
use std::thread;

use super::cursor::ClaimCursor;
use super::job::Job;
use crate::error::Result;
use crate::matrix::Matrix;

/// Multiplies matrices on a pool of scoped worker threads.
///
/// The pool is created and joined inside every [`multiply`](Self::multiply)
/// call; the multiplier itself only remembers how many workers to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelMultiplier {
    threads: NonZeroUsize,
}

impl Default for ParallelMultiplier {
    fn default() -> Self {
        Self::new()
    }
}

impl ParallelMultiplier {
    /// One worker per available hardware thread.
    pub fn new() -> Self {
        let threads = thread::available_parallelism().unwrap_or(NonZeroUsize::MIN);
        Self { threads }
    }

    pub fn with_threads(threads: NonZeroUsize) -> Self {
        Self { threads }
    }

    pub fn threads(&self) -> usize {
        self.threads.get()
    }

    /// Computes `lhs * rhs`.
    ///
    /// Fails with [`Error::DimensionMismatch`](crate::Error::DimensionMismatch)
    /// when `lhs.width() != rhs.height()`. Neither operand is modified.
    ///
    /// Workers claim result rows from a shared [`ClaimCursor`] and run the
    /// row's jobs serially, so the output does not depend on scheduling.
    ///
    /// ```
    /// use matmul::{Matrix, ParallelMultiplier};
    ///
    /// let a = Matrix::from_values([1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
    /// let b = Matrix::from_values([5.0, 6.0, 7.0, 8.0], 2, 2).unwrap();
    ///
    /// let c = ParallelMultiplier::new().multiply(&a, &b).unwrap();
    /// assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
    /// ```
    pub fn multiply(&self, lhs: &Matrix, rhs: &Matrix) -> Result<Matrix> {
        lhs.check_conformable(rhs, "multiply")?;

        let mut result = Matrix::zeros(lhs.height(), rhs.width())?;
        let contracted = lhs.width();

        // The cursor hands each row to exactly one worker, so these locks
        // are taken once apiece and never contended.
        let rows: Vec<Mutex<&mut [f64]>> = result.rows_mut().map(Mutex::new).collect();
        let cursor = ClaimCursor::new(rows.len());

        // An empty operand leaves no jobs; the zero-shaped result stands.
        if !cursor.is_empty() {
            let workers = self.threads.get().min(cursor.len());
            run_workers(workers, &cursor, &rows, |row, out| {
                for index in Job::indices_for_row(row, contracted) {
                    Job::from_index(index, contracted).run(lhs, rhs, out);
                }
            });
        }
        drop(rows);

        Ok(result)
    }
}

/// Starts `workers` scoped threads that drain `cursor`, handing each claimed
/// row slot to `work`. Returns once every worker has been joined; a worker
/// panic is re-raised on the calling thread.
fn run_workers<F>(workers: usize, cursor: &ClaimCursor, rows: &[Mutex<&mut [f64]>], work: F)
where
    F: Fn(usize, &mut [f64]) + Sync,
{
    let work = &work;

    thread::scope(|s| {
        let handles: Vec<_> = (0..workers)
            .map(|_| {
                s.spawn(move || {
                    while let Some(row) = cursor.claim() {
                        let mut out = rows[row].lock().unwrap_or_else(PoisonError::into_inner);
                        work(row, &mut **out);
                    }
                })
            })
            .collect();

        for handle in handles {
            if let Err(payload) = handle.join() {
                panic::resume_unwind(payload);
            }
        }
    });
}

/// Multiplies with a default-sized [`ParallelMultiplier`].
pub fn multiply(lhs: &Matrix, rhs: &Matrix) -> Result<Matrix> {
    ParallelMultiplier::new().multiply(lhs, rhs)
}

impl Mul<&Matrix> for &Matrix {
    type Output = Result<Matrix>;

    fn mul(self, rhs: &Matrix) -> Result<Matrix> {
        multiply(self, rhs)
    }
}
