//! Multi-threaded multiplication over a lock-free work cursor.
//!
//! Work is described as jobs, one per `(row, k)` pair of the left operand
//! (see [`Job`]). Workers claim whole result rows from a shared atomic
//! cursor by compare-and-swap and run that row's jobs in ascending `k`, so
//! no two threads ever write the same result cell and every run produces
//! the same bits as the serial i-k-j loop.
//!
//! - `job`: job numbering and the inner accumulation pass
//! - `cursor`: the compare-and-swap claim counter
//! - `multiplier`: scoped worker pool and the public entry points

pub mod cursor;
pub mod job;
pub mod multiplier;

pub use cursor::ClaimCursor;
pub use job::Job;
pub use multiplier::{ParallelMultiplier, multiply};
