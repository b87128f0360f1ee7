//! Dense matrix multiplication over a lock-free thread pool.
//!
//! Each call spins up one worker per hardware thread. Workers claim result
//! rows from a shared atomic counter with compare-and-swap and fill them
//! using the cache-friendly i-k-j loop order, where the innermost loop
//! streams through a row of the right operand and a row of the result.
//!
//! ## Usage
//!
//! ```
//! use matmul::Matrix;
//!
//! let a = Matrix::from_values([1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
//! let b = Matrix::from_values([5.0, 6.0, 7.0, 8.0], 2, 2).unwrap();
//!
//! let c = (&a * &b).unwrap();
//! assert_eq!(c.to_string(), "19\t22\n43\t50\n");
//! ```
//!
//! To pick the worker count yourself:
//!
//! ```
//! use std::num::NonZeroUsize;
//! use matmul::{Matrix, ParallelMultiplier};
//!
//! let a = Matrix::from_values((0..64).map(f64::from), 8, 8).unwrap();
//! let b = Matrix::from_values((0..64).map(f64::from), 8, 8).unwrap();
//!
//! let pool = ParallelMultiplier::with_threads(NonZeroUsize::new(4).unwrap());
//! let c = pool.multiply(&a, &b).unwrap();
//! assert_eq!(c.at(0, 0), 1120.0);
//! ```
//!
//! ## What's inside
//!
//! - `matrix`: the [`Matrix`] type plus serial i-j-k and i-k-j baselines
//! - `threaded`: job model, claim cursor and the [`ParallelMultiplier`]
//! - `input`: turning a flat stream of numbers into two square operands
//! - `config`: environment settings for the `matmul` binary

pub mod config;
pub mod error;
pub mod input;
pub mod matrix;
pub mod threaded;

pub use error::{Error, Result};
pub use matrix::Matrix;
pub use matrix::naive_ijk::multiply_ijk;
pub use matrix::naive_ikj::multiply_ikj;
pub use threaded::{ParallelMultiplier, multiply};
