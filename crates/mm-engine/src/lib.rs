//! `mm-engine` - dense `f64` matrix multiplication for benchmarking.
//!
//! This crate provides:
//! - A row-major `Matrix` buffer that owns its storage
//! - Sequential and random initializers
//! - Three interchangeable strategies behind `MatmulStrategy`: naive,
//!   transpose-then-multiply, and row-partitioned multi-threaded
//! - A row `partition`er for the parallel strategy
//! - A stateless dispatcher, `multiply`, selecting a strategy by `Mode`
//!
//! ```
//! use mm_engine::{allocate, init_sequential, multiply, Mode};
//!
//! let mut a = allocate(4, 3).unwrap();
//! let mut b = allocate(3, 4).unwrap();
//! init_sequential(&mut a);
//! init_sequential(&mut b);
//!
//! let c = multiply(&a, &b, Mode::Parallel).unwrap();
//! assert_eq!(c, multiply(&a, &b, Mode::Naive).unwrap());
//! ```

pub mod config;
pub mod cpu;
pub mod dispatch;
pub mod error;
pub mod init;
pub mod matrix;
pub mod partition;
pub mod strategy;

// Re-export primary types at the crate root for convenience.
pub use config::{EngineConfig, MAX_RANDOM, NUM_THREADS};
pub use cpu::{NaiveStrategy, ParallelStrategy, TransposeStrategy};
pub use dispatch::{multiply, multiply_with, Mode};
pub use error::{MatmulError, Result};
pub use init::{allocate, build, init_random, init_random_seeded, init_sequential, MatrixKind};
pub use matrix::{check_shapes, Matrix};
pub use partition::partition;
pub use strategy::MatmulStrategy;
