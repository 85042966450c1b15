//! CPU multiplication strategies.
//!
//! All three share the same per-cell accumulation order, so they are
//! interchangeable and differ only in memory access pattern and threading.
pub mod naive;
pub mod parallel;
pub mod transpose;

pub use naive::NaiveStrategy;
pub use parallel::ParallelStrategy;
pub use transpose::TransposeStrategy;
