use std::fmt;
use std::str::FromStr;

use crate::config::EngineConfig;
use crate::cpu::{NaiveStrategy, ParallelStrategy, TransposeStrategy};
use crate::error::{MatmulError, Result};
use crate::matrix::Matrix;
use crate::strategy::MatmulStrategy;

/// Which multiplication algorithm the dispatcher should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Naive,
    Transpose,
    Parallel,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Naive, Mode::Transpose, Mode::Parallel];

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Naive => "naive",
            Mode::Transpose => "transpose",
            Mode::Parallel => "parallel",
        }
    }

    /// Build the strategy for this mode. Only `Parallel` reads `config`.
    pub fn strategy(&self, config: &EngineConfig) -> Box<dyn MatmulStrategy> {
        match self {
            Mode::Naive => Box::new(NaiveStrategy),
            Mode::Transpose => Box::new(TransposeStrategy),
            Mode::Parallel => Box::new(ParallelStrategy::new(config.threads)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = MatmulError;

    /// Accepts the benchmark names (`NORMAL`, `TRANSPOSE`, `MULTITHREAD`) as
    /// well as the canonical ones, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "NORMAL" | "NAIVE" => Ok(Mode::Naive),
            "TRANSPOSE" => Ok(Mode::Transpose),
            "MULTITHREAD" | "PARALLEL" => Ok(Mode::Parallel),
            _ => Err(MatmulError::UnknownMode(s.to_string())),
        }
    }
}

/// Multiply `a @ b` with `mode` and the default engine configuration.
///
/// # Errors
/// Returns `ShapeMismatch` if `a.cols() != b.rows()`, before any output is
/// allocated and regardless of `mode`.
pub fn multiply(a: &Matrix, b: &Matrix, mode: Mode) -> Result<Matrix> {
    multiply_with(a, b, mode, &EngineConfig::default())
}

/// Multiply `a @ b` with `mode`, taking the worker count from `config`.
///
/// Shapes are checked first, so a mismatch is always reported as
/// `ShapeMismatch`. Only `Mode::Parallel` reads `config.threads`; a zero
/// count fails there with `InvalidConfiguration`.
pub fn multiply_with(a: &Matrix, b: &Matrix, mode: Mode, config: &EngineConfig) -> Result<Matrix> {
    let strategy = mode.strategy(config);

    log::debug!(
        "multiply [{}x{}] @ [{}x{}] using {} ({} threads)",
        a.rows(),
        a.cols(),
        b.rows(),
        b.cols(),
        strategy.name(),
        if mode == Mode::Parallel { config.threads } else { 1 }
    );

    strategy.multiply(a, b)
}
