/// Number of worker threads used by the parallel strategy by default.
pub const NUM_THREADS: usize = 4;

/// Default upper bound (exclusive) for randomly initialized elements.
pub const MAX_RANDOM: f64 = 10.0;

/// Engine settings shared by the dispatcher and the initializers.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Fixed worker pool size for `Mode::Parallel`.
    pub threads: usize,
    /// Upper bound used when a harness builds random matrices.
    pub max_random: f64,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self {
            threads: NUM_THREADS,
            max_random: MAX_RANDOM,
        }
    }

    /// Set the worker pool size. Returns self for builder-style usage.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_max_random(mut self, max_random: f64) -> Self {
        self.max_random = max_random;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
