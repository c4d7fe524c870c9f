//! The measurement regime shared by every benchmark in this workspace.

use std::time::Duration;

/// Explicit benchmark configuration.
///
/// Both compute paths are measured under the same regime: 3 independent
/// process forks, 5 × 1000 ms of warmup and 10 × 1000 ms of measurement
/// per fork, with 10 000 compute calls per measured invocation. Criterion
/// reports average time per invocation; with throughput declared as
/// `ops_per_invocation` elements the per-call cost falls out in
/// nanoseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BenchRegime {
    /// Number of independent benchmark processes to launch.
    pub forks: u32,
    /// Warmup iterations per fork (timings discarded).
    pub warmup_iterations: u32,
    /// Duration of each warmup iteration, in milliseconds.
    pub warmup_ms: u64,
    /// Measurement iterations per fork.
    pub measurement_iterations: u32,
    /// Duration of each measurement iteration, in milliseconds.
    pub measurement_ms: u64,
    /// Compute calls per measured invocation; the divisor that turns a
    /// batch timing into a per-operation timing.
    pub ops_per_invocation: u32,
}

impl BenchRegime {
    /// Total warmup time per fork.
    pub fn warmup_total(&self) -> Duration {
        Duration::from_millis(u64::from(self.warmup_iterations) * self.warmup_ms)
    }

    /// Total measurement time per fork.
    pub fn measurement_total(&self) -> Duration {
        Duration::from_millis(u64::from(self.measurement_iterations) * self.measurement_ms)
    }
}

impl Default for BenchRegime {
    fn default() -> Self {
        Self {
            forks: 3,
            warmup_iterations: 5,
            warmup_ms: 1_000,
            measurement_iterations: 10,
            measurement_ms: 1_000,
            ops_per_invocation: 10_000,
        }
    }
}
