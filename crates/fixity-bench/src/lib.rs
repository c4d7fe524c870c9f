//! Benchmark harness for the fixed-vs-open vector comparison.
//!
//! Provides the measurement regime ([`BenchRegime`]), the per-invocation
//! accumulation loops ([`sum_fixed`], [`sum_open`]), and the fork runner
//! ([`runner::run_forks`]) that launches independent benchmark processes.
//! The Criterion benches under `benches/` wire these together.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod regime;
pub mod runner;

pub use regime::BenchRegime;

use fixity_core::{compute_with_fixed, compute_with_open, ScalarInputs};

/// Run the fixed-vector compute path `ops` times, accumulating the
/// returned squared magnitudes.
///
/// One call to this function is one measured benchmark invocation; the
/// caller is responsible for handing the returned sum to a sink so the
/// optimizer must treat it as observable.
pub fn sum_fixed(inputs: &ScalarInputs, ops: u32) -> f64 {
    let mut sum = 0.0;
    for _ in 0..ops {
        sum += compute_with_fixed(
            inputs.x1, inputs.y1, inputs.z1, inputs.x2, inputs.y2, inputs.z2,
        );
    }
    sum
}

/// Run the open-vector compute path `ops` times, accumulating the
/// returned squared magnitudes.
///
/// Must stay structurally identical to [`sum_fixed`] so the two benches
/// differ only in the compute path under test.
pub fn sum_open(inputs: &ScalarInputs, ops: u32) -> f64 {
    let mut sum = 0.0;
    for _ in 0..ops {
        sum += compute_with_open(
            inputs.x1, inputs.y1, inputs.z1, inputs.x2, inputs.y2, inputs.z2,
        );
    }
    sum
}
