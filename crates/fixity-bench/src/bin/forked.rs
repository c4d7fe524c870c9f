//! Entry point that runs the benchmark suite across independent forks.

use std::process::ExitCode;

use fixity_bench::{runner, BenchRegime};

fn main() -> ExitCode {
    let regime = BenchRegime::default();
    match runner::run_forks(&regime) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
