//! Fork runner: launches independent benchmark processes.
//!
//! Each fork is a fresh `cargo bench` child process with its own memory
//! and its own warmup, so one fork's steady state cannot contaminate the
//! next. Forks run sequentially; there is no shared state between them.

use std::error::Error;
use std::fmt;
use std::io;
use std::process::{Command, ExitStatus};

use crate::BenchRegime;

/// Errors from the fork runner.
#[derive(Debug)]
pub enum RunnerError {
    /// The benchmark child process could not be spawned.
    Spawn(io::Error),
    /// A fork exited with a non-zero status.
    ForkFailed {
        /// 1-based index of the failing fork.
        fork: u32,
        /// Exit status reported by the child.
        status: ExitStatus,
    },
}

impl fmt::Display for RunnerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn(e) => write!(f, "failed to spawn benchmark fork: {e}"),
            Self::ForkFailed { fork, status } => {
                write!(f, "benchmark fork {fork} failed: {status}")
            }
        }
    }
}

impl Error for RunnerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Spawn(e) => Some(e),
            Self::ForkFailed { .. } => None,
        }
    }
}

/// Run the `cross_pipeline` bench in `regime.forks` sequential child
/// processes.
///
/// Stops at the first fork that fails to spawn or exits non-zero.
pub fn run_forks(regime: &BenchRegime) -> Result<(), RunnerError> {
    let cargo = std::env::var_os("CARGO").unwrap_or_else(|| "cargo".into());

    for fork in 1..=regime.forks {
        eprintln!("fork {fork}/{}", regime.forks);
        let status = Command::new(&cargo)
            .args(["bench", "-p", "fixity-bench", "--bench", "cross_pipeline"])
            .status()
            .map_err(RunnerError::Spawn)?;
        if !status.success() {
            return Err(RunnerError::ForkFailed { fork, status });
        }
    }
    Ok(())
}
