//! Rank the GitHub repositories behind a Go module's dependencies.
//!
//! Reads `go.mod`, looks up each required module's repository on GitHub, and prints
//! a table sorted by watchers, stars, forks, or open issues.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use gomod_rank_lib::{Host, run};
use std::io::Write;
use std::io::{stderr, stdout};

/// Host for a terminal run of `gomod-rank`.
///
/// The status lines and the report table go to stdout, so redirecting stdout
/// captures a complete report. Usage errors go to stderr, as do the warnings for
/// repositories that could not be resolved (written there by the logger rather
/// than through this host).
#[derive(Debug, Clone, Default)]
pub struct RealHost;

#[cfg_attr(coverage_nightly, coverage(off))]
impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout().lock()
    }

    fn error(&mut self) -> impl Write {
        stderr().lock()
    }

    /// Only reached after `--help`, `--version`, or a command-line usage error.
    fn exit(&mut self, code: i32) {
        std::process::exit(code);
    }
}

#[tokio::main]
#[cfg_attr(coverage_nightly, coverage(off))]
async fn main() -> Result<(), ohno::AppError> {
    run(&mut RealHost, std::env::args()).await
}
