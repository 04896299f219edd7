//! Command-line interface and orchestration for gomod-rank
//!
//! This module parses the command line, sets up logging and configuration, and then
//! hands the manifest to the [`Pipeline`](crate::pipeline::Pipeline).
//!
//! # Execution Flow
//!
//! The `run` function parses command-line arguments using clap and then:
//!
//! 1. Initializes logging from `--log-level` (with `RUST_LOG` as an override)
//! 2. Checks for a GitHub token; without one nothing else happens
//! 3. Loads `gomod-rank.toml` (or `--config`) and applies flag overrides
//! 4. Reads the manifest and runs the extract, resolve, and report pipeline
//! 5. Writes the sorted table to the host's output
//!
//! Startup problems are returned as errors. Repositories that can't be resolved are
//! only logged, so a run with some bad dependencies still produces a report.

mod common;
mod config;
mod host;
mod rank;
mod run;

pub use host::Host;
pub use rank::{RankArgs, rank_dependencies};
pub use run::run;
