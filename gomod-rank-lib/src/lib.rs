#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for gomod-rank
//!
//! This library consolidates all functionality for the gomod-rank tool, which inventories
//! the dependencies of a Go module and ranks the GitHub repositories behind them.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and orchestration
//! - [`manifest`]: Extraction of repository identifiers from `go.mod` text
//! - [`hosting`]: GitHub API client and the concurrent metadata resolver
//! - [`pipeline`]: Wiring of the extract, resolve, and report stages
//! - [`reports`]: Aggregation, sorting, and table rendering

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod hosting;
#[cfg(not(any(debug_assertions, test)))]
mod hosting;

#[cfg(any(debug_assertions, test))]
pub mod manifest;
#[cfg(not(any(debug_assertions, test)))]
mod manifest;

#[cfg(any(debug_assertions, test))]
pub mod pipeline;
#[cfg(not(any(debug_assertions, test)))]
mod pipeline;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

pub use crate::commands::{Host, run};
