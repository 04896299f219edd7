//! Repository metadata from the GitHub REST API
//!
//! The [`Resolver`] consumes module identifiers from a channel, looks each one up
//! through the [`Client`], and forwards the decoded [`RepositoryRecord`] values to the
//! next stage. A lookup that fails for any reason is logged and dropped; it never
//! stops the other lookups.

mod client;
mod repo_slug;
mod repository;
mod resolver;

pub use client::Client;
pub use repo_slug::RepoSlug;
pub use repository::{License, Owner, ParentRepository, RepositoryRecord};
pub use resolver::{ResolveSummary, Resolver};
