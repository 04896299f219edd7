//! Repository identifiers extracted from Go module manifests
//!
//! A `go.mod` file lists each dependency as `<module-path> v<version>`. Module paths
//! that live on a code host start with `host/owner/name`, so the extractor keeps the
//! first three segments of every path and forwards them as a [`ModulePath`]. Paths
//! with two or fewer segments cannot name a repository and are dropped.

mod extractor;
mod module_path;

pub use extractor::{extract, extract_from_str};
pub use module_path::ModulePath;
