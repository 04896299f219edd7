use core::fmt::{Display, Formatter};
use std::sync::Arc;

/// Number of leading module path segments that identify a repository (`host/owner/name`).
const REPO_SEGMENTS: usize = 3;

/// The repository portion of a Go module path, such as `github.com/acme/widget`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModulePath(Arc<str>);

impl ModulePath {
    /// Build an identifier from a full module path.
    ///
    /// Returns `None` for paths with two or fewer segments. Longer paths are truncated
    /// to their first three segments, so `github.com/acme/widget/v2/sub` becomes
    /// `github.com/acme/widget`.
    #[must_use]
    pub fn from_module_path(path: &str) -> Option<Self> {
        let segments: Vec<&str> = path.split('/').take(REPO_SEGMENTS).collect();
        if segments.len() < REPO_SEGMENTS {
            return None;
        }

        Some(Self(Arc::from(segments.join("/"))))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the slash-separated segments of the identifier.
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.0.split('/')
    }
}

impl Display for ModulePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
