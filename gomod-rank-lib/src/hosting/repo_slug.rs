use crate::Result;
use crate::manifest::ModulePath;
use core::fmt::{Display, Formatter};
use ohno::bail;

/// The `owner/name` pair that addresses a repository in the hosting API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoSlug {
    owner: String,
    name: String,
}

impl RepoSlug {
    /// Derive the slug from the last two segments of a module identifier.
    ///
    /// The leading host segment that the extractor keeps is ignored, so both
    /// `github.com/acme/widget` and `acme/widget` map to `acme/widget`.
    pub fn from_module(module: &ModulePath) -> Result<Self> {
        let mut segments = module.segments().rev();
        let (Some(name), Some(owner)) = (segments.next(), segments.next()) else {
            bail!("invalid repository identifier '{module}': expected at least 'owner/name'");
        };

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for RepoSlug {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
