use crate::hosting::RepositoryRecord;
use clap::ValueEnum;
use serde::Deserialize;
use strum::{Display, EnumString};

/// The numeric repository attribute that orders the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Deserialize, Display, EnumString)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortKey {
    /// Number of watchers
    #[default]
    Watchers,

    /// Number of stargazers
    Stars,

    /// Number of forks
    Forks,

    /// Number of open issues
    Issues,
}

impl SortKey {
    /// The value of this key's attribute for `record`.
    #[must_use]
    pub const fn value_of(self, record: &RepositoryRecord) -> u64 {
        match self {
            Self::Watchers => record.watchers_count,
            Self::Stars => record.stargazers_count,
            Self::Forks => record.forks_count,
            Self::Issues => record.open_issues_count,
        }
    }
}
