use serde::Deserialize;

/// Repository metadata as returned by `GET /repos/{owner}/{name}`.
///
/// Only the fields the report needs are decoded; everything else in the response is
/// ignored. Apart from `full_name`, missing fields fall back to empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RepositoryRecord {
    pub full_name: String,
    #[serde(default)]
    pub owner: Option<Owner>,
    /// The repository this one was forked from. Only populated for forks, and only one level deep.
    #[serde(default)]
    pub parent: Option<ParentRepository>,
    #[serde(rename = "fork", default)]
    pub is_fork: bool,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub watchers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub open_issues_count: u64,
    #[serde(default)]
    pub license: Option<License>,
    #[serde(default)]
    pub default_branch: String,
}

impl RepositoryRecord {
    /// Full name of the upstream repository, reported only when this record is a fork.
    #[must_use]
    pub fn fork_parent(&self) -> Option<&str> {
        if self.is_fork {
            self.parent.as_ref().map(|p| p.full_name.as_str())
        } else {
            None
        }
    }

    /// Display name of the license, if the repository declares one.
    #[must_use]
    pub fn license_name(&self) -> Option<&str> {
        self.license.as_ref().map(|l| l.name.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Owner {
    pub login: String,
}

/// The parent of a fork. The API returns a full repository object here, but only its name is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ParentRepository {
    pub full_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct License {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub spdx_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_response() {
        let json = r#"{
            "id": 1296269,
            "name": "widget",
            "full_name": "acme/widget",
            "owner": { "login": "acme", "id": 1 },
            "fork": true,
            "parent": { "full_name": "upstream/widget", "fork": false, "stargazers_count": 9000 },
            "stargazers_count": 80,
            "watchers_count": 81,
            "forks_count": 9,
            "open_issues_count": 3,
            "license": {
                "key": "mit",
                "name": "MIT License",
                "spdx_id": "MIT",
                "url": "https://api.github.com/licenses/mit"
            },
            "default_branch": "main"
        }"#;

        let repo: RepositoryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(repo.full_name, "acme/widget");
        assert_eq!(repo.owner.as_ref().unwrap().login, "acme");
        assert!(repo.is_fork);
        assert_eq!(repo.fork_parent(), Some("upstream/widget"));
        assert_eq!(repo.stargazers_count, 80);
        assert_eq!(repo.watchers_count, 81);
        assert_eq!(repo.forks_count, 9);
        assert_eq!(repo.open_issues_count, 3);
        assert_eq!(repo.license_name(), Some("MIT License"));
        assert_eq!(repo.license.as_ref().unwrap().key, "mit");
        assert_eq!(repo.license.as_ref().unwrap().spdx_id.as_deref(), Some("MIT"));
        assert_eq!(repo.default_branch, "main");
    }

    #[test]
    fn test_deserialize_null_license_and_parent() {
        let json = r#"{
            "full_name": "acme/widget",
            "fork": false,
            "parent": null,
            "license": null,
            "stargazers_count": 1,
            "watchers_count": 1,
            "forks_count": 0,
            "open_issues_count": 0,
            "default_branch": "master"
        }"#;

        let repo: RepositoryRecord = serde_json::from_str(json).unwrap();
        assert!(repo.parent.is_none());
        assert!(repo.license_name().is_none());
        assert_eq!(repo.default_branch, "master");
    }

    #[test]
    fn test_parent_ignored_when_not_a_fork() {
        let json = r#"{
            "full_name": "acme/widget",
            "fork": false,
            "parent": { "full_name": "upstream/widget" }
        }"#;

        let repo: RepositoryRecord = serde_json::from_str(json).unwrap();
        assert!(repo.parent.is_some());
        assert_eq!(repo.fork_parent(), None);
    }

    #[test]
    fn test_fork_without_parent() {
        let json = r#"{ "full_name": "acme/widget", "fork": true }"#;

        let repo: RepositoryRecord = serde_json::from_str(json).unwrap();
        assert!(repo.is_fork);
        assert_eq!(repo.fork_parent(), None);
    }

    #[test]
    fn test_missing_counts_default_to_zero() {
        let repo: RepositoryRecord = serde_json::from_str(r#"{ "full_name": "acme/widget" }"#).unwrap();
        assert_eq!(repo.stargazers_count, 0);
        assert_eq!(repo.watchers_count, 0);
        assert_eq!(repo.forks_count, 0);
        assert_eq!(repo.open_issues_count, 0);
        assert_eq!(repo.default_branch, "");
    }

    #[test]
    fn test_missing_full_name_is_rejected() {
        let _ = serde_json::from_str::<RepositoryRecord>(r#"{ "fork": false }"#).unwrap_err();
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let _ = serde_json::from_str::<RepositoryRecord>(r#"{ "full_name": "a/b", "stargazers_count": "many" }"#).unwrap_err();
    }
}
