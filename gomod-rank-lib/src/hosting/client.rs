//! GitHub API client
//!
//! Minimal GitHub API client for fetching repository metadata.

use super::{RepoSlug, RepositoryRecord};
use crate::Result;
use core::time::Duration;
use ohno::{IntoAppError, app_err, bail};
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use url::Url;

const LOG_TARGET: &str = "   hosting";
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Hosting API client bound to one base URL and one access token.
#[derive(Debug, Clone)]
#[expect(clippy::struct_field_names, reason = "client field stores the underlying HTTP client")]
pub struct Client {
    client: reqwest::Client,
    base_url: Url,
}

impl Client {
    /// Create a client that authenticates every request with `token`.
    ///
    /// The token is sent as `Authorization: token <token>` and is never empty.
    pub fn new(token: &str, base_url: Url, user_agent: &str, timeout: Duration) -> Result<Self> {
        if token.is_empty() {
            bail!("an access token is required to query the GitHub API");
        }

        if base_url.cannot_be_a_base() {
            bail!("'{base_url}' cannot be used as an API base URL");
        }

        let mut auth_val = HeaderValue::from_str(&format!("token {token}")).into_app_err("building authorization header")?;
        auth_val.set_sensitive(true);

        let mut headers = HeaderMap::new();
        let _ = headers.insert(AUTHORIZATION, auth_val);
        let _ = headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));

        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .into_app_err("building HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// Get the base URL for this client
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The metadata endpoint for a repository: `<base>/repos/<owner>/<name>`.
    pub fn repository_url(&self, slug: &RepoSlug) -> Result<Url> {
        let mut url = self.base_url.clone();
        let _ = url
            .path_segments_mut()
            .map_err(|()| app_err!("'{}' cannot be used as an API base URL", self.base_url))?
            .pop_if_empty()
            .extend(["repos", slug.owner(), slug.name()]);

        Ok(url)
    }

    /// Fetch and decode the metadata of one repository.
    ///
    /// Only `200 OK` counts as success. Transport failures, any other status, and
    /// undecodable bodies are all reported as errors naming the repository.
    pub async fn get_repository(&self, slug: &RepoSlug) -> Result<RepositoryRecord> {
        let url = self.repository_url(slug)?;
        log::debug!(target: LOG_TARGET, "GET {url}");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .into_app_err_with(|| format!("requesting metadata for repository '{slug}'"))?;

        let status = resp.status();
        if status != StatusCode::OK {
            bail!("received HTTP {status} from the GitHub API for repository '{slug}'");
        }

        let body = resp
            .bytes()
            .await
            .into_app_err_with(|| format!("reading metadata for repository '{slug}'"))?;

        serde_json::from_slice(&body).into_app_err_with(|| format!("decoding metadata for repository '{slug}'"))
    }
}
