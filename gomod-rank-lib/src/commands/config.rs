use crate::Result;
use crate::reports::SortKey;
use camino::{Utf8Path, Utf8PathBuf};
use core::time::Duration;
use ohno::{IntoAppError, app_err};
use serde::Deserialize;
use std::fs;
use std::io;
use url::Url;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Name of the configuration file looked up next to the manifest
pub const CONFIG_FILE_NAME: &str = "gomod-rank.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Base URL of the repository hosting API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: Url,

    /// Field used to order the report
    #[serde(default)]
    pub sort: SortKey,

    /// Number of concurrent repository lookups
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Capacity of the queues between pipeline stages
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,

    /// Maximum time to wait for a single API response
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_api_base_url() -> Url {
    Url::parse("https://api.github.com").expect("default API URL is valid")
}

const fn default_workers() -> usize {
    4
}

const fn default_queue_capacity() -> usize {
    16
}

const fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_user_agent() -> String {
    "gomod-rank".to_string()
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// Without an explicit path, `gomod-rank.toml` is looked up in `base_dir`; a missing
    /// file there is not an error.
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading gomod-rank configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!("No configuration file at '{path}', using defaults");
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading gomod-rank configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        log::debug!("Loaded configuration from '{final_path}'");
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.api_base_url.scheme(), "http" | "https") || self.api_base_url.cannot_be_a_base() {
            return Err(app_err!("api_base_url must be an http or https URL, got '{}'", self.api_base_url));
        }

        if self.workers == 0 {
            return Err(app_err!("workers must be at least 1"));
        }

        if self.queue_capacity == 0 {
            return Err(app_err!("queue_capacity must be at least 1"));
        }

        if self.request_timeout.is_zero() {
            return Err(app_err!("request_timeout must be greater than zero"));
        }

        if self.user_agent.trim().is_empty() {
            return Err(app_err!("user_agent must not be empty"));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
