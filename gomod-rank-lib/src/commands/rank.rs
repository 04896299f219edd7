use super::Host;
use super::common::{LogLevel, init_logging};
use super::config::Config;
use crate::Result;
use crate::hosting::{Client, Resolver};
use crate::pipeline::Pipeline;
use crate::reports::{SortKey, generate_table};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use ohno::{IntoAppError, bail};
use std::fs;
use std::io::Write;
use url::Url;

const LOG_TARGET: &str = "  commands";

/// Arguments for ranking the dependencies of a Go module
#[derive(Args, Debug)]
pub struct RankArgs {
    /// Repository field used to order the report [default: watchers]
    #[arg(long, value_name = "KEY")]
    pub sort: Option<SortKey>,

    /// Path to the go.mod file
    #[arg(long, default_value = "go.mod", value_name = "PATH")]
    pub manifest_path: Utf8PathBuf,

    /// GitHub personal access token
    #[arg(long, value_name = "TOKEN", env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Path to configuration file (default is `gomod-rank.toml` next to the manifest)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Number of concurrent repository lookups
    #[arg(long, value_name = "N")]
    pub workers: Option<usize>,

    /// Base URL of the GitHub API
    #[arg(long, value_name = "URL")]
    pub api_url: Option<Url>,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: LogLevel,
}

/// Extract, resolve, and report the dependencies of the manifest named in `args`.
pub async fn rank_dependencies<H: Host>(host: &mut H, args: &RankArgs) -> Result<()> {
    init_logging(args.log_level);

    let Some(token) = args.github_token.as_deref().filter(|t| !t.is_empty()) else {
        bail!("GitHub token not found: set GITHUB_TOKEN or pass --github-token");
    };
    let _ = writeln!(host.output(), "GitHub token found, proceeding...");

    let config = effective_config(args)?;
    let sort_key = args.sort.unwrap_or(config.sort);

    let manifest_text =
        fs::read_to_string(&args.manifest_path).into_app_err_with(|| format!("reading manifest '{}'", args.manifest_path))?;
    let _ = writeln!(host.output(), "Scanning {}...", args.manifest_path);

    let client = Client::new(token, config.api_base_url, &config.user_agent, config.request_timeout)?;
    log::debug!(target: LOG_TARGET, "Resolving against {}", client.base_url());

    let resolver = Resolver::new(client, config.workers);
    log::debug!(target: LOG_TARGET, "Using {} worker(s), sorting by {sort_key}", resolver.workers());

    let pipeline = Pipeline::new(resolver, sort_key, config.queue_capacity);
    let output = pipeline.run(manifest_text).await?;
    log::info!(
        target: LOG_TARGET,
        "Reporting {} of {} dependencies ({} skipped)",
        output.summary.resolved,
        output.extracted,
        output.summary.skipped
    );

    let mut table = String::new();
    generate_table(&output.records, &mut table)?;

    let mut out = host.output();
    out.write_all(table.as_bytes()).into_app_err("writing report")?;
    out.flush().into_app_err("flushing report")?;

    Ok(())
}

/// Load the configuration file and apply command-line overrides.
fn effective_config(args: &RankArgs) -> Result<Config> {
    let base_dir = args.manifest_path.parent().unwrap_or_else(|| Utf8Path::new(""));
    let mut config = Config::load(base_dir, args.config.as_ref())?;

    if let Some(workers) = args.workers {
        config.workers = workers;
    }

    if let Some(api_url) = &args.api_url {
        config.api_base_url = api_url.clone();
    }

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::host::TestHost;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        rank: RankArgs,
    }

    fn parse(args: &[&str]) -> RankArgs {
        TestCli::parse_from(core::iter::once("gomod-rank").chain(args.iter().copied())).rank
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["--github-token", "t"]);
        assert_eq!(args.sort, None);
        assert_eq!(args.manifest_path, "go.mod");
        assert_eq!(args.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_sort_values() {
        assert_eq!(parse(&["--sort", "stars"]).sort, Some(SortKey::Stars));
        assert_eq!(parse(&["--sort", "issues"]).sort, Some(SortKey::Issues));
    }

    #[test]
    fn test_invalid_sort_rejected() {
        let result = TestCli::try_parse_from(["gomod-rank", "--sort", "popularity"]);
        let _ = result.unwrap_err();
    }

    #[tokio::test]
    async fn test_missing_token_is_fatal() {
        let mut args = parse(&["--log-level", "none"]);
        args.github_token = None;

        let mut host = TestHost::new();
        let err = rank_dependencies(&mut host, &args).await.unwrap_err();
        assert!(err.to_string().contains("GitHub token not found"));
        assert!(host.output_str().is_empty());
    }

    #[tokio::test]
    async fn test_empty_token_is_fatal() {
        let mut args = parse(&["--log-level", "none"]);
        args.github_token = Some(String::new());

        let mut host = TestHost::new();
        let err = rank_dependencies(&mut host, &args).await.unwrap_err();
        assert!(err.to_string().contains("GitHub token not found"));
    }

    #[tokio::test]
    async fn test_unreadable_manifest_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("go.mod");
        let mut args = parse(&["--log-level", "none", "--manifest-path", manifest.to_str().unwrap()]);
        args.github_token = Some("t".into());

        let mut host = TestHost::new();
        let err = rank_dependencies(&mut host, &args).await.unwrap_err();
        assert!(err.to_string().contains("reading manifest"));
        assert!(host.output_str().contains("GitHub token found"));
        assert!(!host.output_str().contains("Scanning"));
    }

    #[test]
    fn test_cli_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("go.mod");
        fs::write(dir.path().join("gomod-rank.toml"), "workers = 2\n").unwrap();

        let args = parse(&[
            "--manifest-path",
            manifest.to_str().unwrap(),
            "--workers",
            "7",
            "--api-url",
            "http://localhost:1234",
        ]);
        let config = effective_config(&args).unwrap();
        assert_eq!(config.workers, 7);
        assert_eq!(config.api_base_url.as_str(), "http://localhost:1234/");
    }

    #[test]
    fn test_zero_workers_override_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("go.mod");
        let args = parse(&["--manifest-path", manifest.to_str().unwrap(), "--workers", "0"]);
        let _ = effective_config(&args).unwrap_err();
    }
}
