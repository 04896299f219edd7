//! Integration test for the diagnostics emitted when lookups fail.
//!
//! Lives in its own test binary because it installs a process-wide logger. The run
//! uses `--log-level none` so the command layer never installs `env_logger` over it.

use gomod_rank_lib::Host;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs;
use std::sync::Mutex;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Logger that keeps every warning-or-worse message from the resolver in memory.
struct CapturingLogger {
    warnings: Mutex<Vec<String>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record<'_>) {
        // Only the tool's own resolver diagnostics; HTTP libraries may log too.
        if self.enabled(record.metadata()) && record.target().trim() == "hosting" {
            self.warnings.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    warnings: Mutex::new(Vec::new()),
};

struct TestHost {
    output_buf: Vec<u8>,
    error_buf: Vec<u8>,
}

impl Host for TestHost {
    fn output(&mut self) -> impl std::io::Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl std::io::Write {
        &mut self.error_buf
    }

    fn exit(&mut self, _code: i32) {}
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call CreateIoCompletionPort")]
async fn test_each_failed_lookup_logs_one_warning() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Warn);

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/alpha"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{ "full_name": "acme/alpha", "default_branch": "main" }"#))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/garbled"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("go.mod");
    fs::write(
        &manifest,
        "require (\n\tgithub.com/acme/alpha v1.0.0\n\tgithub.com/acme/missing v1.0.0\n\tgithub.com/acme/garbled v1.0.0\n)\n",
    )
    .unwrap();

    let uri = server.uri();
    let mut host = TestHost {
        output_buf: Vec::new(),
        error_buf: Vec::new(),
    };
    gomod_rank_lib::run(
        &mut host,
        [
            "gomod-rank",
            "--manifest-path",
            manifest.to_str().unwrap(),
            "--api-url",
            uri.as_str(),
            "--github-token",
            "secret",
            "--workers",
            "2",
            "--log-level",
            "none",
        ],
    )
    .await
    .unwrap();

    let mut warnings = LOGGER.warnings.lock().unwrap().clone();
    warnings.sort();
    assert_eq!(warnings.len(), 2, "unexpected warnings: {warnings:?}");
    assert!(warnings[0].contains("github.com/acme/garbled"), "unexpected warning: {}", warnings[0]);
    assert!(warnings[1].contains("github.com/acme/missing"), "unexpected warning: {}", warnings[1]);
    assert!(warnings[1].contains("404"), "unexpected warning: {}", warnings[1]);

    let output = String::from_utf8_lossy(&host.output_buf);
    assert!(output.contains("acme/alpha"));
    assert!(!output.contains("acme/missing"));
    assert!(host.error_buf.is_empty());
}
