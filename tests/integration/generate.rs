//! Tests for `capi-versions generate`

use super::common::{capi_versions_command, write_providers};
use std::fs;
use std::process::Output;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_upstreams() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/cloudfoundry/capi-release/releases"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "published_at": "2021-07-01T00:00:00Z",
                "body": "CC API Version: 3.4.6",
                "draft": false,
                "prerelease": true
            },
            {
                "published_at": "2021-06-01",
                "body": "## Highlights\r\nCC API Version: 3.4.5\r\n",
                "draft": false,
                "prerelease": false
            }
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/a/v2/info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "",
            "api_version": "3.4.5"
        })))
        .mount(&server)
        .await;

    server
}

async fn run_generate(server: &MockServer, workdir: &TempDir, static_dir: &str) -> Output {
    let providers = write_providers(
        workdir.path(),
        &[
            ("A", format!("{}/a/v2/info", server.uri())),
            ("B", "http://127.0.0.1:1/v2/info".to_string()),
        ],
    );

    let mut cmd = capi_versions_command();
    cmd.arg("generate")
        .current_dir(workdir.path())
        .env("GITHUB_API_URL", server.uri())
        .env("PROVIDERS_FILE", providers)
        .env("STATIC_DIR", static_dir)
        .env("REQUEST_TIMEOUT_SECS", "2");

    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_generate_publishes_reconciled_versions() {
    let server = mock_upstreams().await;
    let workdir = TempDir::new().unwrap();
    fs::create_dir(workdir.path().join("static")).unwrap();

    let output = run_generate(&server, &workdir, "static").await;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let static_dir = workdir.path().join("static");
    let json = fs::read_to_string(static_dir.join("versions.json")).unwrap();
    assert_eq!(
        json,
        r#"[{"Provider":"A","Version":"3.4.5","Date":"2021-06-01"}]"#
    );

    let script = fs::read_to_string(static_dir.join("versions.js")).unwrap();
    assert_eq!(script, format!("var versions = {}", json));

    let timestamp = fs::read_to_string(static_dir.join("timestamp.js")).unwrap();
    assert!(timestamp.starts_with("var timestamp = \"Backend data last generated at: "));
    assert!(timestamp.ends_with(" +0000 UTC\""));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_generate_twice_is_byte_identical() {
    let server = mock_upstreams().await;
    let workdir = TempDir::new().unwrap();
    fs::create_dir(workdir.path().join("static")).unwrap();

    assert!(run_generate(&server, &workdir, "static").await.status.success());
    let first = fs::read(workdir.path().join("static/versions.json")).unwrap();

    assert!(run_generate(&server, &workdir, "static").await.status.success());
    let second = fs::read(workdir.path().join("static/versions.json")).unwrap();

    assert_eq!(first, second);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_generate_without_static_dir_fails() {
    let server = mock_upstreams().await;
    let workdir = TempDir::new().unwrap();

    let output = run_generate(&server, &workdir, "static").await;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist"), "stderr: {}", stderr);
    assert!(!workdir.path().join("static").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_changelog_failure_fails_without_publishing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/cloudfoundry/capi-release/releases"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "message": "API rate limit exceeded"
        })))
        .mount(&server)
        .await;

    let workdir = TempDir::new().unwrap();
    fs::create_dir(workdir.path().join("static")).unwrap();

    let output = run_generate(&server, &workdir, "static").await;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Changelog error"), "stderr: {}", stderr);
    assert!(stderr.contains("TOKEN"), "stderr: {}", stderr);
    assert!(!workdir.path().join("static/versions.json").exists());
}
