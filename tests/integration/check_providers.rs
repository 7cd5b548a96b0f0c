//! Tests for `capi-versions check-providers`

use super::common::{capi_versions_command, write_providers};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test(flavor = "multi_thread")]
async fn test_prints_only_responding_providers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/up/v2/info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "api_version": "2.150.0"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/broken/v2/info"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let workdir = TempDir::new().unwrap();
    let up = format!("{}/up/v2/info", server.uri());
    let providers = write_providers(
        workdir.path(),
        &[
            ("Broken", format!("{}/broken/v2/info", server.uri())),
            ("Up", up.clone()),
            ("Closed", "http://127.0.0.1:1/v2/info".to_string()),
        ],
    );

    let mut cmd = capi_versions_command();
    cmd.args(["check-providers", "--connect-timeout", "1"])
        .env("PROVIDERS_FILE", providers);
    let output = tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let printed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(printed, serde_json::json!([{"name": "Up", "url": up}]));
}
