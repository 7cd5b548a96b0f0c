//! Common utilities for integration tests

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variables the binary reads; cleared so the host environment
/// cannot leak into a test.
const CONFIG_ENV: &[&str] = &[
    "TOKEN",
    "GITHUB_TOKEN",
    "PORT",
    "GITHUB_API_URL",
    "CHANGELOG_REPOSITORY",
    "STATIC_DIR",
    "REFRESH_INTERVAL_SECS",
    "REQUEST_TIMEOUT_SECS",
    "PROVIDER_CONCURRENCY",
    "PROVIDERS_FILE",
    "PROVIDERS_DASHBOARD_URL",
];

pub fn capi_versions_command() -> Command {
    let mut cmd = Command::cargo_bin("capi-versions").unwrap();
    for key in CONFIG_ENV {
        cmd.env_remove(key);
    }
    cmd.env("RUST_LOG", "warn");
    cmd
}

/// Write a `[{name, url}]` provider list and return its path.
pub fn write_providers(dir: &Path, providers: &[(&str, String)]) -> PathBuf {
    let list: Vec<serde_json::Value> = providers
        .iter()
        .map(|(name, url)| serde_json::json!({"name": name, "url": url}))
        .collect();
    let path = dir.join("providers.json");
    fs::write(&path, serde_json::to_string(&list).unwrap()).unwrap();
    path
}
