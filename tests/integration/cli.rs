//! Tests for argument and configuration handling

use super::common::capi_versions_command;
use predicates::prelude::*;

#[test]
fn test_help_lists_subcommands() {
    capi_versions_command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("check-providers"));
}

#[test]
fn test_invalid_port_fails_at_startup() {
    capi_versions_command()
        .arg("generate")
        .env("PORT", "not-a-port")
        .assert()
        .failure()
        .stderr(predicate::str::contains("PORT"));
}

#[test]
fn test_missing_config_file_fails() {
    capi_versions_command()
        .args(["--config", "/definitely/not/here.yaml", "generate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_unreadable_provider_list_is_fatal() {
    capi_versions_command()
        .arg("generate")
        .env("PROVIDERS_FILE", "/definitely/not/providers.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Provider error"));
}
