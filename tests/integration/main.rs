//! Integration tests for the capi-versions binary
//!
//! Upstream GitHub and provider endpoints are served by wiremock; the binary
//! is pointed at them through environment variables.

mod check_providers;
mod cli;
mod common;
mod generate;
