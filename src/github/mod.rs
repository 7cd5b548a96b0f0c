//! GitHub integration for the changelog
//!
//! This module fetches the release listing of the changelog repository and
//! turns final releases whose notes carry a `CC API Version` marker into
//! dated versions.

pub mod client;
pub mod types;

pub use client::GitHubClient;
pub use types::{GitHubRelease, ParsedRelease};
