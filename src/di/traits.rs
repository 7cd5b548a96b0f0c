//! Trait definitions for dependency injection

use crate::core::VersionsResult;
use crate::github::ParsedRelease;
use crate::providers::{ProviderEndpoint, ProviderVersion};
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;

/// Trait for configuration access
///
/// Provides read-only access to application configuration.
/// Implementations should be thread-safe (Send + Sync).
pub trait ConfigProvider: Send + Sync {
    /// Get the GitHub token, if one is configured
    fn github_token(&self) -> Option<&str>;

    /// Get the GitHub API base URL
    fn github_api_url(&self) -> &str;

    /// Get the changelog repository as `owner/repo`
    fn changelog_repository(&self) -> &str;

    /// Get the directory artifacts are published to
    fn static_dir(&self) -> &Path;

    /// Get the timeout applied to each outbound request
    fn request_timeout(&self) -> Duration;

    /// Get the interval between scheduled runs
    fn refresh_interval(&self) -> Duration;

    /// Get the maximum number of providers queried at once
    fn provider_concurrency(&self) -> usize;
}

/// Trait for the changelog source
///
/// Returns the dated API versions of the final releases of a repository.
/// Any failure is fatal to the current run.
#[async_trait]
pub trait ChangelogProvider: Send + Sync {
    async fn fetch_releases(&self, owner: &str, repo: &str) -> VersionsResult<Vec<ParsedRelease>>;
}

/// Trait for querying provider versions
///
/// Never fails as a whole: providers that cannot be queried are left out.
#[async_trait]
pub trait VersionProvider: Send + Sync {
    async fn fetch_versions(&self, endpoints: &[ProviderEndpoint]) -> Vec<ProviderVersion>;
}
