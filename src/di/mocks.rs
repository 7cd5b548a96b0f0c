//! Mock implementations of service traits for testing

use super::traits::{ChangelogProvider, ConfigProvider, VersionProvider};
use crate::core::{VersionsError, VersionsResult};
use crate::github::ParsedRelease;
use crate::providers::{ProviderEndpoint, ProviderVersion};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Mock configuration provider for testing
///
/// # Example
///
/// ```
/// use capi_versions::di::mocks::MockConfigProvider;
/// use capi_versions::di::ConfigProvider;
/// use std::path::PathBuf;
///
/// let config = MockConfigProvider {
///     static_dir: PathBuf::from("/tmp/capi-static"),
///     ..Default::default()
/// };
///
/// assert_eq!(config.static_dir(), PathBuf::from("/tmp/capi-static"));
/// ```
#[derive(Clone)]
pub struct MockConfigProvider {
    pub github_token: Option<String>,
    pub github_api_url: String,
    pub changelog_repository: String,
    pub static_dir: PathBuf,
    pub request_timeout: Duration,
    pub refresh_interval: Duration,
    pub provider_concurrency: usize,
}

impl Default for MockConfigProvider {
    fn default() -> Self {
        Self {
            github_token: None,
            github_api_url: "https://api.github.com".to_string(),
            changelog_repository: "cloudfoundry/capi-release".to_string(),
            static_dir: PathBuf::from("/tmp/capi-versions-test-static"),
            request_timeout: Duration::from_secs(2),
            refresh_interval: Duration::from_secs(3600),
            provider_concurrency: 4,
        }
    }
}

impl ConfigProvider for MockConfigProvider {
    fn github_token(&self) -> Option<&str> {
        self.github_token.as_deref()
    }

    fn github_api_url(&self) -> &str {
        &self.github_api_url
    }

    fn changelog_repository(&self) -> &str {
        &self.changelog_repository
    }

    fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    fn provider_concurrency(&self) -> usize {
        self.provider_concurrency
    }
}

/// Mock changelog returning a fixed release list, or failing
#[derive(Default)]
pub struct MockChangelogProvider {
    pub releases: Vec<ParsedRelease>,
    pub error: Option<String>,
    calls: AtomicUsize,
}

impl MockChangelogProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_releases(releases: Vec<ParsedRelease>) -> Self {
        Self {
            releases,
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            error: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// Add a release to the mock
    pub fn add_release(&mut self, version: &str, date: &str) {
        self.releases.push(ParsedRelease {
            version: version.to_string(),
            date: date.to_string(),
        });
    }

    /// Number of times `fetch_releases` was called
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChangelogProvider for MockChangelogProvider {
    async fn fetch_releases(
        &self,
        _owner: &str,
        _repo: &str,
    ) -> VersionsResult<Vec<ParsedRelease>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.error {
            Some(ref message) => Err(VersionsError::Changelog(message.clone())),
            None => Ok(self.releases.clone()),
        }
    }
}

/// Mock provider fetcher keyed by endpoint URL.
///
/// URLs without a configured version behave like an unreachable provider.
#[derive(Default)]
pub struct MockVersionProvider {
    pub versions: HashMap<String, String>,
}

impl MockVersionProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `url` report `version`
    pub fn add_version(&mut self, url: &str, version: &str) {
        self.versions.insert(url.to_string(), version.to_string());
    }
}

#[async_trait]
impl VersionProvider for MockVersionProvider {
    async fn fetch_versions(&self, endpoints: &[ProviderEndpoint]) -> Vec<ProviderVersion> {
        endpoints
            .iter()
            .filter_map(|endpoint| {
                self.versions.get(&endpoint.url).map(|version| ProviderVersion {
                    provider: endpoint.name.clone(),
                    version: version.clone(),
                })
            })
            .collect()
    }
}
