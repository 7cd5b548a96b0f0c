//! Service container for dependency injection

use super::traits::{ChangelogProvider, ConfigProvider, VersionProvider};
use crate::config::Config;
use crate::core::VersionsResult;
use crate::github::GitHubClient;
use crate::providers::ProviderVersionFetcher;
use std::sync::Arc;

/// Service container for dependency injection
///
/// Holds the services a pipeline run needs as trait objects, so tests can
/// swap the network-facing ones for mocks.
///
/// # Example (Testing)
///
/// ```
/// use capi_versions::di::{ServiceContainer, mocks::*};
/// use std::sync::Arc;
///
/// let config = Arc::new(MockConfigProvider::default());
/// let changelog = Arc::new(MockChangelogProvider::new());
/// let versions = Arc::new(MockVersionProvider::new());
///
/// let container = ServiceContainer::with_providers(config, changelog, versions);
/// assert_eq!(container.config().changelog_repository(), "cloudfoundry/capi-release");
/// ```
#[derive(Clone)]
pub struct ServiceContainer {
    pub config: Arc<dyn ConfigProvider>,
    pub changelog: Arc<dyn ChangelogProvider>,
    pub versions: Arc<dyn VersionProvider>,
}

impl ServiceContainer {
    /// Create a service container with production implementations
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be built (for example, the
    /// token is not a valid header value).
    pub fn new(config: &Config) -> VersionsResult<Self> {
        Ok(Self {
            config: Arc::new(config.clone()),
            changelog: Arc::new(GitHubClient::new(config)?),
            versions: Arc::new(ProviderVersionFetcher::new(config)?),
        })
    }

    /// Create a service container with custom provider implementations
    pub fn with_providers(
        config: Arc<dyn ConfigProvider>,
        changelog: Arc<dyn ChangelogProvider>,
        versions: Arc<dyn VersionProvider>,
    ) -> Self {
        Self {
            config,
            changelog,
            versions,
        }
    }

    /// Get the configuration provider
    pub fn config(&self) -> &dyn ConfigProvider {
        self.config.as_ref()
    }

    /// Get the changelog provider
    pub fn changelog(&self) -> &dyn ChangelogProvider {
        self.changelog.as_ref()
    }

    /// Get the provider version fetcher
    pub fn versions(&self) -> &dyn VersionProvider {
        self.versions.as_ref()
    }
}
