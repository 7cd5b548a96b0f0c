use crate::core::{VersionsError, VersionsResult};
use crate::di::ConfigProvider;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Where the list of provider endpoints comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProviderSource {
    /// The `assets/providers.json` list compiled into the binary
    #[default]
    Bundled,
    /// A local JSON file shaped like the bundled list
    File { path: PathBuf },
    /// A remote dashboard document with a `datasources` array
    Dashboard { url: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Token sent to the GitHub releases API. Requests go out
    /// unauthenticated when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_token: Option<String>,

    /// Port the static file server listens on
    #[serde(default = "default_port")]
    pub port: u16,

    /// GitHub API base URL
    #[serde(default = "default_github_api_url")]
    pub github_api_url: String,

    /// Repository whose release notes carry the API versions, as `owner/repo`
    #[serde(default = "default_changelog_repository")]
    pub changelog_repository: String,

    /// Directory the artifacts are written to and served from.
    /// Must already exist.
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// Seconds between scheduled pipeline runs
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,

    /// Timeout applied to every outbound HTTP request
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Maximum number of provider endpoints queried at once
    #[serde(default = "default_provider_concurrency")]
    pub provider_concurrency: usize,

    #[serde(default)]
    pub providers: ProviderSource,
}

fn default_port() -> u16 {
    8080
}

fn default_github_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_changelog_repository() -> String {
    "cloudfoundry/capi-release".to_string()
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_refresh_interval_secs() -> u64 {
    3600
}

fn default_request_timeout_secs() -> u64 {
    5
}

fn default_provider_concurrency() -> usize {
    8
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_token: None,
            port: default_port(),
            github_api_url: default_github_api_url(),
            changelog_repository: default_changelog_repository(),
            static_dir: default_static_dir(),
            refresh_interval_secs: default_refresh_interval_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            provider_concurrency: default_provider_concurrency(),
            providers: ProviderSource::default(),
        }
    }
}

impl Config {
    /// Load config from a YAML file. Missing fields take their defaults.
    pub fn load(path: &Path) -> VersionsResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            VersionsError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| VersionsError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Build the process configuration: the optional YAML file (or the
    /// defaults), then environment overrides on top.
    pub fn from_env(config_file: Option<&Path>) -> VersionsResult<Self> {
        let base = match config_file {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a key lookup (normally the process environment).
    pub fn with_overrides<F>(mut self, lookup: F) -> VersionsResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(token) = lookup("TOKEN").or_else(|| lookup("GITHUB_TOKEN")) {
            self.github_token = Some(token);
        }
        if let Some(port) = lookup("PORT") {
            self.port = parse_env("PORT", &port)?;
        }
        if let Some(url) = lookup("GITHUB_API_URL") {
            self.github_api_url = url;
        }
        if let Some(repo) = lookup("CHANGELOG_REPOSITORY") {
            self.changelog_repository = repo;
        }
        if let Some(dir) = lookup("STATIC_DIR") {
            self.static_dir = PathBuf::from(dir);
        }
        if let Some(secs) = lookup("REFRESH_INTERVAL_SECS") {
            self.refresh_interval_secs = parse_env("REFRESH_INTERVAL_SECS", &secs)?;
        }
        if let Some(secs) = lookup("REQUEST_TIMEOUT_SECS") {
            self.request_timeout_secs = parse_env("REQUEST_TIMEOUT_SECS", &secs)?;
        }
        if let Some(n) = lookup("PROVIDER_CONCURRENCY") {
            self.provider_concurrency = parse_env("PROVIDER_CONCURRENCY", &n)?;
        }

        match (lookup("PROVIDERS_FILE"), lookup("PROVIDERS_DASHBOARD_URL")) {
            (Some(_), Some(_)) => {
                return Err(VersionsError::Config(
                    "PROVIDERS_FILE and PROVIDERS_DASHBOARD_URL are mutually exclusive"
                        .to_string(),
                ))
            }
            (Some(path), None) => {
                self.providers = ProviderSource::File {
                    path: PathBuf::from(path),
                }
            }
            (None, Some(url)) => self.providers = ProviderSource::Dashboard { url },
            (None, None) => {}
        }

        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> VersionsResult<()> {
        self.repository()?;
        if self.refresh_interval_secs == 0 {
            return Err(VersionsError::Config(
                "refresh_interval_secs must be greater than zero".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(VersionsError::Config(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.provider_concurrency == 0 {
            return Err(VersionsError::Config(
                "provider_concurrency must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Split `changelog_repository` into `(owner, repo)`.
    pub fn repository(&self) -> VersionsResult<(&str, &str)> {
        split_repository(&self.changelog_repository)
    }
}

/// Split an `owner/repo` string.
pub fn split_repository(repository: &str) -> VersionsResult<(&str, &str)> {
    match repository.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok((owner, repo))
        }
        _ => Err(VersionsError::Config(format!(
            "Invalid changelog repository '{}', expected owner/repo",
            repository
        ))),
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> VersionsResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| VersionsError::Config(format!("Invalid value for {}: '{}'", key, value)))
}

// Implement ConfigProvider trait
impl ConfigProvider for Config {
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
        Duration::from_secs(self.request_timeout_secs)
    }

    fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    fn provider_concurrency(&self) -> usize {
        self.provider_concurrency
    }
}
