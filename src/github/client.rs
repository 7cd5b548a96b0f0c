//! GitHub API client implementation

use crate::core::{VersionsError, VersionsResult};
use crate::di::traits::{ChangelogProvider, ConfigProvider};
use crate::github::types::{GitHubRelease, ParsedRelease};
use crate::release_notes::ReleaseNoteParser;
use async_trait::async_trait;
use reqwest::{header, Client as HttpClient};

/// Number of releases requested per listing call (the API maximum).
const RELEASES_PER_PAGE: u32 = 100;

/// GitHub API client
///
/// Holds no per-run state: every call issues its own request, and an
/// exhausted quota comes back as the upstream 403.
pub struct GitHubClient {
    http_client: HttpClient,
    api_url: String,
    parser: ReleaseNoteParser,
}

impl GitHubClient {
    /// Create a new GitHub client
    pub fn new(config: &dyn ConfigProvider) -> VersionsResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("capi-versions"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        if let Some(token) = config.github_token() {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("token {}", token))
                    .map_err(|e| VersionsError::Config(format!("Invalid GitHub token: {}", e)))?,
            );
        }

        let http_client = HttpClient::builder()
            .default_headers(headers)
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| VersionsError::Changelog(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_url: config.github_api_url().trim_end_matches('/').to_string(),
            parser: ReleaseNoteParser::new()?,
        })
    }

    /// Get the most recent releases for a repository, newest first
    pub async fn get_releases(&self, owner: &str, repo: &str) -> VersionsResult<Vec<GitHubRelease>> {
        let url = format!(
            "{}/repos/{}/{}/releases?per_page={}",
            self.api_url,
            urlencoding::encode(owner),
            urlencoding::encode(repo),
            RELEASES_PER_PAGE
        );
        self.api_get(&url).await
    }

    /// Fetch the release history and keep the final releases whose notes
    /// carry an API version marker, in upstream order.
    pub async fn fetch_releases(
        &self,
        owner: &str,
        repo: &str,
    ) -> VersionsResult<Vec<ParsedRelease>> {
        let releases = self.get_releases(owner, repo).await?;
        let total = releases.len();

        let parsed: Vec<ParsedRelease> = releases
            .into_iter()
            .filter(GitHubRelease::is_final)
            .filter_map(|release| {
                self.parser
                    .parse_api_version(&release.body)
                    .map(|version| ParsedRelease {
                        version,
                        date: release.published_at,
                    })
            })
            .collect();

        tracing::debug!(
            "{}/{}: {} of {} releases carry an API version",
            owner,
            repo,
            parsed.len(),
            total
        );
        Ok(parsed)
    }

    /// Make an API request; any non-success status is an error
    async fn api_request(&self, url: &str) -> VersionsResult<reqwest::Response> {
        tracing::debug!("GET {}", url);
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| VersionsError::Changelog(format!("GitHub API request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(VersionsError::Changelog(format!(
                "GitHub API error: HTTP {}",
                response.status()
            )));
        }

        Ok(response)
    }

    /// Make an API GET request and parse JSON response
    async fn api_get<T: serde::de::DeserializeOwned>(&self, url: &str) -> VersionsResult<T> {
        let response = self.api_request(url).await?;

        response.json().await.map_err(|e| {
            VersionsError::Changelog(format!("Failed to parse GitHub API response: {}", e))
        })
    }
}

// Implement ChangelogProvider trait
#[async_trait]
impl ChangelogProvider for GitHubClient {
    async fn fetch_releases(&self, owner: &str, repo: &str) -> VersionsResult<Vec<ParsedRelease>> {
        Self::fetch_releases(self, owner, repo).await
    }
}
