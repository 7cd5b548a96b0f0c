//! Querying each provider for the API version it currently runs.

use crate::core::{VersionsError, VersionsResult};
use crate::di::traits::{ConfigProvider, VersionProvider};
use crate::providers::types::{ApiInfo, ProviderEndpoint, ProviderVersion};
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tokio::task::{JoinError, JoinSet};

/// Queries provider info endpoints with bounded concurrency.
///
/// A provider that cannot be reached or answers with something other than
/// `{"api_version": "..."}` is logged and left out of the result; it never
/// fails the whole fetch.
#[derive(Clone)]
pub struct ProviderVersionFetcher {
    http_client: HttpClient,
    concurrency: usize,
}

impl ProviderVersionFetcher {
    pub fn new(config: &dyn ConfigProvider) -> VersionsResult<Self> {
        let http_client = HttpClient::builder()
            .user_agent("capi-versions")
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| VersionsError::Config(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self::with_client(http_client, config.provider_concurrency()))
    }

    pub fn with_client(http_client: HttpClient, concurrency: usize) -> Self {
        Self {
            http_client,
            concurrency: concurrency.max(1),
        }
    }

    /// Fetch every endpoint's version. Output order follows `endpoints`.
    pub async fn fetch_versions(&self, endpoints: &[ProviderEndpoint]) -> Vec<ProviderVersion> {
        let mut slots: Vec<Option<ProviderVersion>> = vec![None; endpoints.len()];
        let mut join_set = JoinSet::new();

        for (index, endpoint) in endpoints.iter().cloned().enumerate() {
            if join_set.len() >= self.concurrency {
                // Wait for one query to finish before starting another
                if let Some(joined) = join_set.join_next().await {
                    Self::record_result(&mut slots, joined);
                }
            }

            let client = self.http_client.clone();
            join_set.spawn(async move {
                let result = query_version(&client, &endpoint.url).await;
                (index, endpoint.name, result)
            });
        }

        while let Some(joined) = join_set.join_next().await {
            Self::record_result(&mut slots, joined);
        }

        slots.into_iter().flatten().collect()
    }

    fn record_result(
        slots: &mut [Option<ProviderVersion>],
        joined: Result<(usize, String, VersionsResult<String>), JoinError>,
    ) {
        match joined {
            Ok((index, provider, Ok(version))) => {
                tracing::debug!("{} reports API version {}", provider, version);
                slots[index] = Some(ProviderVersion { provider, version });
            }
            Ok((_, provider, Err(e))) => {
                tracing::warn!("Skipping provider {}: {}", provider, e);
            }
            Err(e) => {
                tracing::warn!("Provider query task failed: {}", e);
            }
        }
    }
}

/// Only network and decode errors count as failures; the body is decoded
/// whatever the status code.
async fn query_version(client: &HttpClient, url: &str) -> VersionsResult<String> {
    let response = client.get(url).send().await?;
    let status = response.status();
    let info: ApiInfo = response.json().await?;
    if !status.is_success() {
        tracing::debug!("{} answered HTTP {} with an API version", url, status);
    }
    Ok(info.api_version)
}

#[async_trait]
impl VersionProvider for ProviderVersionFetcher {
    async fn fetch_versions(&self, endpoints: &[ProviderEndpoint]) -> Vec<ProviderVersion> {
        Self::fetch_versions(self, endpoints).await
    }
}
