//! Reachability probe used to prune dead entries from a provider list.

use crate::core::{VersionsError, VersionsResult};
use crate::providers::types::ProviderEndpoint;
use reqwest::Client as HttpClient;
use std::time::Duration;

/// Keep the providers whose URL answers a GET with a success status.
/// Connecting must finish within `connect_timeout` and the whole request
/// within `request_timeout`. Order is preserved.
pub async fn check_providers(
    endpoints: &[ProviderEndpoint],
    connect_timeout: Duration,
    request_timeout: Duration,
) -> VersionsResult<Vec<ProviderEndpoint>> {
    let client = HttpClient::builder()
        .user_agent("capi-versions")
        .connect_timeout(connect_timeout)
        .timeout(request_timeout)
        .build()
        .map_err(|e| VersionsError::Config(format!("Failed to create HTTP client: {}", e)))?;

    let mut working = Vec::new();
    for endpoint in endpoints {
        match client.get(&endpoint.url).send().await {
            Ok(response) if response.status().is_success() => working.push(endpoint.clone()),
            Ok(response) => {
                tracing::info!("{} answered HTTP {}", endpoint.name, response.status());
            }
            Err(e) => tracing::info!("{} unreachable: {}", endpoint.name, e),
        }
    }

    Ok(working)
}
