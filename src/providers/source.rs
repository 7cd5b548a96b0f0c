//! Loading the provider list from the bundled asset, a local file, or a
//! remote dashboard document.

use crate::config::ProviderSource;
use crate::core::{VersionsError, VersionsResult};
use crate::providers::types::ProviderEndpoint;
use serde::Deserialize;
use std::fs;

/// Provider list compiled into the binary.
const BUNDLED_PROVIDERS: &str = include_str!("../../assets/providers.json");

#[derive(Deserialize)]
struct Dashboard {
    datasources: Vec<DashboardDatasource>,
}

#[derive(Deserialize)]
struct DashboardDatasource {
    name: String,
    settings: DatasourceSettings,
}

#[derive(Deserialize)]
struct DatasourceSettings {
    url: String,
}

impl From<DashboardDatasource> for ProviderEndpoint {
    fn from(ds: DashboardDatasource) -> Self {
        ProviderEndpoint::new(ds.name, ds.settings.url)
    }
}

/// Parse a flat `[{name, url}]` provider list.
pub fn parse_provider_list(content: &str) -> VersionsResult<Vec<ProviderEndpoint>> {
    serde_json::from_str(content)
        .map_err(|e| VersionsError::Provider(format!("Failed to parse provider list: {}", e)))
}

/// Parse a dashboard document and flatten its datasources.
pub fn parse_dashboard(content: &str) -> VersionsResult<Vec<ProviderEndpoint>> {
    let dashboard: Dashboard = serde_json::from_str(content)
        .map_err(|e| VersionsError::Provider(format!("Failed to parse dashboard: {}", e)))?;
    Ok(dashboard
        .datasources
        .into_iter()
        .map(ProviderEndpoint::from)
        .collect())
}

/// Load the provider endpoints described by `source`.
///
/// Any failure here is fatal to the process: without providers there is
/// nothing to reconcile.
pub async fn load_providers(
    source: &ProviderSource,
    http_client: &reqwest::Client,
) -> VersionsResult<Vec<ProviderEndpoint>> {
    let providers = match source {
        ProviderSource::Bundled => parse_provider_list(BUNDLED_PROVIDERS)?,
        ProviderSource::File { path } => {
            let content = fs::read_to_string(path).map_err(|e| {
                VersionsError::Provider(format!(
                    "Failed to read provider list {}: {}",
                    path.display(),
                    e
                ))
            })?;
            parse_provider_list(&content)?
        }
        ProviderSource::Dashboard { url } => {
            let response = http_client.get(url).send().await.map_err(|e| {
                VersionsError::Provider(format!("Failed to fetch dashboard {}: {}", url, e))
            })?;
            if !response.status().is_success() {
                return Err(VersionsError::Provider(format!(
                    "Failed to fetch dashboard {}: HTTP {}",
                    url,
                    response.status()
                )));
            }
            let body = response.text().await.map_err(|e| {
                VersionsError::Provider(format!("Failed to read dashboard {}: {}", url, e))
            })?;
            parse_dashboard(&body)?
        }
    };

    tracing::info!("Loaded {} providers", providers.len());
    Ok(providers)
}
