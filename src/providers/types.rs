use serde::{Deserialize, Serialize};

/// Where to ask a provider for its current API version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderEndpoint {
    pub name: String,
    pub url: String,
}

impl ProviderEndpoint {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// The API version one provider reported during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderVersion {
    pub provider: String,
    pub version: String,
}

/// Body of a provider's info endpoint. Other fields are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiInfo {
    pub api_version: String,
}
