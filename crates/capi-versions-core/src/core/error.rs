use thiserror::Error;

pub type VersionsResult<T> = Result<T, VersionsError>;

#[derive(Error, Debug)]
pub enum VersionsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Fetching or decoding the release history failed.
    #[error("Changelog error: {0}")]
    Changelog(String),

    /// The provider list could not be loaded.
    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Version error: {0}")]
    Version(String),

    /// Serializing or writing the published artifacts failed.
    #[error("Publish error: {0}")]
    Publish(String),

    #[error("Server error: {0}")]
    Server(String),
}
