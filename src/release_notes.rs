//! Extraction of the Cloud Controller API version from free-text release notes.

use crate::core::{VersionsError, VersionsResult};
use regex::Regex;

/// Marker the capi-release notes use to announce the API version.
const API_VERSION_PATTERN: &str = r"CC API Version: ([0-9]+\.[0-9]+\.[0-9]+)";

/// Finds the `CC API Version: X.Y.Z` marker in release notes.
#[derive(Debug, Clone)]
pub struct ReleaseNoteParser {
    pattern: Regex,
}

impl ReleaseNoteParser {
    pub fn new() -> VersionsResult<Self> {
        let pattern = Regex::new(API_VERSION_PATTERN)
            .map_err(|e| VersionsError::Changelog(format!("Invalid regex: {}", e)))?;
        Ok(Self { pattern })
    }

    /// Return the `X.Y.Z` of the first marker in `body`, or `None` when the
    /// notes carry no marker. Never fails.
    pub fn parse_api_version(&self, body: &str) -> Option<String> {
        self.pattern
            .captures(body)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}
