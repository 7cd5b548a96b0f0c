//! GitHub API type definitions

use serde::{Deserialize, Deserializer, Serialize};

/// One entry of the GitHub releases listing.
///
/// Only the fields the changelog needs are decoded; everything else in the
/// payload is ignored. Absent or `null` fields fall back to their zero value,
/// a field of the wrong type is a decode error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubRelease {
    /// `null` for drafts
    #[serde(default, deserialize_with = "null_as_empty")]
    pub published_at: String,
    /// Release notes. GitHub sends `null` for releases without notes.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub body: String,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
}

impl GitHubRelease {
    /// Drafts and prereleases never count as published versions.
    pub fn is_final(&self) -> bool {
        !self.draft && !self.prerelease
    }
}

/// A final release whose notes name a Cloud Controller API version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRelease {
    pub version: String,
    pub date: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_decodes_github_shape() {
        let json = r#"{
            "tag_name": "1.100.0",
            "published_at": "2021-06-01T12:00:00Z",
            "body": "CC API Version: 2.150.0",
            "draft": false,
            "prerelease": false,
            "assets": []
        }"#;
        let release: GitHubRelease = serde_json::from_str(json).unwrap();
        assert_eq!(release.published_at, "2021-06-01T12:00:00Z");
        assert!(release.is_final());
    }

    #[test]
    fn test_null_body_is_empty() {
        let json = r#"{"published_at": "x", "body": null, "draft": false, "prerelease": true}"#;
        let release: GitHubRelease = serde_json::from_str(json).unwrap();
        assert_eq!(release.body, "");
        assert!(!release.is_final());
    }

    #[test]
    fn test_draft_with_null_published_at() {
        let json = r#"{"published_at": null, "body": "notes", "draft": true}"#;
        let release: GitHubRelease = serde_json::from_str(json).unwrap();
        assert_eq!(release.published_at, "");
        assert!(release.draft);
        assert!(!release.prerelease);
    }

    #[test]
    fn test_wrong_field_type_is_an_error() {
        let json = r#"{"published_at": "x", "body": "", "draft": "no"}"#;
        assert!(serde_json::from_str::<GitHubRelease>(json).is_err());
    }
}
