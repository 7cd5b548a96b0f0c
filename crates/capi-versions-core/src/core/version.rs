use crate::core::error::{VersionsError, VersionsResult};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A semantic version as reported by providers and release notes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// Pre-release version (e.g., "alpha.1", "rc.1")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerelease: Option<String>,
    /// Build metadata (e.g., "build.123")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_metadata: Option<String>,
}

impl Version {
    /// Parse a strict `MAJOR.MINOR.PATCH[-pre][+build]` string.
    ///
    /// Unlike looser package-manager parsers, missing components are an error:
    /// "2.1" is not a valid API version.
    pub fn parse(s: &str) -> VersionsResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(VersionsError::Version("Empty version string".to_string()));
        }

        let (version_prerelease, build_metadata) = match s.split_once('+') {
            Some((rest, build)) => (rest, Some(non_empty_identifier(build, s)?)),
            None => (s, None),
        };

        let (core, prerelease) = match version_prerelease.split_once('-') {
            Some((core, pre)) => (core, Some(non_empty_identifier(pre, s)?)),
            None => (version_prerelease, None),
        };

        let parts: Vec<&str> = core.split('.').collect();
        if parts.len() != 3 {
            return Err(VersionsError::Version(format!(
                "Invalid version format: {}",
                s
            )));
        }

        let number = |part: &str, label: &str| -> VersionsResult<u64> {
            if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
                return Err(VersionsError::Version(format!(
                    "Invalid {} version: {}",
                    label, s
                )));
            }
            part.parse()
                .map_err(|_| VersionsError::Version(format!("Invalid {} version: {}", label, s)))
        };

        Ok(Self {
            major: number(parts[0], "major")?,
            minor: number(parts[1], "minor")?,
            patch: number(parts[2], "patch")?,
            prerelease,
            build_metadata,
        })
    }
}

fn non_empty_identifier(part: &str, whole: &str) -> VersionsResult<String> {
    if part.is_empty() || part.split('.').any(str::is_empty) {
        return Err(VersionsError::Version(format!(
            "Invalid version format: {}",
            whole
        )));
    }
    Ok(part.to_string())
}

// Build metadata does not take part in equality or precedence.
impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.prerelease == other.prerelease
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.major, self.minor, self.patch).cmp(&(other.major, other.minor, other.patch)) {
            Ordering::Equal => match (&self.prerelease, &other.prerelease) {
                (None, None) => Ordering::Equal,
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (Some(a), Some(b)) => compare_prerelease_identifiers(a, b),
            },
            other => other,
        }
    }
}

fn compare_prerelease_identifiers(a: &str, b: &str) -> Ordering {
    let a_parts: Vec<&str> = a.split('.').collect();
    let b_parts: Vec<&str> = b.split('.').collect();

    for (a_part, b_part) in a_parts.iter().zip(b_parts.iter()) {
        let ordering = match (a_part.parse::<u64>(), b_part.parse::<u64>()) {
            (Ok(a_num), Ok(b_num)) => a_num.cmp(&b_num),
            (Ok(_), Err(_)) => Ordering::Less,
            (Err(_), Ok(_)) => Ordering::Greater,
            (Err(_), Err(_)) => a_part.cmp(b_part),
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    a_parts.len().cmp(&b_parts.len())
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(ref pre) = self.prerelease {
            write!(f, "-{}", pre)?;
        }
        if let Some(ref build) = self.build_metadata {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Version {
    type Err = VersionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
