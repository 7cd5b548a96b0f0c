//! Joining provider versions with dated changelog releases.

use crate::core::Version;
use crate::github::ParsedRelease;
use crate::providers::ProviderVersion;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// One provider running a version the changelog dates.
///
/// Field names are capitalized on the wire; the browser page reads
/// `Provider`, `Version` and `Date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReconciledRecord {
    pub provider: String,
    pub version: String,
    pub date: String,
}

/// Inner-join `versions` with `releases` on exact version string, then sort
/// ascending by semantic version.
///
/// A version matching several releases yields one record per release. Ties
/// keep join order (provider order, then release order). Versions that do
/// not parse as semver are kept and placed after all parseable ones.
pub fn reconcile(versions: &[ProviderVersion], releases: &[ParsedRelease]) -> Vec<ReconciledRecord> {
    let mut records = Vec::new();
    for provider in versions {
        for release in releases {
            if provider.version == release.version {
                records.push(ReconciledRecord {
                    provider: provider.provider.clone(),
                    version: provider.version.clone(),
                    date: release.date.clone(),
                });
            }
        }
    }

    sort_by_version(&mut records);
    records
}

/// Stable ascending sort by semantic version, unparseable versions last.
pub fn sort_by_version(records: &mut Vec<ReconciledRecord>) {
    let mut keyed: Vec<(Option<Version>, ReconciledRecord)> = records
        .drain(..)
        .map(|record| (Version::parse(&record.version).ok(), record))
        .collect();

    let unparseable: BTreeSet<&str> = keyed
        .iter()
        .filter(|(parsed, _)| parsed.is_none())
        .map(|(_, record)| record.version.as_str())
        .collect();
    for version in unparseable {
        tracing::warn!("Unparseable version '{}' sorted last", version);
    }

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    records.extend(keyed.into_iter().map(|(_, record)| record));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pv(provider: &str, version: &str) -> ProviderVersion {
        ProviderVersion {
            provider: provider.to_string(),
            version: version.to_string(),
        }
    }

    fn rel(version: &str, date: &str) -> ParsedRelease {
        ParsedRelease {
            version: version.to_string(),
            date: date.to_string(),
        }
    }

    fn rec(provider: &str, version: &str, date: &str) -> ReconciledRecord {
        ReconciledRecord {
            provider: provider.to_string(),
            version: version.to_string(),
            date: date.to_string(),
        }
    }

    #[test]
    fn test_exact_match_join() {
        let records = reconcile(
            &[pv("A", "2.1.0")],
            &[rel("2.1.0", "2020-01-01"), rel("2.1.1", "2020-02-01")],
        );
        assert_eq!(records, vec![rec("A", "2.1.0", "2020-01-01")]);
    }

    #[test]
    fn test_join_is_string_equality_not_semver_equality() {
        let records = reconcile(
            &[pv("A", "2.1.0+build"), pv("B", "02.1.0")],
            &[rel("2.1.0", "2020-01-01")],
        );
        assert!(records.is_empty());
    }

    #[test]
    fn test_duplicate_releases_emit_one_record_each() {
        let records = reconcile(
            &[pv("A", "2.1.0")],
            &[rel("2.1.0", "2020-01-01"), rel("2.1.0", "2020-01-05")],
        );
        assert_eq!(
            records,
            vec![rec("A", "2.1.0", "2020-01-01"), rec("A", "2.1.0", "2020-01-05")]
        );
    }

    #[test]
    fn test_numeric_sort_order() {
        let records = reconcile(
            &[pv("A", "1.10.0"), pv("B", "2.0.0"), pv("C", "1.2.0")],
            &[
                rel("1.2.0", "d1"),
                rel("1.10.0", "d2"),
                rel("2.0.0", "d3"),
            ],
        );
        let versions: Vec<&str> = records.iter().map(|r| r.version.as_str()).collect();
        assert_eq!(versions, vec!["1.2.0", "1.10.0", "2.0.0"]);
    }

    #[test]
    fn test_ties_keep_provider_order() {
        let records = reconcile(
            &[pv("Z", "2.0.0"), pv("A", "1.0.0"), pv("M", "2.0.0")],
            &[rel("2.0.0", "d2"), rel("1.0.0", "d1")],
        );
        assert_eq!(
            records,
            vec![
                rec("A", "1.0.0", "d1"),
                rec("Z", "2.0.0", "d2"),
                rec("M", "2.0.0", "d2"),
            ]
        );
    }

    #[test]
    fn test_unparseable_versions_sorted_last() {
        let mut records = vec![
            rec("X", "garbage", "d0"),
            rec("A", "2.0.0", "d2"),
            rec("Y", "1.0", "d9"),
            rec("B", "1.0.0", "d1"),
        ];
        sort_by_version(&mut records);
        assert_eq!(
            records,
            vec![
                rec("B", "1.0.0", "d1"),
                rec("A", "2.0.0", "d2"),
                rec("X", "garbage", "d0"),
                rec("Y", "1.0", "d9"),
            ]
        );
    }

    #[test]
    fn test_no_overlap_is_empty() {
        assert!(reconcile(&[pv("A", "1.0.0")], &[rel("2.0.0", "d")]).is_empty());
        assert!(reconcile(&[], &[rel("2.0.0", "d")]).is_empty());
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_string(&vec![rec("A", "3.4.5", "2021-06-01")]).unwrap();
        assert_eq!(json, r#"[{"Provider":"A","Version":"3.4.5","Date":"2021-06-01"}]"#);
    }
}
