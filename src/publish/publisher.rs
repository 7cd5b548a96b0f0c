use crate::core::{VersionsError, VersionsResult};
use crate::reconcile::ReconciledRecord;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

pub const VERSIONS_JSON: &str = "versions.json";
pub const VERSIONS_JS: &str = "versions.js";
pub const TIMESTAMP_JS: &str = "timestamp.js";

/// Writes the reconciled records into the static directory
pub struct PublishWriter {
    static_dir: PathBuf,
}

impl PublishWriter {
    /// Create a writer targeting an existing directory
    pub fn new(static_dir: &Path) -> Self {
        Self {
            static_dir: static_dir.to_path_buf(),
        }
    }

    /// Publish the records, stamped with the current time
    pub fn publish(&self, records: &[ReconciledRecord]) -> VersionsResult<()> {
        self.publish_at(records, Utc::now())
    }

    /// Publish the records with an explicit generation time.
    ///
    /// Writes `versions.json`, `versions.js` and `timestamp.js`. Everything is
    /// serialized before the first write, and each file is replaced atomically.
    pub fn publish_at(
        &self,
        records: &[ReconciledRecord],
        generated_at: DateTime<Utc>,
    ) -> VersionsResult<()> {
        if !self.static_dir.is_dir() {
            return Err(VersionsError::Publish(format!(
                "Static directory {} does not exist",
                self.static_dir.display()
            )));
        }

        let json = serde_json::to_vec(records)
            .map_err(|e| VersionsError::Publish(format!("Failed to serialize versions: {}", e)))?;
        let script = render_versions_script(&json);
        let timestamp = render_timestamp_script(generated_at);

        tracing::info!("Writing {} ({} records)", VERSIONS_JSON, records.len());
        self.write_atomic(VERSIONS_JSON, &json)?;

        tracing::info!("Writing {}", VERSIONS_JS);
        self.write_atomic(VERSIONS_JS, &script)?;

        tracing::info!("Writing {}", TIMESTAMP_JS);
        self.write_atomic(TIMESTAMP_JS, timestamp.as_bytes())?;

        Ok(())
    }

    /// Write to a hidden temp file in the same directory, then rename over
    /// the target so readers never see a partial file.
    fn write_atomic(&self, name: &str, contents: &[u8]) -> VersionsResult<()> {
        let target = self.static_dir.join(name);
        let temp = self.static_dir.join(format!(".{}.tmp", name));

        fs::write(&temp, contents).map_err(|e| {
            VersionsError::Publish(format!("Failed to write {}: {}", temp.display(), e))
        })?;
        fs::rename(&temp, &target).map_err(|e| {
            let _ = fs::remove_file(&temp);
            VersionsError::Publish(format!("Failed to replace {}: {}", target.display(), e))
        })?;
        Ok(())
    }
}

/// `var versions = <json>` with no separator, for direct `<script>` inclusion.
pub fn render_versions_script(json: &[u8]) -> Vec<u8> {
    let mut script = b"var versions = ".to_vec();
    script.extend_from_slice(json);
    script
}

pub fn render_timestamp_script(generated_at: DateTime<Utc>) -> String {
    format!(
        "var timestamp = \"Backend data last generated at: {}\"",
        generated_at.format("%Y-%m-%d %H:%M:%S%.f +0000 UTC")
    )
}
