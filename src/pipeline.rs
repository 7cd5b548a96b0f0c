//! One fetch → reconcile → publish run.

use crate::config::split_repository;
use crate::core::VersionsResult;
use crate::di::ServiceContainer;
use crate::providers::ProviderEndpoint;
use crate::publish::PublishWriter;
use crate::reconcile::reconcile;
use tokio::sync::Mutex;

/// What a call to [`Pipeline::run`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// Artifacts were regenerated with this many records
    Published { records: usize },
    /// Another run was still in progress, nothing was done
    Skipped,
}

/// The version reconciliation pipeline.
///
/// Stateless between runs apart from the in-progress guard: every run
/// refetches everything and fully replaces the published artifacts.
pub struct Pipeline {
    services: ServiceContainer,
    providers: Vec<ProviderEndpoint>,
    writer: PublishWriter,
    in_progress: Mutex<()>,
}

impl Pipeline {
    pub fn new(services: ServiceContainer, providers: Vec<ProviderEndpoint>) -> Self {
        let writer = PublishWriter::new(services.config().static_dir());
        Self {
            services,
            providers,
            writer,
            in_progress: Mutex::new(()),
        }
    }

    /// Run the pipeline once.
    ///
    /// Provider failures only drop that provider. A changelog or publish
    /// failure aborts the run and leaves the previous artifacts in place.
    pub async fn run(&self) -> VersionsResult<PipelineOutcome> {
        let Ok(_guard) = self.in_progress.try_lock() else {
            tracing::warn!("Previous run still in progress, skipping this one");
            return Ok(PipelineOutcome::Skipped);
        };

        let (owner, repo) = split_repository(self.services.config().changelog_repository())?;

        tracing::info!(
            "Getting API versions from {} providers and releases from {}/{}",
            self.providers.len(),
            owner,
            repo
        );
        let (versions, releases) = tokio::join!(
            self.services.versions().fetch_versions(&self.providers),
            self.services.changelog().fetch_releases(owner, repo),
        );
        let releases = releases?;
        tracing::info!(
            "{} providers answered, {} releases carry an API version",
            versions.len(),
            releases.len()
        );

        let records = reconcile(&versions, &releases);
        tracing::info!("Reconciled {} records", records.len());

        self.writer.publish(&records)?;
        Ok(PipelineOutcome::Published {
            records: records.len(),
        })
    }

    /// Run the pipeline and log the outcome instead of returning an error.
    /// Used by the scheduler, where the next tick is the only retry.
    pub async fn run_logged(&self) {
        match self.run().await {
            Ok(PipelineOutcome::Published { records }) => {
                tracing::info!("Published {} records", records);
            }
            Ok(PipelineOutcome::Skipped) => {}
            Err(e) => tracing::error!("Pipeline run failed: {}", e),
        }
    }
}
