//! capi-versions: which Cloud Controller API version each provider runs,
//! and when that version was released.
//!
//! The crate polls provider info endpoints, dates each reported version
//! against the `CC API Version` markers in the capi-release notes on GitHub,
//! and publishes the joined list as static files for a browser page.

pub use capi_versions_core::{format_error_with_help, ErrorHelp, Version, VersionsError, VersionsResult};

/// Core module re-exported from `capi-versions-core`.
pub mod core {
    pub use capi_versions_core::core::*;
    pub use capi_versions_core::*;
}

/// Configuration management.
pub mod config;

/// Dependency injection infrastructure.
pub mod di;

/// GitHub releases client for the changelog.
pub mod github;

/// Version marker extraction from release notes.
pub mod release_notes;

/// Provider list loading and version queries.
pub mod providers;

/// Join of provider versions with dated releases.
pub mod reconcile;

/// Artifact writing.
pub mod publish;

/// Pipeline orchestration.
pub mod pipeline;

/// Static file server and scheduler.
pub mod server;
