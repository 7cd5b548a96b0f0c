//! Dependency injection infrastructure
//!
//! The pipeline talks to the changelog and to providers through traits, so
//! tests can run it against mocks instead of the network.
//!
//! # Example (Production)
//! ```no_run
//! use capi_versions::config::Config;
//! use capi_versions::di::ServiceContainer;
//!
//! # fn example() -> capi_versions::core::VersionsResult<()> {
//! let config = Config::from_env(None)?;
//! let container = ServiceContainer::new(&config)?;
//! # Ok(())
//! # }
//! ```

pub mod container;
pub mod mocks;
pub mod traits;

// Re-export key types
pub use container::ServiceContainer;
pub use traits::{ChangelogProvider, ConfigProvider, VersionProvider};
