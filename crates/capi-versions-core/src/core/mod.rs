pub mod error;
pub mod error_help;
pub mod version;

pub use error::{VersionsError, VersionsResult};
pub use version::Version;
